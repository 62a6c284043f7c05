use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

pub static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone number pattern compiles"));

const MIN_PASSWORD_LEN: usize = 6;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_full_name_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "Full name is required"));
    }
    Ok(())
}

pub fn validate_password_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "Password is required"));
    }
    Ok(())
}

/// An empty string is accepted and means "keep the current password".
pub fn validate_optional_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() >= MIN_PASSWORD_LEN {
        return Ok(());
    }
    Err(error("length", "Password must be at least 6 characters"))
}

pub fn validate_past_date(value: &NaiveDate) -> Result<(), ValidationError> {
    if *value < Local::now().date_naive() {
        return Ok(());
    }
    Err(error("past", "Date of birth must be in the past"))
}

/// Flattens `ValidationErrors` into `{ "fieldName": ["message", ..] }` using
/// the JSON (camelCase) field names.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (to_camel_case(&field.to_string()), messages)
        })
        .collect()
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
