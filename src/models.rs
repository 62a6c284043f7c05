use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::employee::{Employee, Gender};
use crate::utils::validation::{
    PHONE_NUMBER, validate_full_name_not_blank, validate_optional_password, validate_past_date,
    validate_password_not_blank,
};

/// Uniform `{success, data, message}` wrapper used on every response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: false,
            data,
            message: message.into(),
        }
    }
}

impl ApiResponse<()> {
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
        }
    }
}

// No Debug: carries a plaintext password.
#[derive(Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    #[validate(
        custom(function = "validate_full_name_not_blank"),
        length(min = 4, max = 160, message = "Full name must be between 4 and 160 characters")
    )]
    #[schema(example = "Jane Doe")]
    #[serde(default)]
    pub full_name: String,

    #[validate(email(message = "Email should be valid"))]
    #[schema(example = "jane@x.com")]
    #[serde(default)]
    pub email: String,

    #[validate(custom(function = "validate_past_date"))]
    #[schema(example = "1990-05-17", format = Date, value_type = Option<String>)]
    pub date_of_birth: Option<NaiveDate>,

    pub gender: Option<Gender>,

    #[validate(regex(path = *PHONE_NUMBER, message = "Phone number must be exactly 10 digits"))]
    #[schema(example = "1234567890")]
    #[serde(default)]
    pub phone_number: String,

    /// Defaults to `true` when omitted.
    pub active: Option<bool>,

    #[validate(
        custom(function = "validate_password_not_blank"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    #[schema(example = "secret1", format = Password)]
    #[serde(default)]
    pub password: String,
}

/// Full replacement of the mutable fields. `email` cannot be changed and is
/// ignored if sent.
#[derive(Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[validate(
        custom(function = "validate_full_name_not_blank"),
        length(min = 4, max = 160, message = "Full name must be between 4 and 160 characters")
    )]
    #[schema(example = "Jane D.")]
    #[serde(default)]
    pub full_name: String,

    #[validate(custom(function = "validate_past_date"))]
    #[schema(example = "1990-05-17", format = Date, value_type = Option<String>)]
    pub date_of_birth: Option<NaiveDate>,

    pub gender: Option<Gender>,

    #[validate(regex(path = *PHONE_NUMBER, message = "Phone number must be exactly 10 digits"))]
    #[schema(example = "1234567890")]
    #[serde(default)]
    pub phone_number: String,

    /// Left unchanged when omitted.
    pub active: Option<bool>,

    /// Omitted or empty keeps the current password.
    #[validate(custom(function = "validate_optional_password"))]
    #[schema(format = Password)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "fullName": "Jane Doe",
        "email": "jane@x.com",
        "dateOfBirth": "1990-05-17",
        "gender": "FEMALE",
        "phoneNumber": "1234567890",
        "active": true,
        "createdAt": "2026-01-01T09:00:00Z",
        "updatedAt": "2026-01-01T09:00:00Z"
    })
)]
pub struct EmployeeResponse {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    #[schema(format = Date, value_type = Option<String>)]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub phone_number: String,
    pub active: bool,
    #[schema(format = DateTime, value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(format = DateTime, value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name,
            email: employee.email,
            date_of_birth: employee.date_of_birth,
            gender: employee.gender,
            phone_number: employee.phone_number,
            active: employee.active,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}
