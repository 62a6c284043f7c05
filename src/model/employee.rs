use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Persisted employee record. Carries the password hash, so it never leaves
/// the service layer; handlers only ever see `EmployeeResponse`.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub phone_number: String,
    pub active: bool,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An employee that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub phone_number: String,
    pub active: bool,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewEmployee {
    pub fn with_id(self, id: u64) -> Employee {
        Employee {
            id,
            full_name: self.full_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            phone_number: self.phone_number,
            active: self.active,
            hashed_password: self.hashed_password,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Row shape of the `employees` table. `gender` is stored as text and
/// parsed on the way out.
#[derive(Debug, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: u64, // BIGINT UNSIGNED
    pub full_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone_number: String,
    pub active: bool,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = strum::ParseError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let gender = row.gender.as_deref().map(str::parse::<Gender>).transpose()?;

        Ok(Employee {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            date_of_birth: row.date_of_birth,
            gender,
            phone_number: row.phone_number,
            active: row.active,
            hashed_password: row.hashed_password,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(gender: Option<&str>) -> EmployeeRow {
        let now = Utc::now();
        EmployeeRow {
            id: 7,
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
            gender: gender.map(str::to_string),
            phone_number: "1234567890".to_string(),
            active: true,
            hashed_password: "$argon2id$v=19$...".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn gender_uses_upper_case_on_the_wire_and_in_storage() {
        assert_eq!(Gender::Female.as_ref(), "FEMALE");
        assert_eq!("OTHER".parse::<Gender>().unwrap(), Gender::Other);
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"MALE\"");
    }

    #[test]
    fn row_with_known_gender_maps_to_employee() {
        let employee = Employee::try_from(row(Some("MALE"))).unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(employee.gender, Some(Gender::Male));
    }

    #[test]
    fn row_without_gender_maps_to_none() {
        let employee = Employee::try_from(row(None)).unwrap();
        assert_eq!(employee.gender, None);
    }

    #[test]
    fn row_with_unknown_gender_is_rejected() {
        assert!(Employee::try_from(row(Some("robot"))).is_err());
    }
}
