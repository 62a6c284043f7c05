use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info, instrument};

use crate::auth::password::PasswordEncoder;
use crate::error::ServiceError;
use crate::model::employee::NewEmployee;
use crate::models::{CreateEmployee, EmployeeResponse, UpdateEmployee};
use crate::repository::{EmployeeRepository, RepositoryError};

/// Employee lifecycle rules. Stateless apart from its two collaborators, so a
/// single instance is shared by every worker.
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
    encoder: Arc<dyn PasswordEncoder>,
}

// Microseconds, to match DATETIME(6).
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self {
            repository,
            encoder,
        }
    }

    #[instrument(name = "employee_create", skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateEmployee) -> Result<EmployeeResponse, ServiceError> {
        if self.repository.exists_by_email(&input.email).await? {
            info!("Rejected: email already in use");
            return Err(ServiceError::DuplicateEntity(input.email));
        }

        let timestamp = now();
        let employee = NewEmployee {
            hashed_password: self.encoder.encode(&input.password)?,
            full_name: input.full_name,
            email: input.email,
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            phone_number: input.phone_number,
            active: input.active.unwrap_or(true),
            created_at: timestamp,
            updated_at: timestamp,
        };

        // The existence check above can race with a concurrent create; the
        // storage constraint is what actually decides.
        let id = match self.repository.insert(&employee).await {
            Ok(id) => id,
            Err(RepositoryError::UniqueViolation(detail)) => {
                info!(%detail, "Rejected by unique constraint");
                return Err(ServiceError::DuplicateEntity(employee.email));
            }
            Err(e) => return Err(e.into()),
        };

        info!(employee_id = id, "Employee created");
        Ok(employee.with_id(id).into())
    }

    #[instrument(name = "employee_find_all", skip(self))]
    pub async fn find_all(&self) -> Result<Vec<EmployeeResponse>, ServiceError> {
        let employees = self.repository.find_all().await?;
        debug!(count = employees.len(), "Fetched employees");

        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    #[instrument(name = "employee_find_by_id", skip(self))]
    pub async fn find_by_id(&self, id: u64) -> Result<EmployeeResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(EmployeeResponse::from)
            .ok_or(ServiceError::NotFound(id))
    }

    /// Replaces every mutable field except `email`. The password is only
    /// rehashed when a non-empty one is supplied.
    ///
    /// `active` is the one field that is not a full replacement: an absent
    /// value keeps the stored flag rather than clearing or resetting it, so a
    /// disabled employee is never reactivated by an edit that leaves it out.
    #[instrument(name = "employee_update", skip(self, input))]
    pub async fn update(
        &self,
        id: u64,
        input: UpdateEmployee,
    ) -> Result<EmployeeResponse, ServiceError> {
        let mut employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        employee.full_name = input.full_name;
        employee.date_of_birth = input.date_of_birth;
        employee.gender = input.gender;
        employee.phone_number = input.phone_number;
        if let Some(active) = input.active {
            employee.active = active;
        }

        if let Some(password) = input.password.as_deref().filter(|p| !p.is_empty()) {
            debug!("Rehashing password");
            employee.hashed_password = self.encoder.encode(password)?;
        }

        employee.updated_at = now().max(employee.updated_at);

        self.repository.save(&employee).await?;
        info!("Employee updated");

        Ok(employee.into())
    }

    #[instrument(name = "employee_delete", skip(self))]
    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;
        info!("Employee deleted");
        Ok(())
    }
}
