use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use super::{EmployeeRepository, RepositoryError};
use crate::model::employee::{Employee, EmployeeRow, NewEmployee};

const SELECT_EMPLOYEE: &str = r#"
    SELECT id, full_name, email, date_of_birth, gender, phone_number,
           active, hashed_password, created_at, updated_at
    FROM employees
"#;

pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn to_employee(row: EmployeeRow) -> Result<Employee, RepositoryError> {
    let id = row.id;
    Employee::try_from(row).map_err(|e| RepositoryError::Corrupt(format!("id {id}: {e}")))
}

/// Unique-key violations (error 1062, SQLSTATE 23000) become `UniqueViolation`.
fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return RepositoryError::UniqueViolation(db_err.message().to_string());
        }
    }
    RepositoryError::Database(e)
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn insert(&self, employee: &NewEmployee) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees
            (full_name, email, date_of_birth, gender, phone_number, active,
             hashed_password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(employee.date_of_birth)
        .bind(employee.gender.map(|g| g.as_ref().to_string()))
        .bind(&employee.phone_number)
        .bind(employee.active)
        .bind(&employee.hashed_password)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        let id = result.last_insert_id();
        debug!(employee_id = id, "Inserted employee row");
        Ok(id)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, RepositoryError> {
        let sql = format!("{SELECT_EMPLOYEE} WHERE id = ?");
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(to_employee).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        let sql = format!("{SELECT_EMPLOYEE} WHERE email = ?");
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(to_employee).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        // EXISTS comes back as BIGINT on MySQL.
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE email = ? LIMIT 1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let sql = format!("{SELECT_EMPLOYEE} ORDER BY id");
        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(to_employee).collect()
    }

    async fn save(&self, employee: &Employee) -> Result<(), RepositoryError> {
        let gender = employee.gender.map(|g| g.as_ref().to_string());

        let updated = sqlx::query(
            r#"
            UPDATE employees
            SET full_name = ?, email = ?, date_of_birth = ?, gender = ?, phone_number = ?,
                active = ?, hashed_password = ?, created_at = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(employee.date_of_birth)
        .bind(&gender)
        .bind(&employee.phone_number)
        .bind(employee.active)
        .bind(&employee.hashed_password)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .bind(employee.id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        // MySQL reports 0 affected rows when nothing changed, so check
        // existence before falling back to an insert.
        if updated.rows_affected() > 0 || self.find_by_id(employee.id).await?.is_some() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO employees
            (id, full_name, email, date_of_birth, gender, phone_number, active,
             hashed_password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(employee.id)
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(employee.date_of_birth)
        .bind(&gender)
        .bind(&employee.phone_number)
        .bind(employee.active)
        .bind(&employee.hashed_password)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(employee_id = id, rows = result.rows_affected(), "Deleted employee row");
        Ok(())
    }
}
