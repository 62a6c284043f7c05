use async_trait::async_trait;
use thiserror::Error;

use crate::model::employee::{Employee, NewEmployee};

#[cfg(test)]
pub mod memory;
pub mod mysql;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("corrupt employee row: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Keyed store of employees with a secondary lookup by email. Every call is
/// a single round trip; no multi-call transactions are assumed.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Returns the storage-assigned id. Fails with `UniqueViolation` when the
    /// email is already taken.
    async fn insert(&self, employee: &NewEmployee) -> Result<u64, RepositoryError>;

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Upsert by id.
    async fn save(&self, employee: &Employee) -> Result<(), RepositoryError>;

    async fn delete_by_id(&self, id: u64) -> Result<(), RepositoryError>;
}
