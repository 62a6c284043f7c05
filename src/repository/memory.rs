use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{EmployeeRepository, RepositoryError};
use crate::model::employee::{Employee, NewEmployee};

#[derive(Default)]
struct State {
    last_id: u64,
    rows: BTreeMap<u64, Employee>,
}

/// In-memory store with the same email uniqueness constraint as the
/// `employees` table, which compares emails case-insensitively. Ids are
/// never reused.
#[derive(Default)]
pub struct MemoryEmployeeRepository {
    state: RwLock<State>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.read().map(|s| s.rows.len()).unwrap_or(0)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, State>, RepositoryError> {
        self.state
            .read()
            .map_err(|_| RepositoryError::Corrupt("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, State>, RepositoryError> {
        self.state
            .write()
            .map_err(|_| RepositoryError::Corrupt("lock poisoned".to_string()))
    }
}

fn email_taken(state: &State, email: &str, except: Option<u64>) -> bool {
    state
        .rows
        .values()
        .any(|e| e.email.eq_ignore_ascii_case(email) && Some(e.id) != except)
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn insert(&self, employee: &NewEmployee) -> Result<u64, RepositoryError> {
        let mut state = self.write()?;
        if email_taken(&state, &employee.email, None) {
            return Err(RepositoryError::UniqueViolation(format!(
                "duplicate email {}",
                employee.email
            )));
        }

        state.last_id += 1;
        let id = state.last_id;
        state.rows.insert(id, employee.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        let state = self.read()?;
        Ok(state
            .rows
            .values()
            .find(|e| e.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let state = self.read()?;
        Ok(email_taken(&state, email, None))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn save(&self, employee: &Employee) -> Result<(), RepositoryError> {
        let mut state = self.write()?;
        if email_taken(&state, &employee.email, Some(employee.id)) {
            return Err(RepositoryError::UniqueViolation(format!(
                "duplicate email {}",
                employee.email
            )));
        }

        state.last_id = state.last_id.max(employee.id);
        state.rows.insert(employee.id, employee.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), RepositoryError> {
        self.write()?.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_employee(email: &str) -> NewEmployee {
        let now = Utc::now();
        NewEmployee {
            full_name: "Jane Doe".to_string(),
            email: email.to_string(),
            date_of_birth: None,
            gender: None,
            phone_number: "1234567890".to_string(),
            active: true,
            hashed_password: "hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[actix_web::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = MemoryEmployeeRepository::new();
        let first = repo.insert(&new_employee("a@x.com")).await.unwrap();
        repo.delete_by_id(first).await.unwrap();
        let second = repo.insert(&new_employee("b@x.com")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[actix_web::test]
    async fn duplicate_email_insert_is_rejected() {
        let repo = MemoryEmployeeRepository::new();
        repo.insert(&new_employee("a@x.com")).await.unwrap();

        let err = repo.insert(&new_employee("a@x.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::UniqueViolation(_)));
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn email_lookups_ignore_case() {
        let repo = MemoryEmployeeRepository::new();
        repo.insert(&new_employee("jane@x.com")).await.unwrap();

        assert!(repo.exists_by_email("Jane@X.com").await.unwrap());
        assert!(repo.find_by_email("JANE@x.com").await.unwrap().is_some());
        let err = repo.insert(&new_employee("Jane@x.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::UniqueViolation(_)));
    }

    #[actix_web::test]
    async fn save_upserts_by_id() {
        let repo = MemoryEmployeeRepository::new();
        let id = repo.insert(&new_employee("a@x.com")).await.unwrap();

        let mut employee = repo.find_by_id(id).await.unwrap().unwrap();
        employee.full_name = "Jane D.".to_string();
        repo.save(&employee).await.unwrap();
        assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().full_name, "Jane D.");

        let detached = new_employee("c@x.com").with_id(10);
        repo.save(&detached).await.unwrap();
        assert!(repo.find_by_email("c@x.com").await.unwrap().is_some());
        assert_eq!(repo.insert(&new_employee("d@x.com")).await.unwrap(), 11);
    }
}
