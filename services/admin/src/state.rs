//! Application state shared across handlers

use common::repository::InMemoryRepository;

use crate::models::{Employee, Role};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub employee_repository: InMemoryRepository<Employee>,
    pub role_repository: InMemoryRepository<Role>,
}
