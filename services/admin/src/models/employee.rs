//! Employee model and request/response payloads

use common::repository::Entity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::role::{Role, RoleItemResponse};

/// Employee entity
///
/// The role list holds full copies of the assigned roles, resolved against
/// the role repository when the employee is created or updated.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub applied_promocodes_count: i32,
}

impl Employee {
    /// First and last name joined for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Request for employee creation and update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_ids: Vec<Uuid>,
}

/// Short employee view returned by the list endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeShortResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

/// Detailed employee view with resolved role summaries
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<RoleItemResponse>,
    pub applied_promocodes_count: i32,
}
