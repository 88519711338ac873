//! Role model and related payloads

use common::repository::Entity;
use serde::Serialize;
use uuid::Uuid;

/// Role entity
#[derive(Debug, Clone)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl Entity for Role {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Role summary embedded in employee responses
#[derive(Debug, Serialize)]
pub struct RoleItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}
