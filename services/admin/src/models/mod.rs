//! Administration service models

pub mod employee;
pub mod role;

// Re-export for convenience
pub use employee::{Employee, EmployeeRequest, EmployeeResponse, EmployeeShortResponse};
pub use role::{Role, RoleItemResponse};
