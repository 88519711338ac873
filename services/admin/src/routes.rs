//! Administration service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        Employee, EmployeeRequest, EmployeeResponse, EmployeeShortResponse, Role,
        RoleItemResponse,
    },
    state::AppState,
};

/// Create the router for the administration service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/employees", get(get_employees))
        .route("/employees", post(create_employee))
        .route("/employees/:id", get(get_employee))
        .route("/employees/:id", put(update_employee))
        .route("/employees/:id", delete(delete_employee))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "admin-service"
    }))
}

/// Get all employees as short views
pub async fn get_employees(State(state): State<AppState>) -> impl IntoResponse {
    let employees = state.employee_repository.get_all().await;

    let employee_models: Vec<EmployeeShortResponse> = employees
        .iter()
        .map(|employee| EmployeeShortResponse {
            id: employee.id,
            email: employee.email.clone(),
            full_name: employee.full_name(),
        })
        .collect();

    Json(employee_models)
}

/// Get an employee by ID with resolved role summaries
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let employee = state
        .employee_repository
        .get_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Employee with id: {} not found", id)))?;

    let employee_model = EmployeeResponse {
        id: employee.id,
        email: employee.email.clone(),
        full_name: employee.full_name(),
        roles: employee
            .roles
            .iter()
            .map(|role| RoleItemResponse {
                id: role.id,
                name: role.name.clone(),
                description: role.description.clone(),
            })
            .collect(),
        applied_promocodes_count: employee.applied_promocodes_count,
    };

    Ok(Json(employee_model))
}

/// Delete an employee by ID
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state.employee_repository.delete_by_id(id).await;

    if !deleted {
        return Err(ApiError::NotFound(format!(
            "Employee with id: {} not found",
            id
        )));
    }

    info!("Deleted employee {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Create a new employee
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<impl IntoResponse> {
    let roles = resolve_roles(&state, &payload.role_ids).await;

    if roles.is_empty() {
        return Err(ApiError::NotFound(format!(
            "Roles with ids: {} not found",
            join_ids(&payload.role_ids)
        )));
    }

    let employee = Employee {
        id: Uuid::new_v4(),
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        roles,
        applied_promocodes_count: 0,
    };

    let employee_id = state.employee_repository.add(employee).await;

    info!("Created employee {}", employee_id);

    Ok(Json(employee_id))
}

/// Update an employee's names, email, and role list
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut employee = state
        .employee_repository
        .get_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Employee with id: {} not found", id)))?;

    let roles = resolve_roles(&state, &payload.role_ids).await;

    if roles.is_empty() {
        return Err(ApiError::NotFound(format!(
            "Roles with ids: {} not found",
            join_ids(&payload.role_ids)
        )));
    }

    // Identifier and promocode counter are not part of the request shape
    employee.first_name = payload.first_name;
    employee.last_name = payload.last_name;
    employee.email = payload.email;
    employee.roles = roles;

    state.employee_repository.update(employee).await;

    info!("Updated employee {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Resolve requested role ids against the role repository
///
/// Ids without a matching role are dropped; a request is rejected only
/// when none of its ids resolve.
async fn resolve_roles(state: &AppState, role_ids: &[Uuid]) -> Vec<Role> {
    state
        .role_repository
        .get_all()
        .await
        .into_iter()
        .filter(|role| role_ids.contains(&role.id))
        .collect()
}

fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
