use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::app::AppState;
use crate::auth::AuthContext;
use crate::directory::{Employee, EmployeeInput};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/employees/:id - `data` is null when no such employee exists
pub async fn record_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Option<Employee>> {
    Ok(ApiResponse::success(state.service.get_employee(&id).await))
}

/// POST /api/employees - ADMIN only
pub async fn employee_post(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Json(input): Json<EmployeeInput>,
) -> ApiResult<Employee> {
    let employee = state.service.add_employee(input, &context).await?;
    Ok(ApiResponse::created(employee))
}

/// PUT/PATCH /api/employees/:id - ADMIN only, merges present fields
pub async fn record_put(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Path(id): Path<String>,
    Json(input): Json<EmployeeInput>,
) -> ApiResult<Employee> {
    let employee = state.service.update_employee(&id, input, &context).await?;
    Ok(ApiResponse::success(employee))
}
