use axum::{extract::State, Json};

use crate::app::AppState;
use crate::directory::Employee;
use crate::middleware::{ApiResponse, ApiResult};
use crate::query::{FilterData, Page};

/// POST /api/find/employees - listing with a structured JSON body
///
/// ```json
/// {
///   "filter": { "className": "Class A", "minAttendance": 90 },
///   "sort": { "field": "ATTENDANCE", "order": "DESC" },
///   "page": 1,
///   "pageSize": 10
/// }
/// ```
pub async fn find_post(
    State(state): State<AppState>,
    Json(filter_data): Json<FilterData>,
) -> ApiResult<Page<Employee>> {
    let page = state.service.list_employees(filter_data).await?;
    Ok(ApiResponse::success(page))
}
