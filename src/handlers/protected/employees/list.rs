use axum::extract::{Query, State};
use serde::Deserialize;

use crate::app::AppState;
use crate::directory::Employee;
use crate::middleware::{ApiResponse, ApiResult};
use crate::query::{EmployeeFilter, FilterData, Page, SortDirection, SortField, SortSpec};

/// Flat query-string form of a listing request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub min_attendance: Option<i64>,
    pub sort_field: Option<SortField>,
    pub sort_order: Option<SortDirection>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl From<ListQuery> for FilterData {
    fn from(query: ListQuery) -> Self {
        let filter = EmployeeFilter {
            name: query.name,
            class_name: query.class_name,
            min_attendance: query.min_attendance,
        };
        // sortOrder on its own has nothing to order by
        let sort = query.sort_field.map(|field| SortSpec {
            field,
            order: query.sort_order.unwrap_or_default(),
        });

        FilterData {
            filter: if filter.is_empty() { None } else { Some(filter) },
            sort,
            page: query.page,
            page_size: query.page_size,
        }
    }
}

/// GET /api/employees - filtered, sorted, paginated listing
pub async fn employees_get(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Page<Employee>> {
    let page = state.service.list_employees(query.into()).await?;
    Ok(ApiResponse::success(page))
}
