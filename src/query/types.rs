use serde::{Deserialize, Serialize};

/// Conjunctive employee predicates; an absent field places no constraint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFilter {
    /// Case-insensitive substring of the display name
    pub name: Option<String>,
    /// Exact class label
    pub class_name: Option<String>,
    /// Inclusive lower bound on attendance
    pub min_attendance: Option<i64>,
}

impl EmployeeFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.class_name.is_none() && self.min_attendance.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortField {
    Name,
    Age,
    Attendance,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default)]
    pub order: SortDirection,
}

/// 1-based page number plus page size; the size is capped at `query.max_page_size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;

    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }
}

/// One page of results plus the size of the whole filtered set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: i64,
    pub page_size: i64,
}

/// Full listing request as it arrives over the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterData {
    pub filter: Option<EmployeeFilter>,
    pub sort: Option<SortSpec>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
