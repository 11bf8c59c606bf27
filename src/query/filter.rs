use crate::config::QueryConfig;
use crate::directory::Employee;

use super::error::QueryError;
use super::filter_order::FilterOrder;
use super::filter_where::FilterWhere;
use super::types::{EmployeeFilter, FilterData, Page, PageRequest, SortSpec};

/// Filter -> sort -> count -> paginate over a snapshot of the directory
pub struct Filter {
    where_data: Option<EmployeeFilter>,
    order_data: Option<SortSpec>,
    page: PageRequest,
    max_page_size: i64,
    debug_logging: bool,
}

impl Filter {
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            where_data: None,
            order_data: None,
            page: PageRequest::new(PageRequest::DEFAULT_PAGE, config.default_page_size),
            max_page_size: config.max_page_size,
            debug_logging: config.debug_logging,
        }
    }

    pub fn assign(&mut self, data: FilterData) -> Result<&mut Self, QueryError> {
        if let Some(filter) = data.filter { self.where_clause(filter); }
        if let Some(sort) = data.sort { self.order(sort); }
        let page = data.page.unwrap_or(self.page.page);
        let page_size = data.page_size.unwrap_or(self.page.page_size);
        self.paginate(page, page_size)?;
        Ok(self)
    }

    pub fn where_clause(&mut self, conditions: EmployeeFilter) -> &mut Self {
        self.where_data = Some(conditions);
        self
    }

    pub fn order(&mut self, spec: SortSpec) -> &mut Self {
        self.order_data = Some(spec);
        self
    }

    /// Non-positive values are rejected; oversized pages are capped
    pub fn paginate(&mut self, page: i64, page_size: i64) -> Result<&mut Self, QueryError> {
        if page < 1 { return Err(QueryError::InvalidPage(page)); }
        if page_size < 1 { return Err(QueryError::InvalidPageSize(page_size)); }

        let applied_size = if page_size > self.max_page_size {
            tracing::warn!("Page size {} exceeds max {}, capping to max", page_size, self.max_page_size);
            self.max_page_size
        } else {
            page_size
        };

        self.page = PageRequest::new(page, applied_size);
        Ok(self)
    }

    /// Run against the full record set. `records` is only read; filtering works on a copy.
    pub fn execute(&self, records: &[Employee]) -> Page<Employee> {
        let mut working = FilterWhere::apply(self.where_data.as_ref(), records);
        if self.debug_logging {
            tracing::debug!("filter kept {} of {} employees", working.len(), records.len());
        }

        if let Some(ref spec) = self.order_data {
            FilterOrder::apply(spec, &mut working);
            if self.debug_logging {
                tracing::debug!("sorted by {:?} {:?}", spec.field, spec.order);
            }
        }

        let total_count = working.len();

        let PageRequest { page, page_size } = self.page;
        let start = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);
        let items: Vec<Employee> = working.into_iter().skip(start).take(take).collect();

        Page { items, total_count, page, page_size }
    }
}
