use std::cmp::Ordering;

use crate::directory::Employee;

use super::types::{SortDirection, SortField, SortSpec};

pub struct FilterOrder;

impl FilterOrder {
    pub fn compare(field: SortField, a: &Employee, b: &Employee) -> Ordering {
        match field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Attendance => a.attendance.cmp(&b.attendance),
            // Fixed-width ISO-8601 sorts lexically in time order
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }

    /// Stable in-place sort; equal keys keep their incoming order in both directions
    pub fn apply(spec: &SortSpec, records: &mut [Employee]) {
        records.sort_by(|a, b| {
            let ord = Self::compare(spec.field, a, b);
            match spec.order {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
}
