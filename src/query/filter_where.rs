use crate::directory::Employee;

use super::types::EmployeeFilter;

pub struct FilterWhere;

impl FilterWhere {
    /// True when the employee satisfies every predicate present in the filter
    pub fn matches(filter: &EmployeeFilter, employee: &Employee) -> bool {
        if let Some(ref name) = filter.name {
            if !employee.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref class_name) = filter.class_name {
            if employee.class_name != *class_name {
                return false;
            }
        }
        if let Some(min) = filter.min_attendance {
            if employee.attendance < min {
                return false;
            }
        }
        true
    }

    /// Retain matching records, preserving input order
    pub fn apply(filter: Option<&EmployeeFilter>, records: &[Employee]) -> Vec<Employee> {
        match filter {
            Some(f) if !f.is_empty() => records.iter().filter(|e| Self::matches(f, e)).cloned().collect(),
            _ => records.to_vec(),
        }
    }
}
