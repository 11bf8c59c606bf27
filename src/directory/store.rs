use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use super::model::{Employee, EmployeeInput};

#[derive(Debug, Error, PartialEq)]
pub enum DirectoryError {
    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Ordered, in-memory employee collection.
///
/// Ids come from a counter that only moves forward, so an id is never
/// handed out twice for the life of the store.
#[derive(Debug)]
pub struct DirectoryStore {
    employees: Vec<Employee>,
    next_id: u64,
}

/// Handle shared between request handlers; one write lock per append/update.
pub type SharedDirectory = Arc<RwLock<DirectoryStore>>;

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-loaded with the demo records
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, age, class_name, subjects, attendance) in [
            ("Alice", 20, "Class A", &["Math", "Physics"][..], 96),
            ("Bob", 21, "Class B", &["History", "English"][..], 89),
            ("Clara", 20, "Class A", &["Biology", "Chemistry", "Math"][..], 92),
        ] {
            let input = EmployeeInput {
                name: Some(name.to_string()),
                age: Some(age),
                class_name: Some(class_name.to_string()),
                subjects: Some(subjects.iter().map(|s| s.to_string()).collect()),
                attendance: Some(attendance),
                flagged: None,
            };
            // Seed input always carries the required fields
            if let Err(e) = store.append(input) {
                tracing::error!("Failed to seed employee {}: {}", name, e);
            }
        }
        info!("Seeded directory with {} employees", store.len());
        store
    }

    pub fn into_shared(self) -> SharedDirectory {
        Arc::new(RwLock::new(self))
    }

    /// Append a new record stamped with the current time
    pub fn append(&mut self, input: EmployeeInput) -> Result<Employee, DirectoryError> {
        self.append_at(input, Utc::now())
    }

    /// Append a new record with an explicit creation time
    pub fn append_at(&mut self, input: EmployeeInput, created_at: DateTime<Utc>) -> Result<Employee, DirectoryError> {
        let name = input.name.ok_or(DirectoryError::MissingField("name"))?;
        let age = input.age.ok_or(DirectoryError::MissingField("age"))?;
        let class_name = input.class_name.ok_or(DirectoryError::MissingField("className"))?;

        let employee = Employee {
            id: self.next_id.to_string(),
            name,
            age,
            class_name,
            subjects: input.subjects.unwrap_or_default(),
            attendance: input.attendance.unwrap_or(0),
            flagged: input.flagged.unwrap_or(false),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.next_id += 1;
        self.employees.push(employee.clone());
        Ok(employee)
    }

    /// Merge supplied fields over an existing record in place
    pub fn update(&mut self, id: &str, input: EmployeeInput) -> Result<Employee, DirectoryError> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;
        input.apply_to(employee);
        Ok(employee.clone())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Full collection in insertion order
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
