use serde::{Deserialize, Serialize};

/// Employee record as held by the directory and returned at the API boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub class_name: String,
    pub subjects: Vec<String>,
    pub attendance: i64,
    pub flagged: bool,
    /// ISO-8601, set once when the record is appended
    pub created_at: String,
}

/// Field set accepted by both create and update.
///
/// Every field is optional so the same shape serves as a partial patch;
/// `id` and `createdAt` are not part of it and can never be overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub class_name: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub attendance: Option<i64>,
    pub flagged: Option<bool>,
}

impl EmployeeInput {
    /// Shallow merge: present fields replace, absent fields are kept
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(age) = self.age {
            employee.age = age;
        }
        if let Some(class_name) = self.class_name {
            employee.class_name = class_name;
        }
        if let Some(subjects) = self.subjects {
            employee.subjects = subjects;
        }
        if let Some(attendance) = self.attendance {
            employee.attendance = attendance;
        }
        if let Some(flagged) = self.flagged {
            employee.flagged = flagged;
        }
    }
}
