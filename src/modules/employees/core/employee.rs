use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One employee record as the store holds and serves it.
///
/// `id`, `hire_date` and `is_active` are assigned server side at creation;
/// `id` is opaque, unique within the table and never reused, and `hire_date`
/// serializes as RFC 3339 UTC so it stays textually sortable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Fields a caller supplies to create an employee. Identity, hire date and
/// the active flag are the store's to assign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

/// Patch with every field optional. Absent fields keep their stored value;
/// `id` is not part of the patch and can never be altered through it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

impl EmployeePatch {
    /// Field-by-field "if present, overwrite" merge into `employee`.
    pub fn apply(self, employee: &mut Employee) {
        if let Some(v) = self.first_name {
            employee.first_name = v;
        }
        if let Some(v) = self.last_name {
            employee.last_name = v;
        }
        if let Some(v) = self.email {
            employee.email = v;
        }
        if let Some(v) = self.position {
            employee.position = v;
        }
        if let Some(v) = self.department {
            employee.department = v;
        }
        if let Some(v) = self.salary {
            employee.salary = v;
        }
        if let Some(v) = self.hire_date {
            employee.hire_date = v;
        }
        if let Some(v) = self.is_active {
            employee.is_active = v;
        }
    }
}
