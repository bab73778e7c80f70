use crate::model::employee::{Employee, EmployeeFile};
use crate::seed;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

/// Static employee list plus the documents attached to each profile.
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    files: RwLock<HashMap<String, Vec<EmployeeFile>>>,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>, files: HashMap<String, Vec<EmployeeFile>>) -> Self {
        Self {
            employees,
            files: RwLock::new(files),
        }
    }

    pub fn seeded() -> Self {
        let directory = Self::new(seed::employees(), seed::employee_files());
        info!(employees = directory.employees.len(), "Employee directory seeded");
        directory
    }

    /// Employees matching `search` (all when `None`), in directory order.
    pub fn list(&self, search: Option<&str>) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| search.is_none_or(|q| e.matches(q)))
            .cloned()
            .collect()
    }

    /// Looks an employee up by `EMP...` code.
    pub fn get(&self, employee_id: &str) -> Option<Employee> {
        self.employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .cloned()
    }

    /// Attachments of an employee; `None` when the employee is unknown.
    pub fn files(&self, employee_id: &str) -> Option<Vec<EmployeeFile>> {
        let employee = self.employees.iter().find(|e| e.employee_id == employee_id)?;
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        Some(files.get(&employee.id).cloned().unwrap_or_default())
    }

    /// Detaches `file_id` from the employee. Returns whether a file was removed.
    pub fn remove_file(&self, employee_id: &str, file_id: &str) -> bool {
        let Some(employee) = self.employees.iter().find(|e| e.employee_id == employee_id) else {
            return false;
        };

        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        let Some(attached) = files.get_mut(&employee.id) else {
            return false;
        };

        let before = attached.len();
        attached.retain(|f| f.id != file_id);
        let removed = attached.len() != before;

        debug!(employee_id, file_id, removed, "Employee file removal");
        removed
    }
}
