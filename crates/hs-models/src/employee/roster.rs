//! Lookup seam between tasks and the employees they reference

use hs_core::traits::{Id, Identifiable};

use super::model::Employee;

/// Access to the canonical employee collection
///
/// Tasks keep only employee ids; whenever a task changes who is responsible
/// for it, the employee's availability is updated through this trait.
pub trait EmployeeRoster {
    fn employee(&self, id: Id) -> Option<&Employee>;
    fn employee_mut(&mut self, id: Id) -> Option<&mut Employee>;
}

#[cfg(test)]
impl EmployeeRoster for Vec<Employee> {
    fn employee(&self, id: Id) -> Option<&Employee> {
        self.iter().find(|e| e.id() == id)
    }

    fn employee_mut(&mut self, id: Id) -> Option<&mut Employee> {
        self.iter_mut().find(|e| e.id() == id)
    }
}
