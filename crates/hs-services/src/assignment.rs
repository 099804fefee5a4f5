//! Employee selection policies
//!
//! Policies only pick an id. The engine performs the assignment afterwards
//! while still holding exclusive access, so selection and mutation happen
//! together.

use hs_core::traits::{Id, Identifiable};
use hs_models::Employee;

/// Chooses an employee for a task
pub trait AssignmentPolicy: Send + Sync {
    /// Short name used in log events
    fn name(&self) -> &'static str;

    /// Pick an available employee, scanning in registration order
    fn select(&self, employees: &[Employee]) -> Option<Id>;
}

/// First available employee
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailable;

impl AssignmentPolicy for FirstAvailable {
    fn name(&self) -> &'static str {
        "first_available"
    }

    fn select(&self, employees: &[Employee]) -> Option<Id> {
        employees
            .iter()
            .find(|e| e.is_available())
            .map(Identifiable::id)
    }
}

/// Available employee with the fewest recorded delays
///
/// Ties go to the earliest registered employee. The scan stops at the first
/// employee without delays.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastDelayed;

impl AssignmentPolicy for LeastDelayed {
    fn name(&self) -> &'static str {
        "least_delayed"
    }

    fn select(&self, employees: &[Employee]) -> Option<Id> {
        let mut best: Option<&Employee> = None;
        for employee in employees.iter().filter(|e| e.is_available()) {
            if best.map_or(true, |b| employee.delay_count() < b.delay_count()) {
                best = Some(employee);
            }
            if employee.delay_count() == 0 {
                break;
            }
        }
        best.map(Identifiable::id)
    }
}
