//! Task contracts: adding a task and recording a delay

use hs_core::error::ValidationErrors;
use hs_models::NewTask;
use validator::Validate;

use crate::base::{merge_field_errors, Contract, ValidationResult};

fn validate_days(field: &str, days: f64, errors: &mut ValidationErrors) {
    if !days.is_finite() || days <= 0.0 {
        errors.add(field, "must be greater than 0");
    }
}

/// Contract for appending a task to an existing project
#[derive(Debug, Default, Clone, Copy)]
pub struct AddTaskContract;

impl AddTaskContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<NewTask> for AddTaskContract {
    fn validate(&self, entity: &NewTask) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if entity.title.trim().is_empty() {
            errors.add("title", "can't be blank");
        }
        validate_days("days", entity.days, &mut errors);
        merge_field_errors(&mut errors, entity.validate());

        errors.into_result()
    }
}

/// Contract for the number of days a task is delayed
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordDelayContract;

impl RecordDelayContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<f64> for RecordDelayContract {
    fn validate(&self, days: &f64) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        validate_days("days", *days, &mut errors);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_task() {
        let contract = AddTaskContract::new();
        assert!(contract.validate(&NewTask::new("Roof", None, 0.5)).is_ok());

        let errors = contract.validate(&NewTask::new(" ", None, 0.0)).unwrap_err();
        assert!(errors.has_error("title"));
        assert!(errors.has_error("days"));
    }

    #[test]
    fn test_delay_days() {
        let contract = RecordDelayContract::new();
        assert!(contract.validate(&1.5).is_ok());
        assert!(contract.validate(&0.0).is_err());
        assert!(contract.validate(&-1.0).is_err());
        assert!(contract.validate(&f64::INFINITY).is_err());
    }
}
