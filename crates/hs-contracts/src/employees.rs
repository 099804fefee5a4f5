//! Employee registration contracts

use hs_core::error::ValidationErrors;
use hs_models::{NewContractedEmployee, NewStaffEmployee};
use validator::Validate;

use crate::base::{merge_field_errors, Contract, ValidationResult};

/// Contract for registering contracted and staff employees
#[derive(Debug, Default, Clone, Copy)]
pub struct RegisterEmployeeContract;

impl RegisterEmployeeContract {
    pub fn new() -> Self {
        Self
    }

    fn validate_name(&self, name: &str, errors: &mut ValidationErrors) {
        if name.trim().is_empty() {
            errors.add("name", "can't be blank");
        }
    }

    fn validate_rate(&self, field: &str, rate: f64, errors: &mut ValidationErrors) {
        if !rate.is_finite() {
            errors.add(field, "must be a finite number");
        } else if rate < 0.0 {
            errors.add(field, "must be greater than or equal to 0");
        }
    }
}

impl Contract<NewContractedEmployee> for RegisterEmployeeContract {
    fn validate(&self, entity: &NewContractedEmployee) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_name(&entity.name, &mut errors);
        self.validate_rate("hourly_rate", entity.hourly_rate, &mut errors);
        merge_field_errors(&mut errors, entity.validate());

        errors.into_result()
    }
}

impl Contract<NewStaffEmployee> for RegisterEmployeeContract {
    fn validate(&self, entity: &NewStaffEmployee) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_name(&entity.name, &mut errors);
        self.validate_rate("daily_rate", entity.daily_rate, &mut errors);
        if entity.category.trim().is_empty() {
            errors.add("category", "can't be blank");
        }
        merge_field_errors(&mut errors, entity.validate());

        errors.into_result()
    }
}
