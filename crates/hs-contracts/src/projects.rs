//! Project registration contract

use std::collections::HashSet;

use hs_core::error::ValidationErrors;
use hs_models::NewProject;
use validator::Validate;

use crate::base::{merge_field_errors, Contract, ValidationResult};
use crate::dates::{parse_iso_date, INVALID_DATE_MESSAGE};

/// Number of client fields: name, email, phone
pub const CLIENT_FIELDS: usize = 3;

/// Contract for registering a project with its initial tasks
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateProjectContract;

impl CreateProjectContract {
    pub fn new() -> Self {
        Self
    }

    fn validate_task_arrays(&self, entity: &NewProject, errors: &mut ValidationErrors) {
        if entity.titles.is_empty() {
            errors.add("titles", "must contain at least one task");
            return;
        }
        if entity.durations.len() != entity.titles.len() {
            errors.add(
                "durations",
                format!(
                    "has {} entries but there are {} titles",
                    entity.durations.len(),
                    entity.titles.len()
                ),
            );
        }
    }

    fn validate_titles(&self, titles: &[String], errors: &mut ValidationErrors) {
        let mut seen = HashSet::new();
        for (index, title) in titles.iter().enumerate() {
            if title.trim().is_empty() {
                errors.add("titles", format!("task {} can't be blank", index + 1));
            } else if !seen.insert(title.trim().to_lowercase()) {
                errors.add("titles", format!("'{}' is duplicated", title));
            }
        }
    }

    fn validate_durations(&self, entity: &NewProject, errors: &mut ValidationErrors) {
        for (title, days) in entity.titles.iter().zip(&entity.durations) {
            if !days.is_finite() || *days <= 0.0 {
                errors.add(
                    "durations",
                    format!("task '{}' must last more than 0 days", title),
                );
            }
        }
    }

    fn validate_client(&self, client: &[String], errors: &mut ValidationErrors) {
        if client.len() != CLIENT_FIELDS {
            errors.add(
                "client",
                format!("must have exactly {} fields (name, email, phone)", CLIENT_FIELDS),
            );
        } else if client[0].trim().is_empty() {
            errors.add("client", "name can't be blank");
        }
    }
}

impl Contract<NewProject> for CreateProjectContract {
    fn validate(&self, entity: &NewProject) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_task_arrays(entity, &mut errors);
        self.validate_titles(&entity.titles, &mut errors);
        self.validate_durations(entity, &mut errors);
        self.validate_client(&entity.client, &mut errors);

        if parse_iso_date(&entity.start_date).is_none() {
            errors.add("start_date", INVALID_DATE_MESSAGE);
        }

        merge_field_errors(&mut errors, entity.validate());

        errors.into_result()
    }
}
