//! Core error types for HomeSolution RS
//!
//! Every failing engine operation surfaces one of three kinds: malformed input,
//! a missing entity, or a lifecycle violation.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Core error type for all engine operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationErrors),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("State conflict: {message}")]
    StateConflict { message: String },
}

/// Discriminant of [`HsError`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    StateConflict,
}

impl HsError {
    /// Single field error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::InvalidArgument(errors)
    }

    pub fn not_found(entity: &'static str, field: &'static str, value: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::StateConflict {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HsError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            HsError::NotFound { .. } => ErrorKind::NotFound,
            HsError::StateConflict { .. } => ErrorKind::StateConflict,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            HsError::InvalidArgument(_) => "invalid_argument",
            HsError::NotFound { .. } => "not_found",
            HsError::StateConflict { .. } => "state_conflict",
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_state_conflict(&self) -> bool {
        self.kind() == ErrorKind::StateConflict
    }
}

/// Validation errors collection
///
/// Field messages are kept in a sorted map so rendered messages are stable.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: BTreeMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self.base_errors.extend(other.base_errors);
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }

    /// `Ok(())` when empty, otherwise the collected errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_collect() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add("name", "can't be blank");
        errors.add_base("project is incomplete");
        errors.add("name", "is too long");

        assert!(errors.has_error("name"));
        assert!(!errors.has_error("rate"));
        assert_eq!(errors.get("name").map(Vec::len), Some(2));
        assert_eq!(
            errors.full_messages(),
            vec![
                "project is incomplete".to_string(),
                "name can't be blank".to_string(),
                "name is too long".to_string(),
            ]
        );
    }

    #[test]
    fn test_merge() {
        let mut a = ValidationErrors::new();
        a.add("title", "can't be blank");
        let mut b = ValidationErrors::new();
        b.add("title", "is duplicated");
        b.add("duration", "must be positive");

        a.merge(b);
        assert_eq!(a.get("title").map(Vec::len), Some(2));
        assert!(a.has_error("duration"));
    }

    #[test]
    fn test_error_kinds() {
        let invalid = HsError::invalid("rate", "must be >= 0");
        assert_eq!(invalid.kind(), ErrorKind::InvalidArgument);
        assert_eq!(invalid.error_code(), "invalid_argument");
        assert_eq!(invalid.to_string(), "Invalid argument: rate must be >= 0");

        let missing = HsError::not_found("Project", "number", 5000);
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "Not found: Project with number=5000");

        let conflict = HsError::conflict("task already finished");
        assert!(conflict.is_state_conflict());
        assert_eq!(conflict.error_code(), "state_conflict");
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add_base("broken");
        assert!(errors.into_result().is_err());
    }
}
