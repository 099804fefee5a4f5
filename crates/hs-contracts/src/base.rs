//! Base contract system

use hs_core::error::ValidationErrors;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    /// Validate the input, collecting every error
    fn validate(&self, entity: &T) -> ValidationResult;
}

/// Fold field errors reported by a `validator` derive into `errors`
///
/// Fields that already carry an error are skipped so a blank name is not
/// reported twice.
pub fn merge_field_errors(
    errors: &mut ValidationErrors,
    report: Result<(), validator::ValidationErrors>,
) {
    let Err(report) = report else {
        return;
    };

    let mut fields: Vec<_> = report.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    for (field, field_errors) in fields {
        if errors.has_error(field) {
            continue;
        }
        for error in field_errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => describe_code(&error.code).to_string(),
            };
            errors.add(field, message);
        }
    }
}

fn describe_code(code: &str) -> &str {
    match code {
        "length" => "has an invalid length",
        "range" => "is out of range",
        "required" => "can't be blank",
        other => other,
    }
}
