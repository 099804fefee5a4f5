//! Result type aliases and lookup helpers

use std::fmt::Display;

use crate::error::HsError;

/// Standard Result type for HomeSolution operations
pub type HsResult<T> = Result<T, HsError>;

/// Turns a failed lookup into a [`HsError::NotFound`]
///
/// ```
/// use hs_core::{HsResult, OptionExt};
///
/// let found: HsResult<u32> = Some(7).or_not_found("Employee", "id", 1000);
/// assert_eq!(found.unwrap(), 7);
///
/// let missing: HsResult<u32> = None.or_not_found("Employee", "id", 1000);
/// assert!(missing.unwrap_err().is_not_found());
/// ```
pub trait OptionExt<T> {
    fn or_not_found(self, entity: &'static str, field: &'static str, value: impl Display) -> HsResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found(self, entity: &'static str, field: &'static str, value: impl Display) -> HsResult<T> {
        self.ok_or_else(|| HsError::not_found(entity, field, value))
    }
}
