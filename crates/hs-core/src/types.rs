//! Common types used throughout HomeSolution RS

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format accepted and produced by the engine
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Project lifecycle status
///
/// Transitions only move forward: Pending -> Active -> Finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Pending,
    Active,
    Finalized,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Finalized => "finalized",
        }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self, Self::Finalized)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Add a whole number of days to a date, saturating at the calendar bounds
pub fn plus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// Round a fractional day count up to whole days (a half day counts as one)
pub fn ceil_days(days: f64) -> u64 {
    if days.is_finite() && days > 0.0 {
        days.ceil() as u64
    } else {
        0
    }
}

/// Round a fractional day count to the nearest whole day, halves rounding up
pub fn round_days(days: f64) -> u64 {
    if days.is_finite() && days > 0.0 {
        days.round() as u64
    } else {
        0
    }
}

/// Render a date in ISO `YYYY-MM-DD` form
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
