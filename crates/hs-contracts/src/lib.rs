//! # hs-contracts
//!
//! Contract validation for HomeSolution RS.
//!
//! Contracts check input before the engine touches any state and report
//! every problem at once as `ValidationErrors`.

pub mod base;
pub mod dates;
pub mod employees;
pub mod projects;
pub mod tasks;

pub use base::*;
pub use dates::parse_iso_date;
pub use employees::RegisterEmployeeContract;
pub use projects::CreateProjectContract;
pub use tasks::{AddTaskContract, RecordDelayContract};
