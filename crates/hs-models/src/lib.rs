//! # hs-models
//!
//! Domain models for HomeSolution RS.
//!
//! Employees, tasks and projects, plus the input DTOs used to create them.
//! Projects own their tasks; tasks refer to employees by id and reach them
//! through [`EmployeeRoster`].

pub use hs_core::traits::{Entity, Id, Identifiable};

pub mod employee;
pub mod project;
pub mod task;

pub use employee::{
    Employee, EmployeeKind, EmployeeRoster, NewContractedEmployee, NewStaffEmployee,
    HOURS_PER_DAY, STAFF_BONUS_RATE,
};
pub use project::{Client, CostBreakdown, NewProject, NewTask, Project};
pub use task::Task;
