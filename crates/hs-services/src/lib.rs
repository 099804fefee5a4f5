//! # hs-services
//!
//! The HomeSolution engine: employee and project registries, assignment
//! policies, and the facade exposing every operation.
//!
//! ```
//! use hs_models::NewProject;
//! use hs_services::Engine;
//!
//! let mut engine = Engine::default();
//! let ana = engine.register_employee("Ana", 20.0).unwrap();
//! let project = engine
//!     .register_project(
//!         NewProject::builder("Evergreen 742", "2024-01-01")
//!             .with_client("Marge", "marge@example.com", "555-0101")
//!             .with_task("Paint", "Living room", 2.0),
//!     )
//!     .unwrap();
//!
//! assert_eq!(engine.assign_first_available(project, "Paint").unwrap(), ana);
//! engine.finish_task(project, "Paint").unwrap();
//! let cost = engine.finalize_project(project, "2024-01-03").unwrap();
//! assert!((cost - 432.0).abs() < 1e-9);
//! ```

pub mod assignment;
pub mod engine;
pub mod queries;
pub mod registry;
pub mod shared;

pub use assignment::{AssignmentPolicy, FirstAvailable, LeastDelayed};
pub use engine::Engine;
pub use queries::ProjectSummary;
pub use registry::{
    EmployeeRegistry, ProjectRegistry, SequenceGenerator, FIRST_EMPLOYEE_ID, FIRST_PROJECT_NUMBER,
};
pub use shared::SharedEngine;
