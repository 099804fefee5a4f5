//! Project aggregate: the project, its client and the registration DTOs

pub mod client;
pub mod dto;
pub mod model;

pub use client::Client;
pub use dto::{NewProject, NewTask};
pub use model::{CostBreakdown, Project, DELAY_PENALTY, MARGIN_RATE};
