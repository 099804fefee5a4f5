//! Task model

pub mod model;

pub use model::*;
