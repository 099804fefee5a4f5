//! # hs-core
//!
//! Core types, traits, and utilities for HomeSolution RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - The error taxonomy (invalid argument, not found, state conflict)
//! - Result type aliases and lookup helpers
//! - Core traits (Identifiable, Entity)
//! - Shared domain types (project status, day arithmetic)
//! - Configuration types

pub mod error;
pub mod result;
pub mod traits;
pub mod types;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use types::*;
