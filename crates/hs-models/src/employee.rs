//! Employee model and related types
//!
//! Contracted and staff employees share one struct; the variant only decides
//! how a working day is priced.

pub mod model;
pub mod roster;

pub use model::*;
pub use roster::*;
