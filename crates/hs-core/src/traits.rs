//! Core traits shared by the domain models

/// Identifier type for employee ids and project numbers
pub type Id = u32;

/// Trait for entities that carry an immutable identifier
pub trait Identifiable {
    fn id(&self) -> Id;
}

/// Base trait for all registry-owned entities
pub trait Entity: Identifiable {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;

    /// Name of the identifying field, used in not-found errors
    const ID_FIELD: &'static str = "id";
}
