//! vb-introspection: object member classification
//!
//! This crate provides:
//! - Partitioning of member names by naming convention
//! - Classification of class-level members by descriptor kind
//! - The `Inspection` payload rendered by the console
//! - `ClassInfo` / `Instance` descriptors for building reflectable objects
//!
//! Results are plain structs that implement `Serialize`, so the console can
//! render them through the same path as any other value.

pub mod classify;
pub mod inspection;
pub mod model;

pub use classify::{case_insensitive_sort, classify_kind, naming_category, source_label};
pub use inspection::Inspection;
pub use model::{ClassInfo, Instance};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{ClassInfo, Inspection, Instance};
    pub use vb_core::{Category, MemberKind, Reflect, ValueKind};
}
