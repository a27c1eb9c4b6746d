//! Core types and utilities for vb-console
//!
//! # Modules
//!
//! - `config`: Environment and terminal configuration
//! - `error`: Error types and Result alias
//! - `traits`: The `Reflect` capability implemented by inspectable objects
//! - `types`: Colors, member kinds and inspection categories

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use traits::Reflect;
pub use types::*;
