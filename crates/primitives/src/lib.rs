//! Core identifier types shared by the definition crates.

/// Structured `prefix://namespace:name` identifiers.
pub mod descriptor;

pub use descriptor::{DEFAULT_PREFIX, Descriptor, DescriptorError};
