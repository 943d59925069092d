//! Field validation for post input.
//!
//! [`rules`] holds the per-field checks (string, required, maximum length)
//! and the [`FieldErrors`] collector; [`unique`] holds the storage-backed
//! uniqueness predicate.

pub mod rules;
pub mod unique;

pub use rules::{FieldErrors, FieldInput, PostLimits};
pub use unique::{CountMatching, PostTitle, UniqueColumn, UniqueValue};
