//! Service layer: request orchestration.
//!
//! [`PostService`] validates input, applies the title uniqueness rule and
//! delegates every read and write to a [`crate::repository::PostRepository`].

pub mod post_service;

pub use post_service::{PostDraft, PostListing, PostService};
