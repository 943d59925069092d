//! Data Transfer Objects for REST request/response serialization.

pub mod common_dto;
pub mod post_dto;

pub use common_dto::*;
pub use post_dto::*;
