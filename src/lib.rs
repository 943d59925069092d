//! # postboard
//!
//! REST service managing a single entity, the post (a unique title and a
//! body), with create, read, update, delete and paginated listing.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PostService (service/)
//!     ├── Validation rules + UniqueValue (validation/)
//!     │
//!     ├── PostRepository (repository/)
//!     │
//!     ├── PostTable (domain/, in-memory)
//!     └── PostgreSQL (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod repository;
pub mod service;
pub mod validation;
