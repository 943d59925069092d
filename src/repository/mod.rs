//! Repository layer: the CRUD capability set over the entity store.
//!
//! [`PostRepository`] is the only path through which the rest of the
//! service reads or writes posts. Implementations:
//!
//! - [`MemoryPostRepository`] over the in-memory [`crate::domain::PostTable`]
//! - [`crate::persistence::PgPostRepository`] over PostgreSQL
//! - [`PostBackend`], which statically dispatches to one of the above
//!
//! Update and delete report the number of affected rows and treat a
//! missing id as a no-op; turning that into a not-found outcome is the
//! caller's decision.

pub mod backend;
pub mod memory;

use std::future::Future;

use crate::domain::{Page, PageRequest, Post, PostFields, PostId};
use crate::error::BoardError;
use crate::validation::{CountMatching, PostTitle};

pub use backend::PostBackend;
pub use memory::MemoryPostRepository;

/// CRUD operations over stored posts.
///
/// Every repository also answers title-uniqueness counts through
/// [`CountMatching<PostTitle>`], which is what the uniqueness rule reads.
pub trait PostRepository: CountMatching<PostTitle> + Send + Sync {
    /// Returns one page of posts and the total row count.
    ///
    /// A page past the end of the data has no items; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PersistenceError`] on storage failure.
    fn list_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<Page<Post>, BoardError>> + Send;

    /// Returns the post with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PostNotFound`] if no row matches, or
    /// [`BoardError::PersistenceError`] on storage failure.
    fn get_by_id(&self, id: PostId) -> impl Future<Output = Result<Post, BoardError>> + Send;

    /// Inserts a post and returns it with its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UniqueViolation`] if the store already holds
    /// the title, or [`BoardError::PersistenceError`] on storage failure.
    fn create(&self, fields: PostFields) -> impl Future<Output = Result<Post, BoardError>> + Send;

    /// Overwrites title and info and refreshes `updated_at`.
    ///
    /// Returns the number of rows changed, `0` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UniqueViolation`] if another row holds the new
    /// title, or [`BoardError::PersistenceError`] on storage failure.
    fn update(
        &self,
        id: PostId,
        fields: PostFields,
    ) -> impl Future<Output = Result<u64, BoardError>> + Send;

    /// Hard-deletes the post. Returns the number of rows removed, `0` when
    /// the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PersistenceError`] on storage failure.
    fn delete(&self, id: PostId) -> impl Future<Output = Result<u64, BoardError>> + Send;
}
