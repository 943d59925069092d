//! [`PostRepository`] over the in-memory [`PostTable`].

use std::sync::Arc;

use super::PostRepository;
use crate::domain::{Page, PageRequest, Post, PostFields, PostId, PostTable};
use crate::error::BoardError;
use crate::validation::{CountMatching, PostTitle};

/// Repository backed by a shared [`PostTable`].
///
/// Cloning is cheap; clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct MemoryPostRepository {
    table: Arc<PostTable>,
}

impl MemoryPostRepository {
    /// Creates a repository over a fresh, empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying table.
    #[must_use]
    pub fn table(&self) -> &Arc<PostTable> {
        &self.table
    }
}

impl CountMatching<PostTitle> for MemoryPostRepository {
    async fn count_matching(&self, value: &str, except: Option<PostId>) -> Result<u64, BoardError> {
        Ok(self.table.count_title(value, except).await)
    }
}

impl PostRepository for MemoryPostRepository {
    async fn list_page(&self, request: PageRequest) -> Result<Page<Post>, BoardError> {
        Ok(self.table.page(request).await)
    }

    async fn get_by_id(&self, id: PostId) -> Result<Post, BoardError> {
        self.table
            .find(id)
            .await
            .ok_or(BoardError::PostNotFound(id))
    }

    async fn create(&self, fields: PostFields) -> Result<Post, BoardError> {
        self.table.insert(fields).await
    }

    async fn update(&self, id: PostId, fields: PostFields) -> Result<u64, BoardError> {
        self.table.update(id, fields).await
    }

    async fn delete(&self, id: PostId) -> Result<u64, BoardError> {
        Ok(self.table.remove(id).await)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ListOrder;

    #[tokio::test]
    async fn create_then_get() {
        let repo = MemoryPostRepository::new();
        let Ok(created) = repo.create(PostFields::new("Sample", "Body")).await else {
            panic!("create failed");
        };

        let Ok(fetched) = repo.get_by_id(created.id).await else {
            panic!("get failed");
        };
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Sample");
        assert_eq!(fetched.info, "Body");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let repo = MemoryPostRepository::new();
        let result = repo.get_by_id(PostId::new(999)).await;
        assert!(matches!(result, Err(BoardError::PostNotFound(id)) if id == PostId::new(999)));
    }

    #[tokio::test]
    async fn update_changes_only_title_info_and_updated_at() {
        let repo = MemoryPostRepository::new();
        let Ok(created) = repo.create(PostFields::new("Before", "Old")).await else {
            panic!("create failed");
        };

        let changed = repo
            .update(created.id, PostFields::new("After", "New"))
            .await;
        assert!(matches!(changed, Ok(1)));

        let Ok(updated) = repo.get_by_id(created.id).await else {
            panic!("get failed");
        };
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.title, "After");
        assert_eq!(updated.info, "New");
    }

    #[tokio::test]
    async fn update_and_delete_missing_are_noops() {
        let repo = MemoryPostRepository::new();
        assert!(matches!(
            repo.update(PostId::new(1), PostFields::new("T", "I")).await,
            Ok(0)
        ));
        assert!(matches!(repo.delete(PostId::new(1)).await, Ok(0)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let repo = MemoryPostRepository::new();
        let Ok(created) = repo.create(PostFields::new("Gone", "Soon")).await else {
            panic!("create failed");
        };
        assert!(matches!(repo.delete(created.id).await, Ok(1)));
        assert!(matches!(
            repo.get_by_id(created.id).await,
            Err(BoardError::PostNotFound(_))
        ));
    }

    #[tokio::test]
    async fn clones_share_the_table() {
        let repo = MemoryPostRepository::new();
        let clone = repo.clone();
        let _ = repo.create(PostFields::new("Shared", "Body")).await;
        assert_eq!(clone.table().len().await, 1);
    }

    #[tokio::test]
    async fn list_page_reports_total() {
        let repo = MemoryPostRepository::new();
        for n in 0..12 {
            let _ = repo.create(PostFields::new(format!("P{n}"), "Body")).await;
        }
        let Ok(page) = repo
            .list_page(PageRequest::new(2, ListOrder::CreatedAsc))
            .await
        else {
            panic!("list failed");
        };
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages(), 2);
    }
}
