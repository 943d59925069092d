//! Static dispatch over the configured repository backend.

use super::{MemoryPostRepository, PostRepository};
use crate::domain::{Page, PageRequest, Post, PostFields, PostId};
use crate::error::BoardError;
use crate::persistence::PgPostRepository;
use crate::validation::{CountMatching, PostTitle};

/// The repository selected at startup.
///
/// `PERSISTENCE_ENABLED=true` selects [`PostBackend::Postgres`]; otherwise
/// posts live in memory for the lifetime of the process.
#[derive(Debug, Clone)]
pub enum PostBackend {
    /// In-memory table.
    Memory(MemoryPostRepository),
    /// PostgreSQL table.
    Postgres(PgPostRepository),
}

impl PostBackend {
    /// Short backend name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }
}

impl From<MemoryPostRepository> for PostBackend {
    fn from(repo: MemoryPostRepository) -> Self {
        Self::Memory(repo)
    }
}

impl From<PgPostRepository> for PostBackend {
    fn from(repo: PgPostRepository) -> Self {
        Self::Postgres(repo)
    }
}

impl CountMatching<PostTitle> for PostBackend {
    async fn count_matching(&self, value: &str, except: Option<PostId>) -> Result<u64, BoardError> {
        match self {
            Self::Memory(repo) => repo.count_matching(value, except).await,
            Self::Postgres(repo) => repo.count_matching(value, except).await,
        }
    }
}

impl PostRepository for PostBackend {
    async fn list_page(&self, request: PageRequest) -> Result<Page<Post>, BoardError> {
        match self {
            Self::Memory(repo) => repo.list_page(request).await,
            Self::Postgres(repo) => repo.list_page(request).await,
        }
    }

    async fn get_by_id(&self, id: PostId) -> Result<Post, BoardError> {
        match self {
            Self::Memory(repo) => repo.get_by_id(id).await,
            Self::Postgres(repo) => repo.get_by_id(id).await,
        }
    }

    async fn create(&self, fields: PostFields) -> Result<Post, BoardError> {
        match self {
            Self::Memory(repo) => repo.create(fields).await,
            Self::Postgres(repo) => repo.create(fields).await,
        }
    }

    async fn update(&self, id: PostId, fields: PostFields) -> Result<u64, BoardError> {
        match self {
            Self::Memory(repo) => repo.update(id, fields).await,
            Self::Postgres(repo) => repo.update(id, fields).await,
        }
    }

    async fn delete(&self, id: PostId) -> Result<u64, BoardError> {
        match self {
            Self::Memory(repo) => repo.delete(id).await,
            Self::Postgres(repo) => repo.delete(id).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_delegates() {
        let backend = PostBackend::from(MemoryPostRepository::new());
        assert_eq!(backend.name(), "memory");

        let Ok(post) = backend.create(PostFields::new("Routed", "Body")).await else {
            panic!("create failed");
        };
        assert!(matches!(backend.count_matching("Routed", None).await, Ok(1)));
        assert!(matches!(backend.get_by_id(post.id).await, Ok(p) if p.title == "Routed"));
        assert!(matches!(backend.delete(post.id).await, Ok(1)));
    }
}
