//! PostgreSQL implementation of the post repository.

use sqlx::PgPool;

use super::models::PostRow;
use crate::domain::{ListOrder, Page, PageRequest, Post, PostFields, PostId};
use crate::error::BoardError;
use crate::repository::PostRepository;
use crate::validation::{CountMatching, PostTitle};

const POST_COLUMNS: &str = "id, title, info, created_at, updated_at";

/// Isolation for the page read: the page query and the count must see the
/// same rows.
const PAGE_SNAPSHOT: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY";

/// PostgreSQL-backed repository using `sqlx::PgPool`.
///
/// The `posts_title_unique` constraint is the authoritative title guard;
/// its violations surface as [`BoardError::UniqueViolation`].
#[derive(Debug, Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Creates a repository over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `ORDER BY` clause for a listing order.
const fn order_clause(order: ListOrder) -> &'static str {
    match order {
        ListOrder::CreatedAsc => "created_at ASC, id ASC",
        ListOrder::CreatedDesc => "created_at DESC, id DESC",
        ListOrder::TitleAsc => "title ASC",
    }
}

/// Maps a write error, turning unique-constraint violations into
/// [`BoardError::UniqueViolation`].
fn map_write_error(err: sqlx::Error) -> BoardError {
    let unique = err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if unique {
        BoardError::UniqueViolation { attribute: "title" }
    } else {
        BoardError::from(err)
    }
}

fn to_u64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

impl CountMatching<PostTitle> for PgPostRepository {
    async fn count_matching(&self, value: &str, except: Option<PostId>) -> Result<u64, BoardError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE title = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(value)
        .bind(except.map(PostId::get))
        .fetch_one(&self.pool)
        .await?;

        Ok(to_u64(count))
    }
}

impl PostRepository for PgPostRepository {
    async fn list_page(&self, request: PageRequest) -> Result<Page<Post>, BoardError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY {} LIMIT $1 OFFSET $2",
            order_clause(request.order())
        );

        let mut tx = self.pool.begin().await?;
        sqlx::query(PAGE_SNAPSHOT).execute(&mut *tx).await?;

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(request.per_page()))
            .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
            .fetch_all(&mut *tx)
            .await?;
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Page {
            items: rows.into_iter().map(Post::from).collect(),
            total: to_u64(total),
        })
    }

    async fn get_by_id(&self, id: PostId) -> Result<Post, BoardError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, PostRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .map(Post::from)
            .ok_or(BoardError::PostNotFound(id))
    }

    async fn create(&self, fields: PostFields) -> Result<Post, BoardError> {
        let sql = format!(
            "INSERT INTO posts (title, info, created_at, updated_at) \
             VALUES ($1, $2, now(), now()) RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(fields.title)
            .bind(fields.info)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(Post::from(row))
    }

    async fn update(&self, id: PostId, fields: PostFields) -> Result<u64, BoardError> {
        let result =
            sqlx::query("UPDATE posts SET title = $1, info = $2, updated_at = now() WHERE id = $3")
                .bind(fields.title)
                .bind(fields.info)
                .bind(id.get())
                .execute(&self.pool)
                .await
                .map_err(map_write_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: PostId) -> Result<u64, BoardError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_clauses_are_total() {
        assert_eq!(order_clause(ListOrder::CreatedAsc), "created_at ASC, id ASC");
        assert_eq!(order_clause(ListOrder::CreatedDesc), "created_at DESC, id DESC");
        assert_eq!(order_clause(ListOrder::TitleAsc), "title ASC");
    }

    #[test]
    fn page_read_runs_in_a_read_only_snapshot() {
        assert!(PAGE_SNAPSHOT.contains("REPEATABLE READ"));
        assert!(PAGE_SNAPSHOT.contains("READ ONLY"));
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(to_u64(-1), 0);
        assert_eq!(to_u64(3), 3);
    }
}
