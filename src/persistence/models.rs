//! Database row models.

use chrono::{DateTime, Utc};

use crate::domain::{Post, PostId};

/// A row of the `posts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    /// `BIGSERIAL` primary key.
    pub id: i64,
    /// Unique title.
    pub title: String,
    /// Body text.
    pub info: String,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-side last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: PostId::new(row.id),
            title: row.title,
            info: row.info,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
