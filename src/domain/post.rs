//! The post entity and its writable field set.

use chrono::{DateTime, Utc};

use super::PostId;

/// A stored post.
///
/// `id`, `created_at` and `updated_at` are owned by the entity store;
/// only `title` and `info` are ever written by callers, through
/// [`PostFields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Store-assigned identifier (immutable after creation).
    pub id: PostId,
    /// Title, unique across all live posts.
    pub title: String,
    /// Body text.
    pub info: String,
    /// Creation timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last title/info change.
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Builds a freshly created post with both timestamps set to `now`.
    #[must_use]
    pub fn new(id: PostId, fields: PostFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            info: fields.info,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites title and info and refreshes `updated_at`.
    pub fn apply(&mut self, fields: PostFields, now: DateTime<Utc>) {
        self.title = fields.title;
        self.info = fields.info;
        self.updated_at = now;
    }
}

/// The only fields a caller may write on create or update.
///
/// Timestamps and ids have no representation here, so client-supplied
/// values for them cannot reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    /// New title.
    pub title: String,
    /// New body text.
    pub info: String,
}

impl PostFields {
    /// Creates a field set from anything string-like.
    #[must_use]
    pub fn new(title: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            info: info.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn new_sets_both_timestamps() {
        let now = Utc::now();
        let post = Post::new(PostId::new(1), PostFields::new("Sample", "Body"), now);
        assert_eq!(post.created_at, now);
        assert_eq!(post.updated_at, now);
        assert_eq!(post.title, "Sample");
        assert_eq!(post.info, "Body");
    }

    #[test]
    fn apply_keeps_id_and_created_at() {
        let created = Utc::now();
        let mut post = Post::new(PostId::new(3), PostFields::new("Old", "Old body"), created);

        let later = created + Duration::seconds(5);
        post.apply(PostFields::new("New", "New body"), later);

        assert_eq!(post.id, PostId::new(3));
        assert_eq!(post.created_at, created);
        assert_eq!(post.updated_at, later);
        assert_eq!(post.title, "New");
        assert_eq!(post.info, "New body");
    }
}
