//! In-memory entity store for posts.
//!
//! [`PostTable`] keeps every row in a `BTreeMap` keyed by id together with
//! a title index, both behind a single [`tokio::sync::RwLock`]. The title
//! index is checked and updated under the same write lock as the row, so it
//! is the authoritative uniqueness guarantee for this backend.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tokio::sync::RwLock;

use super::page::{ListOrder, Page, PageRequest};
use super::{Post, PostFields, PostId};
use crate::error::BoardError;

/// Central store for all live posts.
///
/// # Concurrency
///
/// - Reads run concurrently.
/// - Writes are serialized, which makes check-and-insert on the title
///   index atomic.
#[derive(Debug)]
pub struct PostTable {
    state: RwLock<TableState>,
}

#[derive(Debug)]
struct TableState {
    rows: BTreeMap<PostId, Post>,
    titles: HashMap<String, PostId>,
    next_id: i64,
}

impl PostTable {
    /// Creates an empty table. The first assigned id is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: BTreeMap::new(),
                titles: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Inserts a new row, assigning its id and both timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UniqueViolation`] if another row already holds
    /// the title.
    pub async fn insert(&self, fields: PostFields) -> Result<Post, BoardError> {
        let mut state = self.state.write().await;
        if state.titles.contains_key(&fields.title) {
            return Err(BoardError::UniqueViolation { attribute: "title" });
        }

        let id = PostId::new(state.next_id);
        state.next_id += 1;

        let post = Post::new(id, fields, Utc::now());
        state.titles.insert(post.title.clone(), id);
        state.rows.insert(id, post.clone());
        Ok(post)
    }

    /// Returns a copy of the row with the given id.
    pub async fn find(&self, id: PostId) -> Option<Post> {
        self.state.read().await.rows.get(&id).cloned()
    }

    /// Overwrites title and info of the row with the given id.
    ///
    /// Returns the number of rows changed: `0` when no row has that id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UniqueViolation`] if a different row already
    /// holds the new title.
    pub async fn update(&self, id: PostId, fields: PostFields) -> Result<u64, BoardError> {
        let mut state = self.state.write().await;
        let TableState { rows, titles, .. } = &mut *state;
        let Some(row) = rows.get_mut(&id) else {
            return Ok(0);
        };
        if let Some(owner) = titles.get(&fields.title)
            && *owner != id
        {
            return Err(BoardError::UniqueViolation { attribute: "title" });
        }

        titles.remove(&row.title);
        titles.insert(fields.title.clone(), id);
        row.apply(fields, Utc::now());
        Ok(1)
    }

    /// Removes the row with the given id. Returns the number of rows removed.
    pub async fn remove(&self, id: PostId) -> u64 {
        let mut state = self.state.write().await;
        match state.rows.remove(&id) {
            Some(post) => {
                state.titles.remove(&post.title);
                1
            }
            None => 0,
        }
    }

    /// Counts rows whose title equals `title`, skipping `except`.
    pub async fn count_title(&self, title: &str, except: Option<PostId>) -> u64 {
        let state = self.state.read().await;
        match state.titles.get(title) {
            Some(owner) if Some(*owner) != except => 1,
            _ => 0,
        }
    }

    /// Returns one page of rows in the requested order.
    pub async fn page(&self, request: PageRequest) -> Page<Post> {
        let state = self.state.read().await;
        let mut rows: Vec<&Post> = state.rows.values().collect();
        match request.order() {
            ListOrder::CreatedAsc => rows.sort_by_key(|p| (p.created_at, p.id)),
            ListOrder::CreatedDesc => {
                rows.sort_by_key(|p| std::cmp::Reverse((p.created_at, p.id)));
            }
            ListOrder::TitleAsc => rows.sort_by(|a, b| a.title.cmp(&b.title)),
        }

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = rows
            .into_iter()
            .skip(offset)
            .take(request.per_page() as usize)
            .cloned()
            .collect();

        Page {
            items,
            total: state.rows.len() as u64,
        }
    }

    /// Returns the number of live rows.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// Returns `true` if the table holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

impl Default for PostTable {
    fn default() -> Self {
        Self::new()
    }
}
