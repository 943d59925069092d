//! Post service: validates requests and drives the repository.

use crate::domain::{ListOrder, PageRequest, Post, PostFields, PostId};
use crate::error::BoardError;
use crate::repository::PostRepository;
use crate::validation::rules::{max_chars, required, string};
use crate::validation::{
    FieldErrors, FieldInput, PostLimits, PostTitle, UniqueColumn, UniqueValue,
};

/// Success message attached to a create response.
pub const CREATED_MESSAGE: &str = "Post created successfully.";
/// Success message attached to an update response.
pub const UPDATED_MESSAGE: &str = "Post updated successfully.";
/// Success message attached to a delete response.
pub const DELETED_MESSAGE: &str = "Post deleted successfully.";
/// Message shown for a listing page with no rows.
pub const NO_DATA_MESSAGE: &str = "No data available.";

/// Unvalidated title and body as received from a client.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostDraft<'a> {
    /// Proposed title.
    pub title: FieldInput<'a>,
    /// Proposed body.
    pub info: FieldInput<'a>,
}

impl<'a> PostDraft<'a> {
    /// Draft with both fields present.
    #[must_use]
    pub const fn new(title: &'a str, info: &'a str) -> Self {
        Self {
            title: FieldInput::Text(title),
            info: FieldInput::Text(info),
        }
    }
}

/// One listing page ready for display.
#[derive(Debug, Clone)]
pub struct PostListing {
    /// Posts on this page.
    pub posts: Vec<Post>,
    /// 1-based page number actually served.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Total number of posts.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Display number of the first post on the page.
    pub start_number: u64,
    /// Order the page was sorted by.
    pub order: ListOrder,
}

impl PostListing {
    /// Consumes the listing, pairing each post with its running display
    /// number.
    pub fn into_numbered(self) -> impl Iterator<Item = (u64, Post)> {
        (self.start_number..).zip(self.posts)
    }

    /// Returns `true` when the page has no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Orchestration layer for all post operations.
///
/// Every write follows the pattern: validate fields → check title
/// uniqueness (read-only) → write through the repository. Nothing is
/// written when validation fails.
#[derive(Debug)]
pub struct PostService<R> {
    repo: R,
    limits: PostLimits,
    default_order: ListOrder,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a new `PostService`.
    #[must_use]
    pub fn new(repo: R, limits: PostLimits, default_order: ListOrder) -> Self {
        Self {
            repo,
            limits,
            default_order,
        }
    }

    /// Returns a reference to the inner repository.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns the configured field limits.
    #[must_use]
    pub const fn limits(&self) -> PostLimits {
        self.limits
    }

    /// Fetches one page of posts. `order` overrides the configured default.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn list_posts(
        &self,
        page: u32,
        order: Option<ListOrder>,
    ) -> Result<PostListing, BoardError> {
        let request = PageRequest::new(page, order.unwrap_or(self.default_order));
        let page = self.repo.list_page(request).await?;
        let total_pages = page.total_pages();

        Ok(PostListing {
            posts: page.items,
            page: request.page(),
            per_page: request.per_page(),
            total: page.total,
            total_pages,
            start_number: request.start_number(),
            order: request.order(),
        })
    }

    /// Fetches a single post.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PostNotFound`] if the id is unknown.
    pub async fn get_post(&self, id: PostId) -> Result<Post, BoardError> {
        self.repo.get_by_id(id).await
    }

    /// Validates and creates a post.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ValidationFailed`] with per-field messages if
    /// the draft is invalid or the title is taken; nothing is stored then.
    pub async fn create_post(&self, draft: PostDraft<'_>) -> Result<Post, BoardError> {
        let fields = self.validate(draft, UniqueValue::new()).await?;
        let post = self
            .repo
            .create(fields)
            .await
            .map_err(BoardError::into_validation)?;

        tracing::info!(post_id = %post.id, title = %post.title, "post created");
        Ok(post)
    }

    /// Validates and applies new title and body to an existing post.
    ///
    /// The uniqueness rule excludes the post itself, so saving it with its
    /// current title succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PostNotFound`] if the id is unknown, or
    /// [`BoardError::ValidationFailed`] if the draft is invalid.
    pub async fn update_post(&self, id: PostId, draft: PostDraft<'_>) -> Result<Post, BoardError> {
        self.repo.get_by_id(id).await?;

        let fields = self.validate(draft, UniqueValue::except(id)).await?;
        let changed = self
            .repo
            .update(id, fields)
            .await
            .map_err(BoardError::into_validation)?;
        if changed == 0 {
            return Err(BoardError::PostNotFound(id));
        }

        tracing::info!(post_id = %id, "post updated");
        self.repo.get_by_id(id).await
    }

    /// Deletes a post.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PostNotFound`] if the id is unknown.
    pub async fn delete_post(&self, id: PostId) -> Result<(), BoardError> {
        self.repo.get_by_id(id).await?;

        if self.repo.delete(id).await? == 0 {
            return Err(BoardError::PostNotFound(id));
        }

        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }

    /// Creates `count` demo posts titled `"Sample N"`, skipping titles that
    /// are already taken. Returns the number of posts created.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ValidationFailed`] if the generated posts do
    /// not fit the configured limits, or propagates storage failures.
    pub async fn seed(&self, count: u32) -> Result<u32, BoardError> {
        let fresh = UniqueValue::<PostTitle>::new();
        let mut created = 0;
        let mut n: u64 = 0;

        while created < count {
            n += 1;
            let title = format!("Sample {n}");
            if !fresh.passes(&self.repo, &title).await? {
                continue;
            }
            let info = format!("Seeded body for sample post {n}.");
            self.create_post(PostDraft::new(&title, &info)).await?;
            created += 1;
        }

        tracing::info!(created, "seeded posts");
        Ok(created)
    }

    /// Runs the field rules and the uniqueness rule, returning the
    /// writable fields on success.
    async fn validate(
        &self,
        draft: PostDraft<'_>,
        unique: UniqueValue<PostTitle>,
    ) -> Result<PostFields, BoardError> {
        let mut errors = FieldErrors::new();

        let title = string(PostTitle::ATTRIBUTE, draft.title, &mut errors)
            .and_then(|title| required(PostTitle::ATTRIBUTE, title, &mut errors));
        if let Some(title) = title {
            max_chars(
                PostTitle::ATTRIBUTE,
                title,
                self.limits.title_max_chars,
                &mut errors,
            );
            if !unique.passes(&self.repo, title).await? {
                errors.add(PostTitle::ATTRIBUTE, UniqueValue::<PostTitle>::message());
            }
        }

        let info = string("info", draft.info, &mut errors)
            .and_then(|info| required("info", info, &mut errors));
        if let Some(info) = info {
            max_chars("info", info, self.limits.info_max_chars, &mut errors);
        }

        match (title, info) {
            (Some(title), Some(info)) if errors.is_empty() => Ok(PostFields::new(title, info)),
            _ => {
                tracing::debug!(errors = %errors, "post validation failed");
                Err(BoardError::ValidationFailed(errors))
            }
        }
    }
}
