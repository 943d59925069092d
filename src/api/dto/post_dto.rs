//! Post DTOs for create, update, get and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use crate::domain::{ListOrder, Post, PostId};
use crate::service::{PostDraft, PostListing};
use crate::service::post_service::NO_DATA_MESSAGE;
use crate::validation::FieldInput;

/// Request body for `POST /posts` and `PUT /posts/{id}`.
///
/// Only `title` and `info` are read; any other key, including forged
/// `id`, `created_at` or `updated_at` values, is ignored. Both are kept as
/// raw JSON so a value of the wrong type is reported against its field.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PostRequest {
    /// Title (required, unique).
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Option<serde_json::Value>,
    /// Body text (required).
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub info: Option<serde_json::Value>,
}

impl PostRequest {
    /// Borrows the request as an unvalidated draft.
    #[must_use]
    pub fn as_draft(&self) -> PostDraft<'_> {
        PostDraft {
            title: FieldInput::from_json(self.title.as_ref()),
            info: FieldInput::from_json(self.info.as_ref()),
        }
    }
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostResponse {
    /// Post identifier.
    pub id: PostId,
    /// Title.
    pub title: String,
    /// Body text.
    pub info: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            info: post.info,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Listing row: a post plus its running display number.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostListItem {
    /// 1-based position across the whole listing.
    pub number: u64,
    /// The post itself.
    #[serde(flatten)]
    pub post: PostResponse,
}

/// Paginated list response for `GET /posts`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    /// Posts on this page.
    pub data: Vec<PostListItem>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
    /// Display number of the first row on this page.
    pub start_number: u64,
    /// Order applied to the listing.
    pub order: ListOrder,
    /// "No data" indicator, present only when the page is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<PostListing> for PostListResponse {
    fn from(listing: PostListing) -> Self {
        let message = listing.is_empty().then(|| NO_DATA_MESSAGE.to_string());
        let pagination = PaginationMeta {
            page: listing.page,
            per_page: listing.per_page,
            total: listing.total,
            total_pages: listing.total_pages,
        };
        let start_number = listing.start_number;
        let order = listing.order;
        let data = listing
            .into_numbered()
            .map(|(number, post)| PostListItem {
                number,
                post: PostResponse::from(post),
            })
            .collect();

        Self {
            data,
            pagination,
            start_number,
            order,
            message,
        }
    }
}

/// Response body for a successful create or update.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostMutationResponse {
    /// Success message.
    pub message: String,
    /// The stored post.
    pub post: PostResponse,
}

/// Response body for a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostDeletedResponse {
    /// Success message.
    pub message: String,
    /// Identifier of the removed post.
    pub id: PostId,
}
