//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ListOrder;

/// Query parameters for the post listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page number (1-indexed). Defaults to 1; 0 is treated as 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Sort order. Defaults to the server's configured order.
    #[serde(default)]
    pub order: Option<ListOrder>,
}

/// Pagination metadata included in list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page (always 10).
    pub per_page: u32,
    /// Total number of items.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

fn default_page() -> u32 {
    1
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            order: None,
        }
    }
}
