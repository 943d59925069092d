//! Fixed-size pagination and listing order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of posts per listing page.
pub const PAGE_SIZE: u32 = 10;

/// Sort order applied when listing posts.
///
/// Ties on `created_at` are broken by id so the order is total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListOrder {
    /// Oldest first.
    #[default]
    CreatedAsc,
    /// Newest first.
    CreatedDesc,
    /// Alphabetical by title.
    TitleAsc,
}

impl ListOrder {
    /// Returns the wire name used in configuration and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAsc => "created_asc",
            Self::CreatedDesc => "created_desc",
            Self::TitleAsc => "title_asc",
        }
    }
}

impl fmt::Display for ListOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`ListOrder`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown list order: {0} (expected created_asc, created_desc or title_asc)")]
pub struct UnknownListOrder(pub String);

impl FromStr for ListOrder {
    type Err = UnknownListOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "created_asc" => Ok(Self::CreatedAsc),
            "created_desc" => Ok(Self::CreatedDesc),
            "title_asc" => Ok(Self::TitleAsc),
            _ => Err(UnknownListOrder(s.to_string())),
        }
    }
}

/// A request for one listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    order: ListOrder,
}

impl PageRequest {
    /// Creates a request for the 1-based `page`. Page 0 is treated as page 1.
    #[must_use]
    pub fn new(page: u32, order: ListOrder) -> Self {
        Self {
            page: page.max(1),
            order,
        }
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The requested sort order.
    #[must_use]
    pub const fn order(&self) -> ListOrder {
        self.order
    }

    /// Always [`PAGE_SIZE`].
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        PAGE_SIZE
    }

    /// Number of rows to skip before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(PAGE_SIZE)
    }

    /// Display sequence number of the first row on this page.
    #[must_use]
    pub fn start_number(&self) -> u64 {
        self.offset() + 1
    }
}

/// One page of results plus the size of the full listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Rows on this page, at most [`PAGE_SIZE`].
    pub items: Vec<T>,
    /// Total number of rows across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Number of pages needed to show `total` rows.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(PAGE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_zero_is_clamped_to_first_page() {
        let req = PageRequest::new(0, ListOrder::default());
        assert_eq!(req.page(), 1);
        assert_eq!(req.offset(), 0);
        assert_eq!(req.start_number(), 1);
    }

    #[test]
    fn start_number_follows_page() {
        let req = PageRequest::new(3, ListOrder::CreatedAsc);
        assert_eq!(req.offset(), 20);
        assert_eq!(req.start_number(), 21);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<()> = Page {
            items: vec![],
            total: 21,
        };
        assert_eq!(page.total_pages(), 3);

        let empty: Page<()> = Page {
            items: vec![],
            total: 0,
        };
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn list_order_parses_case_insensitively() {
        assert_eq!("CREATED_DESC".parse(), Ok(ListOrder::CreatedDesc));
        assert_eq!(" title_asc ".parse(), Ok(ListOrder::TitleAsc));
        assert!("random".parse::<ListOrder>().is_err());
    }

    #[test]
    fn default_order_is_creation_ascending() {
        assert_eq!(ListOrder::default(), ListOrder::CreatedAsc);
    }
}
