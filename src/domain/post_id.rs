//! Type-safe post identifier.
//!
//! [`PostId`] wraps the integer primary key assigned by the entity store so
//! post identifiers cannot be confused with page numbers or row counts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a post.
///
/// Assigned by the store on creation and immutable thereafter. Ids are
/// never reused while the dataset is live.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    /// Wraps a raw store id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<i64> for PostId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<PostId> for i64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_integer() {
        assert_eq!(PostId::new(42).to_string(), "42");
    }

    #[test]
    fn serializes_transparently() {
        let Ok(json) = serde_json::to_string(&PostId::new(7)) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "7");
    }

    #[test]
    fn parses_from_path_segment() {
        assert_eq!("15".parse::<PostId>().ok(), Some(PostId::new(15)));
        assert!("abc".parse::<PostId>().is_err());
    }

    #[test]
    fn orders_by_raw_value() {
        assert!(PostId::new(1) < PostId::new(2));
    }
}
