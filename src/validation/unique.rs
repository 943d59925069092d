//! Storage-backed uniqueness predicate.
//!
//! A [`UniqueValue`] is bound at compile time to one column of one entity
//! through a [`UniqueColumn`] marker type. The row count itself is
//! delegated to any source implementing [`CountMatching`] for that column,
//! normally the post repository.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use crate::domain::PostId;
use crate::error::BoardError;

/// Marker describing a column that must hold unique values.
pub trait UniqueColumn {
    /// Attribute name used in validation messages and field errors.
    const ATTRIBUTE: &'static str;

    /// Identifier type of the owning entity.
    type Id: Copy + fmt::Debug + Send + Sync;
}

/// The `posts.title` column.
#[derive(Debug, Clone, Copy)]
pub struct PostTitle;

impl UniqueColumn for PostTitle {
    const ATTRIBUTE: &'static str = "title";
    type Id = PostId;
}

/// Read-only row counting for a unique column.
pub trait CountMatching<C: UniqueColumn> {
    /// Counts rows whose column equals `value` (exact match), skipping the
    /// row identified by `except` when given.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the underlying store cannot be read.
    fn count_matching(
        &self,
        value: &str,
        except: Option<C::Id>,
    ) -> impl Future<Output = Result<u64, BoardError>> + Send;
}

/// Uniqueness rule for column `C`, optionally excluding one row.
///
/// Use [`UniqueValue::new`] when creating and [`UniqueValue::except`] with
/// the record's own id when updating, so re-saving an unchanged value
/// does not collide with itself.
pub struct UniqueValue<C: UniqueColumn> {
    except_id: Option<C::Id>,
    column: PhantomData<C>,
}

impl<C: UniqueColumn> UniqueValue<C> {
    /// Rule with no excluded row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            except_id: None,
            column: PhantomData,
        }
    }

    /// Rule ignoring the row identified by `id`.
    #[must_use]
    pub fn except(id: C::Id) -> Self {
        Self {
            except_id: Some(id),
            column: PhantomData,
        }
    }

    /// Returns `true` when no other row holds `value`.
    ///
    /// # Errors
    ///
    /// Propagates storage failures from `source`.
    pub async fn passes<S>(&self, source: &S, value: &str) -> Result<bool, BoardError>
    where
        S: CountMatching<C> + Sync,
    {
        let count = source.count_matching(value, self.except_id).await?;
        Ok(count == 0)
    }

    /// Failure message, e.g. `"The title is not unique."`.
    #[must_use]
    pub fn message() -> String {
        format!("The {} is not unique.", C::ATTRIBUTE)
    }
}

impl<C: UniqueColumn> Default for UniqueValue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: UniqueColumn> fmt::Debug for UniqueValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueValue")
            .field("attribute", &C::ATTRIBUTE)
            .field("except_id", &self.except_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed set of `(id, title)` rows.
    struct Rows(Vec<(PostId, &'static str)>);

    impl CountMatching<PostTitle> for Rows {
        async fn count_matching(
            &self,
            value: &str,
            except: Option<PostId>,
        ) -> Result<u64, BoardError> {
            Ok(self
                .0
                .iter()
                .filter(|(id, title)| *title == value && Some(*id) != except)
                .count() as u64)
        }
    }

    fn rows() -> Rows {
        Rows(vec![(PostId::new(1), "Sample"), (PostId::new(2), "Other")])
    }

    #[tokio::test]
    async fn fresh_value_passes() {
        let rule = UniqueValue::<PostTitle>::new();
        assert!(matches!(rule.passes(&rows(), "Brand new").await, Ok(true)));
    }

    #[tokio::test]
    async fn existing_value_fails_without_exception() {
        let rule = UniqueValue::<PostTitle>::new();
        assert!(matches!(rule.passes(&rows(), "Sample").await, Ok(false)));
    }

    #[tokio::test]
    async fn own_row_is_excluded() {
        let rule = UniqueValue::<PostTitle>::except(PostId::new(1));
        assert!(matches!(rule.passes(&rows(), "Sample").await, Ok(true)));
    }

    #[tokio::test]
    async fn other_rows_still_count_with_exception() {
        let rule = UniqueValue::<PostTitle>::except(PostId::new(1));
        assert!(matches!(rule.passes(&rows(), "Other").await, Ok(false)));
    }

    #[tokio::test]
    async fn match_is_exact() {
        let rule = UniqueValue::<PostTitle>::new();
        assert!(matches!(rule.passes(&rows(), "sample").await, Ok(true)));
        assert!(matches!(rule.passes(&rows(), "Sample ").await, Ok(true)));
    }

    #[test]
    fn message_names_the_attribute() {
        assert_eq!(UniqueValue::<PostTitle>::message(), "The title is not unique.");
    }
}
