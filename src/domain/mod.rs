//! Domain layer: the post entity, its identifier, paging types and the
//! in-memory entity store.

pub mod page;
pub mod post;
pub mod post_id;
pub mod post_table;

pub use page::{ListOrder, PAGE_SIZE, Page, PageRequest};
pub use post::{Post, PostFields};
pub use post_id::PostId;
pub use post_table::PostTable;
