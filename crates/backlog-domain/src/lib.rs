pub mod collection;
pub mod draft;
pub mod item;
pub mod search;

pub use collection::{archive_done, Collection, CollectionName};
pub use draft::{parse_tags, validate_due_date, ItemDraft, ItemUpdate};
pub use item::{Item, ItemId, ItemStatus};
pub use search::SearchQuery;
