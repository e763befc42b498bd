//! Item search.
//!
//! Shared by the board filter and the `search` command so both match the
//! same items.

use crate::Item;

/// Case-insensitive substring match over title, description and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            needle: query.into().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// An empty query matches everything.
    pub fn matches(&self, item: &Item) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&self.needle);
        hit(&item.title) || hit(&item.description) || item.tags.iter().any(|tag| hit(tag))
    }
}
