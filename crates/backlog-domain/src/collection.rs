use backlog_core::{BacklogError, BacklogResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::draft::ItemUpdate;
use crate::item::{Item, ItemId, ItemStatus};
use crate::search::SearchQuery;

/// The two persisted collections. Items live in exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Active,
    Archive,
}

impl CollectionName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archive => "archive",
        }
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered sequence of items. Insertion order is the only ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, deserialize_with = "null_as_empty")]
    items: Vec<Item>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Replaces the item with the same id in place. Never appends; returns
    /// false when the id is no longer present.
    pub fn replace(&mut self, item: Item) -> bool {
        match self.get_mut(&item.id) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// First item whose id starts with `prefix`, in collection order.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id.has_prefix(prefix))
    }

    pub fn update_by_prefix(&mut self, prefix: &str, update: ItemUpdate) -> BacklogResult<Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id.has_prefix(prefix))
            .ok_or_else(|| not_found(prefix))?;
        item.apply_update(update);
        Ok(item.clone())
    }

    pub fn remove_by_prefix(&mut self, prefix: &str) -> BacklogResult<Item> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id.has_prefix(prefix))
            .ok_or_else(|| not_found(prefix))?;
        Ok(self.items.remove(pos))
    }

    /// Sets the status of the item with `id` and returns the updated copy.
    pub fn set_status(&mut self, id: &ItemId, status: ItemStatus) -> Option<Item> {
        let item = self.get_mut(id)?;
        item.update_status(status);
        Some(item.clone())
    }

    pub fn search<'a>(&'a self, query: &'a SearchQuery) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| query.matches(item))
    }

    /// Items matching `query`, split by status in column order, relative
    /// order preserved.
    pub fn partition_by_status(&self, query: &SearchQuery) -> [Vec<Item>; 3] {
        let mut buckets: [Vec<Item>; 3] = Default::default();
        for item in self.search(query) {
            buckets[item.status.column_index()].push(item.clone());
        }
        buckets
    }

    pub fn count_by_status(&self, status: ItemStatus) -> usize {
        self.items.iter().filter(|item| item.status == status).count()
    }

    /// Removes and returns every Done item, keeping the rest in order.
    pub fn take_done(&mut self) -> Vec<Item> {
        let (done, active): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.status == ItemStatus::Done);
        self.items = active;
        done
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }
}

/// Moves every Done item from `active` to the end of `archive`. Returns the
/// number of items moved.
pub fn archive_done(active: &mut Collection, archive: &mut Collection) -> usize {
    let done = active.take_done();
    let moved = done.len();
    archive.extend(done);
    moved
}

fn not_found(prefix: &str) -> BacklogError {
    BacklogError::NotFound(format!("item with ID {} not found", prefix))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemDraft;

    fn item(title: &str, status: ItemStatus) -> Item {
        let mut item = Item::new(ItemDraft::parse(title, "", "", "").unwrap());
        item.status = status;
        item
    }

    fn with_id(id: &str, title: &str) -> Item {
        let mut item = item(title, ItemStatus::Todo);
        item.id = ItemId::from(id);
        item
    }

    #[test]
    fn test_partition_preserves_order_and_covers_all() {
        let collection = Collection::from_items(vec![
            item("a", ItemStatus::Done),
            item("b", ItemStatus::Todo),
            item("c", ItemStatus::InProgress),
            item("d", ItemStatus::Todo),
            item("e", ItemStatus::Done),
        ]);

        let buckets = collection.partition_by_status(&SearchQuery::default());
        let titles = |bucket: &Vec<Item>| bucket.iter().map(|i| i.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&buckets[0]), vec!["b", "d"]);
        assert_eq!(titles(&buckets[1]), vec!["c"]);
        assert_eq!(titles(&buckets[2]), vec!["a", "e"]);
        assert_eq!(buckets.iter().map(Vec::len).sum::<usize>(), collection.len());
    }

    #[test]
    fn test_partition_applies_query() {
        let collection = Collection::from_items(vec![
            item("Urgent fix", ItemStatus::Todo),
            item("Later", ItemStatus::Todo),
            item("urgent review", ItemStatus::Done),
        ]);

        let buckets = collection.partition_by_status(&SearchQuery::new("urgent"));
        assert_eq!(buckets[0].len(), 1);
        assert_eq!(buckets[1].len(), 0);
        assert_eq!(buckets[2].len(), 1);
    }

    #[test]
    fn test_prefix_match_first_wins() {
        let mut collection =
            Collection::from_items(vec![with_id("abc1", "first"), with_id("abc2", "second")]);

        assert_eq!(collection.find_by_prefix("abc").unwrap().title, "first");
        assert_eq!(collection.find_by_prefix("abc2").unwrap().title, "second");

        let removed = collection.remove_by_prefix("abc").unwrap();
        assert_eq!(removed.title, "first");
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_prefix_miss_is_not_found() {
        let mut collection = Collection::from_items(vec![with_id("abc1", "first")]);
        let before = collection.clone();

        let err = collection
            .update_by_prefix("zzz", ItemUpdate::default())
            .unwrap_err();
        assert!(matches!(err, BacklogError::NotFound(_)));
        assert!(collection.remove_by_prefix("zzz").is_err());
        assert_eq!(collection, before);
    }

    #[test]
    fn test_replace_in_place_never_appends() {
        let mut collection = Collection::from_items(vec![with_id("1", "one"), with_id("2", "two")]);
        let mut changed = with_id("1", "uno");
        changed.status = ItemStatus::Done;
        assert!(collection.replace(changed));
        assert!(!collection.replace(with_id("3", "three")));

        let titles: Vec<_> = collection.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["uno", "two"]);
    }

    #[test]
    fn test_archive_done_moves_in_order() {
        let mut active = Collection::from_items(vec![
            item("keep", ItemStatus::Todo),
            item("done-1", ItemStatus::Done),
            item("done-2", ItemStatus::Done),
        ]);
        let mut archive = Collection::from_items(vec![item("old", ItemStatus::Done)]);

        assert_eq!(archive_done(&mut active, &mut archive), 2);
        let archived: Vec<_> = archive.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(archived, vec!["old", "done-1", "done-2"]);
        assert_eq!(active.len(), 1);

        assert_eq!(archive_done(&mut active, &mut archive), 0);
        assert_eq!(archive.len(), 3);
    }

    #[test]
    fn test_serialized_shape() {
        let collection = Collection::from_items(vec![with_id("1", "one")]);
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["items"][0]["id"], "1");

        let empty: Collection = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(empty.is_empty());
    }
}
