use async_trait::async_trait;
use backlog_core::BacklogResult;
use backlog_domain::{Collection, CollectionName};

/// Durable mapping from a collection name to its items.
/// Every save replaces the whole collection.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Load a collection. A collection that was never saved is empty.
    async fn load(&self, name: CollectionName) -> BacklogResult<Collection>;

    /// Replace the stored collection with `collection`.
    async fn save(&self, name: CollectionName, collection: &Collection) -> BacklogResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    fn serialize(&self, data: &T) -> BacklogResult<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> BacklogResult<T>;
}
