use crate::traits::Serializer;
use backlog_core::{BacklogError, BacklogResult};

/// Pretty-printed JSON, two-space indentation.
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> BacklogResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| BacklogError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> BacklogResult<T> {
        serde_json::from_slice(bytes).map_err(|e| BacklogError::Serialization(e.to_string()))
    }
}
