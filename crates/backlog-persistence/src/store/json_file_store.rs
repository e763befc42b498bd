use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{CollectionStore, Serializer};
use backlog_core::{BacklogError, BacklogResult};
use backlog_domain::{Collection, CollectionName};
use std::io;
use std::path::{Path, PathBuf};

const ACTIVE_FILE: &str = "items.json";
const ARCHIVE_FILE: &str = "archive.json";

/// One JSON file per collection inside a data directory.
/// The directory is created on the first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: CollectionName) -> PathBuf {
        let file = match name {
            CollectionName::Active => ACTIVE_FILE,
            CollectionName::Archive => ARCHIVE_FILE,
        };
        self.dir.join(file)
    }
}

#[async_trait::async_trait]
impl CollectionStore for JsonFileStore {
    async fn load(&self, name: CollectionName) -> BacklogResult<Collection> {
        let path = self.path(name);
        let bytes = match AtomicWriter::read_all(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No {} collection at {}, starting empty", name, path.display());
                return Ok(Collection::new());
            }
            Err(e) => return Err(BacklogError::store_read(&path, e)),
        };
        let collection: Collection = JsonSerializer
            .deserialize(&bytes)
            .map_err(|e| BacklogError::store_read(&path, e))?;

        tracing::info!(
            "Loaded {} items into {} from {}",
            collection.len(),
            name,
            path.display()
        );
        Ok(collection)
    }

    async fn save(&self, name: CollectionName, collection: &Collection) -> BacklogResult<()> {
        let path = self.path(name);
        let bytes = JsonSerializer
            .serialize(collection)
            .map_err(|e| BacklogError::store_write(&path, e))?;

        AtomicWriter::write_atomic(&path, &bytes)
            .await
            .map_err(|e| BacklogError::store_write(&path, e))?;

        tracing::info!(
            "Saved {} items from {} to {}",
            collection.len(),
            name,
            path.display()
        );
        Ok(())
    }
}
