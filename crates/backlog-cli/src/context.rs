use anyhow::Context;
use backlog_core::{AppConfig, BacklogResult};
use backlog_domain::{Collection, CollectionName};
use backlog_persistence::{CollectionStore, JsonFileStore};
use std::path::Path;
use std::sync::Arc;

/// Store, config and output mode shared by every command.
pub struct CliContext {
    pub config: AppConfig,
    pub json: bool,
    store: Arc<JsonFileStore>,
}

impl CliContext {
    pub fn resolve(data_dir: Option<&Path>, json: bool) -> anyhow::Result<Self> {
        let config = AppConfig::load();
        let dir = config
            .effective_data_dir(data_dir)
            .context("could not determine a home directory; pass --data-dir or set BACKLOG_DIR")?;
        tracing::debug!("Using data directory {}", dir.display());

        Ok(Self {
            config,
            json,
            store: Arc::new(JsonFileStore::new(dir)),
        })
    }

    pub fn store(&self) -> Arc<dyn CollectionStore> {
        self.store.clone()
    }

    pub async fn load(&self, name: CollectionName) -> BacklogResult<Collection> {
        self.store.load(name).await
    }

    pub async fn save(&self, name: CollectionName, collection: &Collection) -> BacklogResult<()> {
        self.store.save(name, collection).await
    }
}
