use thiserror::Error;

/// Input that was rejected before any state was touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    EmptyTitle,

    #[error("invalid date format '{0}'. Use DD-MM-YYYY")]
    InvalidDateFormat(String),

    #[error("invalid status '{0}'. Use: todo, in-progress, or done")]
    InvalidStatus(String),
}

#[derive(Error, Debug)]
pub enum BacklogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    StoreRead {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to write {path}: {source}")]
    StoreWrite {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BacklogError {
    pub fn store_read(
        path: impl AsRef<std::path::Path>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::StoreRead {
            path: path.as_ref().display().to_string(),
            source: source.into(),
        }
    }

    pub fn store_write(
        path: impl AsRef<std::path::Path>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::StoreWrite {
            path: path.as_ref().display().to_string(),
            source: source.into(),
        }
    }

    /// True for errors that leave persisted state untouched and only need an
    /// inline message.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}
