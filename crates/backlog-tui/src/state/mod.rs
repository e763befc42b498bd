pub mod worker;

pub use worker::PersistenceWorker;

use backlog_core::BacklogResult;
use backlog_domain::{Collection, Item, ItemId};

/// Capacity of the completion queue between the worker and the event loop.
pub const COMPLETION_QUEUE_CAPACITY: usize = 64;

/// What a save reports back once the collection is on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Added(Item),
    Updated(Item),
    Moved(Item),
    Deleted { id: ItemId, title: String },
}

/// Work handed to the persistence worker.
#[derive(Debug, Clone)]
pub enum PersistRequest {
    Reload,
    /// Write `snapshot` as the active collection, then report `outcome`.
    Save {
        snapshot: Collection,
        outcome: SaveOutcome,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeletedItem {
    pub id: ItemId,
    pub title: String,
}

/// Result of a finished request, fed back into the controller.
#[derive(Debug)]
pub enum Completion {
    Reloaded(BacklogResult<Collection>),
    ItemAdded(BacklogResult<Item>),
    ItemUpdated(BacklogResult<Item>),
    ItemMoved(BacklogResult<Item>),
    ItemDeleted(BacklogResult<DeletedItem>),
}

impl Completion {
    fn from_save(outcome: SaveOutcome, result: BacklogResult<()>) -> Self {
        match outcome {
            SaveOutcome::Added(item) => Self::ItemAdded(result.map(|()| item)),
            SaveOutcome::Updated(item) => Self::ItemUpdated(result.map(|()| item)),
            SaveOutcome::Moved(item) => Self::ItemMoved(result.map(|()| item)),
            SaveOutcome::Deleted { id, title } => {
                Self::ItemDeleted(result.map(|()| DeletedItem { id, title }))
            }
        }
    }
}
