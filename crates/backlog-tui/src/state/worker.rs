use super::{Completion, PersistRequest};
use backlog_domain::CollectionName;
use backlog_persistence::CollectionStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Detached task that performs store I/O in dispatch order.
///
/// Requests arrive over an unbounded channel so dispatching never blocks the
/// event loop. Each finished request posts a [`Completion`]; if the receiver
/// is gone the worker keeps draining so queued saves still reach disk.
pub struct PersistenceWorker {
    request_tx: Option<mpsc::UnboundedSender<PersistRequest>>,
    handle: Option<JoinHandle<()>>,
}

impl PersistenceWorker {
    pub fn spawn(store: Arc<dyn CollectionStore>, completion_tx: mpsc::Sender<Completion>) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<PersistRequest>();

        let handle = tokio::spawn(async move {
            while let Some(request) = request_rx.recv().await {
                let completion = process(store.as_ref(), request).await;
                if completion_tx.send(completion).await.is_err() {
                    tracing::debug!("Completion receiver dropped, continuing to drain requests");
                }
            }
            tracing::debug!("Persistence worker finished");
        });

        Self {
            request_tx: Some(request_tx),
            handle: Some(handle),
        }
    }

    pub fn dispatch(&self, request: PersistRequest) {
        let Some(tx) = &self.request_tx else {
            tracing::error!("Persistence worker already shut down, dropping request");
            return;
        };
        tracing::debug!("Dispatching {}", describe(&request));
        if let Err(e) = tx.send(request) {
            tracing::error!("Failed to queue {}: channel closed", describe(&e.0));
        }
    }

    /// Closes the request channel and waits for queued requests to finish.
    pub async fn shutdown(mut self) {
        self.request_tx = None;
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::error!("Persistence worker panicked: {}", e);
            }
        }
    }
}

async fn process(store: &dyn CollectionStore, request: PersistRequest) -> Completion {
    match request {
        PersistRequest::Reload => Completion::Reloaded(store.load(CollectionName::Active).await),
        PersistRequest::Save { snapshot, outcome } => {
            let result = store.save(CollectionName::Active, &snapshot).await;
            if let Err(e) = &result {
                tracing::warn!("Save failed: {}", e);
            }
            Completion::from_save(outcome, result)
        }
    }
}

fn describe(request: &PersistRequest) -> &'static str {
    match request {
        PersistRequest::Reload => "reload",
        PersistRequest::Save { .. } => "save",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DeletedItem, SaveOutcome};
    use async_trait::async_trait;
    use backlog_core::{BacklogError, BacklogResult};
    use backlog_domain::{Collection, Item, ItemDraft};
    use mockall::{mock, predicate::eq, Sequence};
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        Store {}

        #[async_trait]
        impl CollectionStore for Store {
            async fn load(&self, name: CollectionName) -> BacklogResult<Collection>;
            async fn save(&self, name: CollectionName, collection: &Collection) -> BacklogResult<()>;
        }
    }

    fn item(title: &str) -> Item {
        Item::new(ItemDraft::parse(title, "", "", "").unwrap())
    }

    #[tokio::test]
    async fn test_requests_complete_in_dispatch_order() {
        let first = item("first");
        let second = item("second");

        let mut store = MockStore::new();
        let mut seq = Sequence::new();
        store
            .expect_save()
            .withf(|name, c| *name == CollectionName::Active && c.len() == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        store
            .expect_save()
            .withf(|_, c| c.len() == 2)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let (tx, mut rx) = mpsc::channel(8);
        let worker = PersistenceWorker::spawn(Arc::new(store), tx);

        let mut snapshot = Collection::from_items(vec![first.clone()]);
        worker.dispatch(PersistRequest::Save {
            snapshot: snapshot.clone(),
            outcome: SaveOutcome::Added(first.clone()),
        });
        snapshot.push(second.clone());
        worker.dispatch(PersistRequest::Save {
            snapshot,
            outcome: SaveOutcome::Added(second.clone()),
        });

        match rx.recv().await {
            Some(Completion::ItemAdded(Ok(added))) => assert_eq!(added.title, "first"),
            other => panic!("unexpected completion: {:?}", other),
        }
        match rx.recv().await {
            Some(Completion::ItemAdded(Ok(added))) => assert_eq!(added.title, "second"),
            other => panic!("unexpected completion: {:?}", other),
        }

        worker.shutdown().await;
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let doomed = item("doomed");
        let mut store = MockStore::new();
        store.expect_save().returning(|_, _| {
            Err(BacklogError::store_write(
                "/data/items.json",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ))
        });

        let (tx, mut rx) = mpsc::channel(8);
        let worker = PersistenceWorker::spawn(Arc::new(store), tx);
        worker.dispatch(PersistRequest::Save {
            snapshot: Collection::new(),
            outcome: SaveOutcome::Deleted {
                id: doomed.id.clone(),
                title: doomed.title.clone(),
            },
        });

        match rx.recv().await {
            Some(Completion::ItemDeleted(Err(BacklogError::StoreWrite { path, .. }))) => {
                assert_eq!(path, "/data/items.json")
            }
            other => panic!("unexpected completion: {:?}", other),
        }
        worker.shutdown().await;
    }

    #[tokio::test]
    async fn test_reload_loads_active_collection() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .with(eq(CollectionName::Active))
            .times(1)
            .returning(|_| Ok(Collection::from_items(vec![item("loaded")])));

        let (tx, mut rx) = mpsc::channel(8);
        let worker = PersistenceWorker::spawn(Arc::new(store), tx);
        worker.dispatch(PersistRequest::Reload);

        match rx.recv().await {
            Some(Completion::Reloaded(Ok(collection))) => assert_eq!(collection.len(), 1),
            other => panic!("unexpected completion: {:?}", other),
        }
        worker.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_drains_after_receiver_dropped() {
        let saves = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&saves);
        let mut store = MockStore::new();
        store.expect_save().returning(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let (tx, rx) = mpsc::channel(1);
        let worker = PersistenceWorker::spawn(Arc::new(store), tx);
        drop(rx);

        for title in ["a", "b", "c"] {
            let it = item(title);
            worker.dispatch(PersistRequest::Save {
                snapshot: Collection::from_items(vec![it.clone()]),
                outcome: SaveOutcome::Moved(it),
            });
        }

        worker.shutdown().await;
        assert_eq!(saves.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_deleted_outcome_maps_to_completion() {
        let gone = item("gone");
        let completion = Completion::from_save(
            SaveOutcome::Deleted {
                id: gone.id.clone(),
                title: "gone".into(),
            },
            Ok(()),
        );
        match completion {
            Completion::ItemDeleted(Ok(DeletedItem { id, title })) => {
                assert_eq!(id, gone.id);
                assert_eq!(title, "gone");
            }
            other => panic!("unexpected completion: {:?}", other),
        }
    }
}
