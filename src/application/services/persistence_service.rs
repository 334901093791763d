//! Snapshot loading and periodic background flushing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::domain::repositories::SnapshotRepository;
use crate::domain::{LinkStore, Snapshot};

/// Moves snapshots between the in-memory store and durable storage.
///
/// Owns the two one-way paths of the persistence lifecycle:
///
/// - [`PersistenceService::load`] runs once at startup, before the listener
///   binds, and populates the store from the last snapshot.
/// - [`PersistenceService::run`] is the background worker: a ticker that
///   flushes the store whenever it has unflushed changes, retrying failed
///   writes on the next cycle, until told to shut down.
///
/// Storage failures never escape this service; they are logged and the
/// store's dirty flag keeps the data scheduled.
pub struct PersistenceService<S: SnapshotRepository> {
    store: Arc<LinkStore>,
    repository: Arc<S>,
}

impl<S: SnapshotRepository> PersistenceService<S> {
    /// Creates a new persistence service.
    pub fn new(store: Arc<LinkStore>, repository: Arc<S>) -> Self {
        Self { store, repository }
    }

    /// Populates the store from the stored snapshot, if one exists.
    ///
    /// Never fails: a missing, unreadable, or undecodable snapshot is logged
    /// and the store keeps its current (empty) contents. A corrupt snapshot
    /// is never partially applied.
    pub async fn load(&self) {
        match self.repository.read().await {
            Ok(Some(bytes)) => match Snapshot::from_bytes(&bytes) {
                Ok(snapshot) => {
                    let count = snapshot.len();
                    self.store.replace(snapshot);
                    info!("Loaded {count} links from snapshot");
                }
                Err(e) => {
                    warn!("Snapshot failed to decode, keeping current store: {e}");
                }
            },
            Ok(None) => {
                info!("No snapshot found, starting with an empty store");
            }
            Err(e) => {
                warn!("Failed to read snapshot, starting with an empty store: {e}");
            }
        }
    }

    /// Writes the current store contents to storage.
    ///
    /// The maps are cloned under the shared lock and the write happens with
    /// no lock held, so readers are never blocked on disk I/O. The dirty
    /// flag is cleared only on success, and only when nothing mutated the
    /// store while the write was in flight.
    ///
    /// Returns whether the snapshot was durably written.
    pub async fn flush(&self) -> bool {
        let (snapshot, generation) = self.store.export();
        let count = snapshot.len();

        let bytes = match snapshot.to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Failed to encode snapshot: {e}");
                return false;
            }
        };

        match self.repository.write(&bytes).await {
            Ok(()) => {
                self.store.mark_clean(generation);
                debug!("Flushed {count} links to snapshot");
                true
            }
            Err(e) => {
                error!("Failed to write snapshot: {e}");
                false
            }
        }
    }

    /// Runs the periodic flush loop until `shutdown` fires.
    ///
    /// Wakes every `interval`, flushes when the store is dirty, and performs
    /// one final flush on shutdown so nothing accepted before the signal is
    /// lost to a clean stop.
    pub async fn run(self, interval: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.store.is_dirty() {
                        self.flush().await;
                    }
                }
                _ = shutdown.changed() => {
                    if self.store.is_dirty() {
                        self.flush().await;
                    }
                    info!("Snapshot worker stopped");
                    return;
                }
            }
        }
    }
}
