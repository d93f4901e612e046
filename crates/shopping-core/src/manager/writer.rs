//! Debounced save writer.
//!
//! A background task that owns every write of the list to storage.
//! Submissions go through a single `watch` slot: a newer snapshot replaces
//! an older one that has not been written yet, and writes happen one at a
//! time, so a stale list can never land after a newer one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::{DomainResult, Item};
use crate::repository::{encode_items, KeyValueStore};

/// Statistics from the save writer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriterStats {
    /// Snapshots written successfully
    pub writes: usize,
    /// Snapshots whose write failed
    pub failures: usize,
    /// Snapshots replaced by a newer one before they were written
    pub superseded: u64,
}

#[derive(Debug, Clone)]
struct Pending {
    generation: u64,
    items: Vec<Item>,
}

/// Single-slot writer that always saves the latest submitted list.
///
/// ## Example
///
/// ```ignore
/// let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
/// let mut writer = SaveWriter::spawn(store, "shoppingItems", Duration::from_millis(300));
///
/// writer.submit(items.clone());
/// writer.flush().await;
///
/// let stats = writer.shutdown().await;
/// println!("{} writes", stats.writes);
/// ```
pub struct SaveWriter {
    pending_tx: watch::Sender<Option<Pending>>,
    written_rx: watch::Receiver<u64>,
    generation: u64,
    handle: JoinHandle<WriterStats>,
}

impl SaveWriter {
    /// Spawn the writer task on the current tokio runtime.
    pub fn spawn(store: Arc<dyn KeyValueStore>, key: impl Into<String>, debounce: Duration) -> Self {
        let (pending_tx, pending_rx) = watch::channel(None);
        let (written_tx, written_rx) = watch::channel(0);
        let handle = tokio::spawn(run_writer(store, key.into(), debounce, pending_rx, written_tx));

        Self {
            pending_tx,
            written_rx,
            generation: 0,
            handle,
        }
    }

    /// Queue a snapshot without waiting. Returns its generation number.
    pub fn submit(&mut self, items: Vec<Item>) -> u64 {
        self.generation += 1;
        let pending = Pending {
            generation: self.generation,
            items,
        };
        if self.pending_tx.send(Some(pending)).is_err() {
            log::error!("Save writer has stopped, generation {} dropped", self.generation);
        }
        self.generation
    }

    /// Generation of the most recent submission (0 if none)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait until everything submitted so far has been written (or has failed).
    pub async fn flush(&self) {
        let target = self.generation;
        let mut written_rx = self.written_rx.clone();
        if written_rx.wait_for(|written| *written >= target).await.is_err() {
            log::warn!("Save writer stopped before generation {} was written", target);
        }
    }

    /// Write whatever is still pending, stop the task and return its statistics.
    pub async fn shutdown(self) -> WriterStats {
        let SaveWriter {
            pending_tx,
            written_rx,
            handle,
            ..
        } = self;
        drop(pending_tx);

        let stats = match handle.await {
            Ok(stats) => stats,
            Err(e) => {
                log::error!("Save writer task failed: {}", e);
                WriterStats::default()
            }
        };
        drop(written_rx);
        stats
    }
}

async fn run_writer(
    store: Arc<dyn KeyValueStore>,
    key: String,
    debounce: Duration,
    mut pending_rx: watch::Receiver<Option<Pending>>,
    written_tx: watch::Sender<u64>,
) -> WriterStats {
    let mut stats = WriterStats::default();
    let mut last_generation = 0u64;

    // changed() still yields a final unseen value after the sender is dropped
    while pending_rx.changed().await.is_ok() {
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
        }

        let latest = pending_rx.borrow_and_update().clone();
        let Some(pending) = latest else {
            continue;
        };

        stats.superseded += pending.generation.saturating_sub(last_generation + 1);
        last_generation = pending.generation;

        match save_items(store.as_ref(), &key, &pending.items).await {
            Ok(()) => {
                stats.writes += 1;
                log::debug!("Saved {} items (generation {})", pending.items.len(), pending.generation);
            }
            Err(e) => {
                stats.failures += 1;
                log::error!("Failed to save items: {}", e);
            }
        }

        written_tx.send_replace(pending.generation);
    }

    stats
}

async fn save_items(store: &dyn KeyValueStore, key: &str, items: &[Item]) -> DomainResult<()> {
    let encoded = encode_items(items)?;
    store.set(key, &encoded).await
}
