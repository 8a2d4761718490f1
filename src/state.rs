//! Shared application state: the message log and the per-path visit counters.
//!
//! Both structures live behind a single `tokio::sync::Mutex` inside
//! `AppState`. Every read and write goes through a method that takes and
//! releases the lock internally, so no caller can hold a guard across an
//! await point or forget to release it. Reads hand out cloned snapshots;
//! rendering and reporting happen outside the critical section.
//!
use std::collections::HashMap;

use tokio::sync::Mutex;

/// A single posted entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Name the visitor signed with (may be empty)
    pub name: String,
    /// Body of the entry (may be empty)
    pub content: String,
}

/// Everything guarded by the lock
#[derive(Default)]
struct Store {
    // Insertion order, oldest first
    messages: Vec<Message>,
    // Request path -> number of requests dispatched to it
    visits: HashMap<String, u64>,
}

/// Application state shared by every handler.
///
/// One mutex guards both the log and the counters. The critical sections are
/// a few instructions each and never perform I/O, so the coarse lock costs
/// nothing in practice.
pub struct AppState {
    store: Mutex<Store>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::default()),
        }
    }

    /// Bump the visit counter for `path`. A path never seen before counts
    /// from zero.
    pub async fn record_visit(&self, path: &str) {
        let mut store = self.store.lock().await;
        *store.visits.entry(path.to_string()).or_insert(0) += 1;
    }

    /// Append a message to the end of the log.
    pub async fn push_message(&self, message: Message) {
        self.store.lock().await.messages.push(message);
    }

    /// Cloned snapshot of the message log, oldest first.
    pub async fn messages(&self) -> Vec<Message> {
        self.store.lock().await.messages.clone()
    }

    /// Drop every message. Visit counters are left untouched.
    pub async fn clear_messages(&self) {
        self.store.lock().await.messages.clear();
    }

    /// Snapshot of the visit counters, sorted by path for a stable report.
    pub async fn visit_counts(&self) -> Vec<(String, u64)> {
        let store = self.store.lock().await;
        let mut counts: Vec<(String, u64)> = store
            .visits
            .iter()
            .map(|(path, count)| (path.clone(), *count))
            .collect();
        counts.sort();
        counts
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
