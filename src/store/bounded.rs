use super::{LogFilter, LogStatistics};
use crate::domain::{EntryDraft, LogEntry, entry::DEFAULT_MESSAGE};
use crate::persist::PersistedStore;
use crate::sink::{DiagnosticSink, RemoteDispatcher};
use chrono::{Duration, Utc};
use std::collections::VecDeque;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid store capacity")]
    InvalidCapacity,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Append-only sequence of the most recent `cap` entries.
///
/// Entries are never mutated after append; insertion beyond the cap evicts
/// the oldest entries first. The retained sequence is mirrored wholesale to
/// the `PersistedStore` on every append and removed on `clear`; mirror
/// failures are reported through `tracing` and never surface to the caller,
/// so `append` and `clear` are infallible.
pub struct BoundedEventLog {
    entries: VecDeque<LogEntry>,
    cap: usize,
    console: Box<dyn DiagnosticSink>,
    mirror: Box<dyn PersistedStore>,
    remote: Option<RemoteDispatcher>,
}

impl BoundedEventLog {
    pub fn new(
        cap: usize,
        console: Box<dyn DiagnosticSink>,
        mirror: Box<dyn PersistedStore>,
    ) -> Result<Self, StoreError> {
        if cap == 0 {
            return Err(StoreError::InvalidCapacity);
        }

        Ok(Self {
            entries: VecDeque::with_capacity(cap.min(1024)),
            cap,
            console,
            mirror,
            remote: None,
        })
    }

    /// Attaches a fire-and-forget remote dispatcher (production mode).
    /// Delivery is never awaited and its outcome is never observed here.
    #[must_use]
    pub fn with_remote(mut self, remote: RemoteDispatcher) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assigns identifier and timestamp, appends, evicts past the cap,
    /// emits to the diagnostic sink and rewrites the mirror. Cannot fail
    /// observably.
    pub fn append(&mut self, draft: EntryDraft) -> LogEntry {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            severity: draft.severity,
            category: draft.category,
            kind: draft.kind,
            message: draft
                .message
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            details: draft.details,
            tags: draft.tags,
            context: draft.context,
        };

        self.entries.push_back(entry.clone());
        while self.entries.len() > self.cap {
            self.entries.pop_front();
        }

        self.console.emit(&entry);
        self.write_mirror();

        if let Some(remote) = &self.remote {
            remote.dispatch(entry.clone());
        }

        entry
    }

    /// Returns clones of the retained entries matching `filter`, in
    /// insertion order. An empty filter returns the full retained sequence.
    pub fn query(&self, filter: &LogFilter) -> Vec<LogEntry> {
        let now = Utc::now();
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry, now))
            .cloned()
            .collect()
    }

    /// Linear tallies over the entries within the trailing window.
    pub fn statistics(&self, window_hours: u32) -> LogStatistics {
        let cutoff = Utc::now() - Duration::hours(i64::from(window_hours));
        let mut stats = LogStatistics::empty();

        for entry in self.entries.iter().filter(|e| e.timestamp >= cutoff) {
            stats.record(entry);
        }

        stats
    }

    /// Empties the in-memory sequence and removes the mirror slot entirely.
    pub fn clear(&mut self) {
        self.entries.clear();

        if let Err(e) = self.mirror.remove() {
            tracing::error!(error = %e, "failed to remove persisted mirror");
        }
    }

    /// Pretty-printed JSON of the full retained sequence, in insertion order.
    pub fn export(&self) -> Result<String, StoreError> {
        let ordered: Vec<&LogEntry> = self.entries.iter().collect();
        Ok(serde_json::to_string_pretty(&ordered)?)
    }

    /// Seeds the in-memory sequence from the mirror, applying the cap.
    /// Used for offline inspection; not part of the live append path.
    pub fn restore(&mut self) {
        match self.mirror.load() {
            Ok(Some(mut stored)) => {
                if stored.len() > self.cap {
                    stored.drain(..stored.len() - self.cap);
                }
                self.entries = stored.into();
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to load persisted mirror");
            }
        }
    }

    fn write_mirror(&mut self) {
        let retained = self.entries.make_contiguous();
        if let Err(e) = self.mirror.store(retained) {
            tracing::error!(error = %e, "failed to write persisted mirror");
        }
    }
}

impl std::fmt::Debug for BoundedEventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedEventLog")
            .field("cap", &self.cap)
            .field("len", &self.entries.len())
            .field("remote", &self.remote.is_some())
            .finish()
    }
}
