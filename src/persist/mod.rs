//! Persisted mirror of a store's retained sequence.
//!
//! One named slot per store, whole-value semantics: the full retained
//! sequence is rewritten on every update and removed entirely on clear.
//! The in-memory sequence stays the source of truth during a session; the
//! mirror exists for export and offline inspection.

pub mod json_file;

pub use json_file::JsonFileStore;

use crate::domain::LogEntry;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Whole-value persisted slot for one store's retained sequence.
#[cfg_attr(test, automock)]
pub trait PersistedStore: Send {
    /// `Ok(None)` when the slot has never been written or was removed.
    fn load(&self) -> Result<Option<Vec<LogEntry>>, PersistError>;

    /// Rewrites the slot with the full retained sequence.
    fn store(&mut self, entries: &[LogEntry]) -> Result<(), PersistError>;

    /// Removes the slot entirely. Removing an absent slot is not an error.
    fn remove(&mut self) -> Result<(), PersistError>;
}
