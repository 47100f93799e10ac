use super::{PersistError, PersistedStore};
use crate::domain::LogEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// One named JSON file per store slot, pretty-printed so the mirror stays
/// human-diffable for offline inspection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: &Path, slot: &str) -> Self {
        Self {
            path: dir.join(format!("{slot}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistedStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<LogEntry>>, PersistError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&content)?))
    }

    fn store(&mut self, entries: &[LogEntry]) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, serialized)?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "rewrote mirror slot");
        Ok(())
    }

    fn remove(&mut self) -> Result<(), PersistError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "removed mirror slot");
        }
        Ok(())
    }
}
