use crate::domain::{Category, LogEntry, Severity};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate counts over the entries inside a trailing time window.
///
/// Every severity and category appears in the maps, zero-defaulted, so
/// consumers never have to special-case missing keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogStatistics {
    pub total: u64,
    pub by_severity: BTreeMap<Severity, u64>,
    pub by_category: BTreeMap<Category, u64>,
    /// Entries at Error or Fatal severity.
    pub errors: u64,
    /// Entries at Warn severity.
    pub warnings: u64,
    /// Entries in the Performance category.
    pub performance: u64,
}

impl LogStatistics {
    pub(crate) fn empty() -> Self {
        Self {
            total: 0,
            by_severity: Severity::ALL.iter().map(|s| (*s, 0)).collect(),
            by_category: Category::ALL.iter().map(|c| (*c, 0)).collect(),
            errors: 0,
            warnings: 0,
            performance: 0,
        }
    }

    pub(crate) fn record(&mut self, entry: &LogEntry) {
        self.total += 1;
        *self.by_severity.entry(entry.severity).or_insert(0) += 1;
        *self.by_category.entry(entry.category).or_insert(0) += 1;

        if entry.severity.is_error() {
            self.errors += 1;
        }
        if entry.severity == Severity::Warn {
            self.warnings += 1;
        }
        if entry.category == Category::Performance {
            self.performance += 1;
        }
    }
}
