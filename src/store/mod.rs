//! Bounded Event Log core.
//!
//! `BoundedEventLog` retains the most recent `cap` entries in insertion
//! order, serves filtered views and aggregate counts, and mirrors the
//! retained sequence to a `PersistedStore` on every mutation.

pub mod bounded;
pub mod filter;
pub mod stats;

pub use bounded::{BoundedEventLog, StoreError};
pub use filter::LogFilter;
pub use stats::LogStatistics;

/// Date-stamped export file name for a store slot,
/// e.g. `advanced-logs-2026-08-26.json`.
pub fn export_file_name(slot: &str, date: chrono::NaiveDate) -> String {
    format!("{slot}-{}.json", date.format("%Y-%m-%d"))
}
