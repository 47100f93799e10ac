#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::missing_panics_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. StoreError in store module
    clippy::must_use_candidate       // Annotated selectively on critical APIs
)]

pub mod app;
pub mod domain;
pub mod logger;
pub mod persist;
pub mod sink;
pub mod store;

// Re-export main types for easy access
pub use app::{Config, LogHub};
pub use domain::{Category, EntryDraft, LogContext, LogEntry, Severity};
pub use store::{BoundedEventLog, LogFilter, LogStatistics};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
