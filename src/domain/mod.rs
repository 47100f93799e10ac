//! Domain layer for logos-event-log.
//!
//! Contains the canonical types shared across all modules:
//! - `LogEntry`: one immutable record of a logged event or error
//! - `EntryDraft`: the caller-supplied portion of an entry
//! - `Severity`: ordered severity (Debug/Info/Warn/Error/Fatal)
//! - `Category`: closed classification enumeration

pub mod category;
pub mod entry;
pub mod severity;

pub use category::Category;
pub use entry::{EntryDraft, LogContext, LogEntry};
pub use severity::Severity;
