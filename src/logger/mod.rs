//! Caller-facing logging facades over `BoundedEventLog`.
//!
//! `EventLogger` records generic structured events (the 500-entry store);
//! `ErrorRecorder` records failures that happened elsewhere, tagged with a
//! free-form error kind (the 100-entry store). Both are constructed by the
//! composition root and hold their store by value; there is no global
//! singleton.

pub mod errors;
pub mod events;

pub use errors::{ErrorRecorder, kinds};
pub use events::EventLogger;
