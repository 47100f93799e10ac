//! Outbound collaborators of the store.
//!
//! `DiagnosticSink` is the local, write-only console-equivalent output.
//! `RemoteSink` is the external one-way delivery target used in production
//! mode; `RemoteDispatcher` detaches its delivery from the append path.

pub mod console;
pub mod dispatch;
pub mod http;

pub use console::ConsoleSink;
pub use dispatch::RemoteDispatcher;
pub use http::{HttpSink, SinkConfig};

use crate::domain::LogEntry;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("HTTP error: {status}")]
    Http { status: u16 },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Write-only, best-effort local output for appended entries.
#[cfg_attr(test, automock)]
pub trait DiagnosticSink: Send {
    fn emit(&self, entry: &LogEntry);
}

/// One-way delivery target for a single serialized entry per call.
/// No response body is consumed beyond the status.
pub trait RemoteSink: Send + Sync {
    fn deliver(
        &self,
        entry: &LogEntry,
    ) -> impl std::future::Future<Output = Result<(), SinkError>> + Send;
}
