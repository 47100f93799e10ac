use super::DiagnosticSink;
use crate::domain::{LogEntry, Severity};

/// Emits appended entries through `tracing`, keyed by severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, entry: &LogEntry) {
        match entry.severity {
            Severity::Debug => tracing::debug!(
                target: "event_log",
                id = %entry.id,
                category = %entry.category,
                "{}",
                entry.message
            ),
            Severity::Info => tracing::info!(
                target: "event_log",
                id = %entry.id,
                category = %entry.category,
                "{}",
                entry.message
            ),
            Severity::Warn => tracing::warn!(
                target: "event_log",
                id = %entry.id,
                category = %entry.category,
                "{}",
                entry.message
            ),
            Severity::Error | Severity::Fatal => tracing::error!(
                target: "event_log",
                id = %entry.id,
                category = %entry.category,
                severity = %entry.severity,
                "{}",
                entry.message
            ),
        }
    }
}
