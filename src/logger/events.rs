use crate::domain::{Category, EntryDraft, LogContext, LogEntry, Severity};
use crate::store::{BoundedEventLog, LogFilter, LogStatistics, StoreError};
use serde_json::json;
use std::collections::HashMap;
use std::time::Instant;
use uuid::Uuid;

/// Structured event logging facade.
///
/// Generates a session identifier at construction and stamps it into the
/// context of every entry, along with the current user id when set.
pub struct EventLogger {
    store: BoundedEventLog,
    session_id: String,
    user_id: Option<String>,
    marks: HashMap<String, Instant>,
}

impl EventLogger {
    pub fn new(store: BoundedEventLog) -> Self {
        Self {
            store,
            session_id: format!("session-{}", Uuid::new_v4()),
            user_id: None,
            marks: HashMap::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn set_user(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    fn context(&self) -> LogContext {
        LogContext {
            user_id: self.user_id.clone(),
            session_id: Some(self.session_id.clone()),
            origin_url: None,
            user_agent: None,
        }
    }

    /// Full-form append; the level methods and domain helpers go through here.
    pub fn log(
        &mut self,
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        details: Option<serde_json::Value>,
        tags: Vec<String>,
    ) -> LogEntry {
        let mut draft = EntryDraft::new(severity, category)
            .message(message)
            .tags(tags)
            .context(self.context());

        if let Some(details) = details {
            draft = draft.details(details);
        }

        self.store.append(draft)
    }

    pub fn debug(&mut self, category: Category, message: impl Into<String>) -> LogEntry {
        self.log(Severity::Debug, category, message, None, Vec::new())
    }

    pub fn info(&mut self, category: Category, message: impl Into<String>) -> LogEntry {
        self.log(Severity::Info, category, message, None, Vec::new())
    }

    pub fn warn(&mut self, category: Category, message: impl Into<String>) -> LogEntry {
        self.log(Severity::Warn, category, message, None, Vec::new())
    }

    pub fn error(&mut self, category: Category, message: impl Into<String>) -> LogEntry {
        self.log(Severity::Error, category, message, None, Vec::new())
    }

    pub fn fatal(&mut self, category: Category, message: impl Into<String>) -> LogEntry {
        self.log(Severity::Fatal, category, message, None, Vec::new())
    }

    /// Status >= 400 is recorded at Error severity, otherwise Info.
    pub fn api_call(
        &mut self,
        method: &str,
        url: &str,
        status: u16,
        duration_ms: Option<u64>,
    ) -> LogEntry {
        let severity = if status >= 400 {
            Severity::Error
        } else {
            Severity::Info
        };

        self.log(
            severity,
            Category::Api,
            format!("API {method} {url}"),
            Some(json!({
                "method": method,
                "url": url,
                "status": status,
                "duration_ms": duration_ms,
            })),
            vec!["api".to_string()],
        )
    }

    pub fn navigation(&mut self, from: &str, to: &str) -> LogEntry {
        self.log(
            Severity::Info,
            Category::Navigation,
            format!("Navigation: {from} -> {to}"),
            Some(json!({ "from": from, "to": to })),
            vec!["navigation".to_string()],
        )
    }

    /// Successful operations are Info, failed ones Warn.
    pub fn authentication(&mut self, operation: &str, success: bool) -> LogEntry {
        let outcome = if success { "SUCCESS" } else { "FAILED" };
        let severity = if success {
            Severity::Info
        } else {
            Severity::Warn
        };

        self.log(
            severity,
            Category::Auth,
            format!("Authentication {operation}: {outcome}"),
            Some(json!({ "operation": operation, "success": success })),
            vec!["auth".to_string()],
        )
    }

    pub fn security_event(&mut self, event: &str) -> LogEntry {
        self.log(
            Severity::Warn,
            Category::Security,
            format!("Security event: {event}"),
            None,
            vec!["security".to_string()],
        )
    }

    pub fn business_event(&mut self, event: &str) -> LogEntry {
        self.log(
            Severity::Info,
            Category::Business,
            format!("Business event: {event}"),
            None,
            vec!["business".to_string()],
        )
    }

    pub fn interaction(&mut self, element: &str, action: &str) -> LogEntry {
        self.log(
            Severity::Debug,
            Category::Ui,
            format!("User interaction: {action} on {element}"),
            None,
            vec!["ui".to_string(), "interaction".to_string()],
        )
    }

    /// Marks the start of a timed operation. A later `end_timer` with the
    /// same name records a Performance entry.
    pub fn start_timer(&mut self, operation: impl Into<String>) {
        self.marks.insert(operation.into(), Instant::now());
    }

    /// Ends a timed operation; `None` when no matching `start_timer` exists.
    pub fn end_timer(&mut self, operation: &str) -> Option<LogEntry> {
        let started = self.marks.remove(operation)?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let duration_ms = (elapsed_ms * 100.0).round() / 100.0;

        Some(self.log(
            Severity::Info,
            Category::Performance,
            format!("Operation completed: {operation}"),
            Some(json!({ "operation": operation, "duration_ms": duration_ms })),
            vec!["performance".to_string()],
        ))
    }

    pub fn query(&self, filter: &LogFilter) -> Vec<LogEntry> {
        self.store.query(filter)
    }

    pub fn statistics(&self, window_hours: u32) -> LogStatistics {
        self.store.statistics(window_hours)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn export(&self) -> Result<String, StoreError> {
        self.store.export()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
