use super::{Category, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback message for drafts appended without one.
pub const DEFAULT_MESSAGE: &str = "Unknown event";

/// Caller-supplied origin of a logged event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogContext {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub origin_url: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// One immutable record of a logged event or error.
///
/// `id` and `timestamp` are assigned by the store at append time; nothing
/// mutates an entry afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub category: Category,
    /// Free-form error-kind tag (`"HTTP_ERROR"`, ...); `None` for generic entries.
    #[serde(default)]
    pub kind: Option<String>,
    pub message: String,
    /// Opaque payload; the store never inspects it.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub context: LogContext,
}

/// The fields a caller supplies when appending. The store fills in the rest.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub severity: Severity,
    pub category: Category,
    pub kind: Option<String>,
    pub message: Option<String>,
    pub details: Option<serde_json::Value>,
    pub tags: Vec<String>,
    pub context: LogContext,
}

impl EntryDraft {
    pub fn new(severity: Severity, category: Category) -> Self {
        Self {
            severity,
            category,
            kind: None,
            message: None,
            details: None,
            tags: Vec::new(),
            context: LogContext::default(),
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub fn context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }
}
