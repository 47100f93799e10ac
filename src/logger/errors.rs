use crate::domain::{Category, EntryDraft, LogContext, LogEntry, Severity};
use crate::store::{BoundedEventLog, LogFilter, LogStatistics, StoreError};
use serde_json::json;
use uuid::Uuid;

/// Error-kind tags recorded by `ErrorRecorder`.
pub mod kinds {
    pub const HTTP: &str = "HTTP_ERROR";
    pub const AUTH: &str = "AUTH_ERROR";
    pub const NETWORK: &str = "NETWORK_ERROR";
    pub const VALIDATION: &str = "VALIDATION_ERROR";
    pub const NAVIGATION: &str = "NAVIGATION_ERROR";
    pub const COMPONENT: &str = "COMPONENT_ERROR";
    pub const SERVICE: &str = "SERVICE_ERROR";
    pub const RATE_LIMIT: &str = "RATE_LIMIT_ERROR";
}

/// Records failures that occurred elsewhere.
///
/// Every entry carries Error severity, an `error` tag and a free-form kind
/// string; the store's only responsibility toward them is faithful recording
/// up to the retention cap.
pub struct ErrorRecorder {
    store: BoundedEventLog,
    session_id: String,
    user_id: Option<String>,
}

impl ErrorRecorder {
    pub fn new(store: BoundedEventLog) -> Self {
        Self {
            store,
            session_id: format!("session-{}", Uuid::new_v4()),
            user_id: None,
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

    /// Generic error append; the kind-specific helpers go through here.
    pub fn record(
        &mut self,
        kind: &str,
        category: Category,
        message: impl Into<String>,
        details: Option<serde_json::Value>,
    ) -> LogEntry {
        let mut draft = EntryDraft::new(Severity::Error, category)
            .kind(kind)
            .message(message)
            .tag("error")
            .context(self.context());

        if let Some(details) = details {
            draft = draft.details(details);
        }

        self.store.append(draft)
    }

    pub fn http(
        &mut self,
        status: u16,
        method: &str,
        url: &str,
        message: Option<String>,
    ) -> LogEntry {
        self.record(
            kinds::HTTP,
            Category::Api,
            message.unwrap_or_else(|| "HTTP Request Failed".to_string()),
            Some(json!({ "status": status, "method": method, "url": url })),
        )
    }

    pub fn auth(&mut self, auth_method: &str, message: Option<String>) -> LogEntry {
        self.record(
            kinds::AUTH,
            Category::Auth,
            message.unwrap_or_else(|| "Authentication Failed".to_string()),
            Some(json!({ "auth_method": auth_method })),
        )
    }

    pub fn network(&mut self, request_type: &str, message: Option<String>) -> LogEntry {
        self.record(
            kinds::NETWORK,
            Category::Api,
            message.unwrap_or_else(|| "Network Connection Failed".to_string()),
            Some(json!({ "request_type": request_type })),
        )
    }

    pub fn validation(&mut self, field: &str, value: serde_json::Value, rule: &str) -> LogEntry {
        self.record(
            kinds::VALIDATION,
            Category::Ui,
            format!("Validation failed for field: {field}"),
            Some(json!({ "field": field, "value": value, "rule": rule })),
        )
    }

    pub fn navigation(&mut self, route: &str, message: Option<String>) -> LogEntry {
        self.record(
            kinds::NAVIGATION,
            Category::Navigation,
            message.unwrap_or_else(|| "Navigation Failed".to_string()),
            Some(json!({ "route": route })),
        )
    }

    pub fn component(
        &mut self,
        component: &str,
        method: Option<&str>,
        message: Option<String>,
    ) -> LogEntry {
        self.record(
            kinds::COMPONENT,
            Category::System,
            message.unwrap_or_else(|| "Component Error".to_string()),
            Some(json!({ "component": component, "method": method })),
        )
    }

    pub fn service(
        &mut self,
        service: &str,
        method: Option<&str>,
        message: Option<String>,
    ) -> LogEntry {
        self.record(
            kinds::SERVICE,
            Category::System,
            message.unwrap_or_else(|| "Service Error".to_string()),
            Some(json!({ "service": service, "method": method })),
        )
    }

    pub fn rate_limit(&mut self, endpoint: &str, retry_after_secs: Option<u64>) -> LogEntry {
        self.record(
            kinds::RATE_LIMIT,
            Category::Api,
            "Rate Limit Exceeded".to_string(),
            Some(json!({ "endpoint": endpoint, "retry_after_secs": retry_after_secs })),
        )
    }

    pub fn by_kind(&self, kind: &str) -> Vec<LogEntry> {
        self.store.query(&LogFilter::default().kind(kind))
    }

    pub fn recent(&self, hours: u32) -> Vec<LogEntry> {
        self.store.query(&LogFilter::default().within_hours(hours))
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
