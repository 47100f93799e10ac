use crate::domain::{Category, LogEntry, Severity};
use chrono::{DateTime, Duration, Utc};

/// Conjunctive filter over retained entries.
///
/// Every field is optional; an empty filter matches everything. The time
/// window includes entries at or after `now - window_hours` and excludes
/// strictly older ones.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub severity: Option<Severity>,
    pub category: Option<Category>,
    pub kind: Option<String>,
    pub within_hours: Option<u32>,
    pub message_contains: Option<String>,
    pub tag: Option<String>,
    pub user_id: Option<String>,
}

impl LogFilter {
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn within_hours(mut self, hours: u32) -> Self {
        self.within_hours = Some(hours);
        self
    }

    #[must_use]
    pub fn message_contains(mut self, needle: impl Into<String>) -> Self {
        self.message_contains = Some(needle.into());
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub(crate) fn matches(&self, entry: &LogEntry, now: DateTime<Utc>) -> bool {
        if let Some(severity) = self.severity
            && entry.severity != severity
        {
            return false;
        }

        if let Some(category) = self.category
            && entry.category != category
        {
            return false;
        }

        if let Some(kind) = &self.kind
            && entry.kind.as_deref() != Some(kind.as_str())
        {
            return false;
        }

        if let Some(hours) = self.within_hours {
            let cutoff = now - Duration::hours(i64::from(hours));
            if entry.timestamp < cutoff {
                return false;
            }
        }

        if let Some(needle) = &self.message_contains
            && !entry
                .message
                .to_lowercase()
                .contains(&needle.to_lowercase())
        {
            return false;
        }

        if let Some(tag) = &self.tag
            && !entry.tags.iter().any(|t| t == tag)
        {
            return false;
        }

        if let Some(user_id) = &self.user_id
            && entry.context.user_id.as_deref() != Some(user_id.as_str())
        {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LogContext;
    use uuid::Uuid;

    fn entry_at(timestamp: DateTime<Utc>) -> LogEntry {
        LogEntry {
            id: Uuid::new_v4(),
            timestamp,
            severity: Severity::Info,
            category: Category::Api,
            kind: None,
            message: "GET /v1/items returned 200".to_string(),
            details: None,
            tags: vec!["api".to_string()],
            context: LogContext {
                user_id: Some("user-7".to_string()),
                ..LogContext::default()
            },
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let now = Utc::now();
        assert!(LogFilter::default().matches(&entry_at(now), now));
    }

    #[test]
    fn window_excludes_strictly_older_entries() {
        let now = Utc::now();
        let filter = LogFilter::default().within_hours(2);

        assert!(filter.matches(&entry_at(now - Duration::hours(1)), now));
        assert!(filter.matches(&entry_at(now - Duration::hours(2)), now));
        assert!(!filter.matches(&entry_at(now - Duration::hours(3)), now));
    }

    #[test]
    fn message_search_is_case_insensitive() {
        let now = Utc::now();
        assert!(LogFilter::default().message_contains("v1/ITEMS").matches(&entry_at(now), now));
        assert!(!LogFilter::default().message_contains("DELETE").matches(&entry_at(now), now));
    }

    #[test]
    fn filters_are_conjunctive() {
        let now = Utc::now();
        let both = LogFilter::default()
            .severity(Severity::Info)
            .tag("api");
        let mixed = LogFilter::default()
            .severity(Severity::Info)
            .tag("security");

        assert!(both.matches(&entry_at(now), now));
        assert!(!mixed.matches(&entry_at(now), now));
    }

    #[test]
    fn kind_and_user_filters_compare_exactly() {
        let now = Utc::now();
        let mut entry = entry_at(now);
        entry.kind = Some("HTTP_ERROR".to_string());

        assert!(LogFilter::default().kind("HTTP_ERROR").matches(&entry, now));
        assert!(!LogFilter::default().kind("AUTH_ERROR").matches(&entry, now));
        assert!(LogFilter::default().user_id("user-7").matches(&entry, now));
        assert!(!LogFilter::default().user_id("user-8").matches(&entry, now));
    }
}
