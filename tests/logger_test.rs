use logos_event_log::domain::{Category, Severity};
use logos_event_log::logger::{ErrorRecorder, EventLogger, kinds};
use logos_event_log::persist::JsonFileStore;
use logos_event_log::sink::ConsoleSink;
use logos_event_log::store::{BoundedEventLog, LogFilter};
use std::path::Path;
use tempfile::TempDir;

fn store(dir: &Path, slot: &str, cap: usize) -> BoundedEventLog {
    BoundedEventLog::new(
        cap,
        Box::new(ConsoleSink),
        Box::new(JsonFileStore::new(dir, slot)),
    )
    .unwrap()
}

fn event_logger(dir: &Path) -> EventLogger {
    EventLogger::new(store(dir, "advanced-logs", 500))
}

fn error_recorder(dir: &Path) -> ErrorRecorder {
    ErrorRecorder::new(store(dir, "error-logs", 100))
}

#[test]
fn entries_carry_the_session_id() {
    let dir = TempDir::new().unwrap();
    let mut logger = event_logger(dir.path());

    let entry = logger.info(Category::System, "startup");
    assert_eq!(
        entry.context.session_id.as_deref(),
        Some(logger.session_id())
    );
}

#[test]
fn set_user_stamps_subsequent_entries() {
    let dir = TempDir::new().unwrap();
    let mut logger = event_logger(dir.path());

    let anonymous = logger.info(Category::System, "before login");
    logger.set_user(Some("user-9".to_string()));
    let named = logger.info(Category::System, "after login");

    assert_eq!(anonymous.context.user_id, None);
    assert_eq!(named.context.user_id.as_deref(), Some("user-9"));
    assert_eq!(logger.query(&LogFilter::default().user_id("user-9")).len(), 1);
}

#[test]
fn api_calls_with_failure_status_are_errors() {
    let dir = TempDir::new().unwrap();
    let mut logger = event_logger(dir.path());

    let ok = logger.api_call("GET", "/v1/items", 200, Some(12));
    let failed = logger.api_call("POST", "/v1/items", 502, None);

    assert_eq!(ok.severity, Severity::Info);
    assert_eq!(failed.severity, Severity::Error);
    assert_eq!(failed.category, Category::Api);
    assert!(failed.tags.contains(&"api".to_string()));
    assert_eq!(failed.details.as_ref().unwrap()["status"], 502);
}

#[test]
fn failed_authentication_is_a_warning() {
    let dir = TempDir::new().unwrap();
    let mut logger = event_logger(dir.path());

    let success = logger.authentication("login", true);
    let failure = logger.authentication("login", false);

    assert_eq!(success.severity, Severity::Info);
    assert_eq!(failure.severity, Severity::Warn);
    assert_eq!(failure.category, Category::Auth);
    assert!(failure.message.ends_with("FAILED"));
}

#[test]
fn interactions_are_debug_level_ui_entries() {
    let dir = TempDir::new().unwrap();
    let mut logger = event_logger(dir.path());

    let entry = logger.interaction("save-button", "click");
    assert_eq!(entry.severity, Severity::Debug);
    assert_eq!(entry.category, Category::Ui);
    assert_eq!(entry.message, "User interaction: click on save-button");
    assert!(entry.tags.contains(&"ui".to_string()));
}

#[test]
fn timers_produce_performance_entries() {
    let dir = TempDir::new().unwrap();
    let mut logger = event_logger(dir.path());

    logger.start_timer("load-dashboard");
    std::thread::sleep(std::time::Duration::from_millis(5));
    let entry = logger.end_timer("load-dashboard").unwrap();

    assert_eq!(entry.category, Category::Performance);
    assert!(entry.tags.contains(&"performance".to_string()));
    let duration_ms = entry.details.as_ref().unwrap()["duration_ms"]
        .as_f64()
        .unwrap();
    assert!(duration_ms > 0.0);
}

#[test]
fn ending_an_unknown_timer_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut logger = event_logger(dir.path());

    assert!(logger.end_timer("never-started").is_none());
    assert!(logger.is_empty());
}

#[test]
fn ending_a_timer_twice_only_records_once() {
    let dir = TempDir::new().unwrap();
    let mut logger = event_logger(dir.path());

    logger.start_timer("once");
    assert!(logger.end_timer("once").is_some());
    assert!(logger.end_timer("once").is_none());
    assert_eq!(logger.len(), 1);
}

#[test]
fn http_errors_use_the_default_message_and_kind() {
    let dir = TempDir::new().unwrap();
    let mut recorder = error_recorder(dir.path());

    let entry = recorder.http(503, "GET", "/v1/items", None);

    assert_eq!(entry.severity, Severity::Error);
    assert_eq!(entry.category, Category::Api);
    assert_eq!(entry.kind.as_deref(), Some(kinds::HTTP));
    assert_eq!(entry.message, "HTTP Request Failed");
    assert!(entry.tags.contains(&"error".to_string()));
}

#[test]
fn explicit_error_messages_override_the_default() {
    let dir = TempDir::new().unwrap();
    let mut recorder = error_recorder(dir.path());

    let entry = recorder.auth("password", Some("invalid credentials".to_string()));
    assert_eq!(entry.message, "invalid credentials");
    assert_eq!(entry.kind.as_deref(), Some(kinds::AUTH));
    assert_eq!(entry.category, Category::Auth);
}

#[test]
fn validation_errors_name_the_field() {
    let dir = TempDir::new().unwrap();
    let mut recorder = error_recorder(dir.path());

    let entry = recorder.validation("email", serde_json::json!("not-an-address"), "rfc5322");
    assert_eq!(entry.message, "Validation failed for field: email");
    assert_eq!(entry.kind.as_deref(), Some(kinds::VALIDATION));
    assert_eq!(entry.details.as_ref().unwrap()["rule"], "rfc5322");
}

#[test]
fn by_kind_filters_across_recorded_errors() {
    let dir = TempDir::new().unwrap();
    let mut recorder = error_recorder(dir.path());

    recorder.http(500, "GET", "/a", None);
    recorder.network("fetch", None);
    recorder.http(404, "GET", "/b", None);
    recorder.rate_limit("/v1/items", Some(30));

    assert_eq!(recorder.by_kind(kinds::HTTP).len(), 2);
    assert_eq!(recorder.by_kind(kinds::NETWORK).len(), 1);
    assert_eq!(recorder.by_kind(kinds::RATE_LIMIT).len(), 1);
    assert_eq!(recorder.recent(24).len(), 4);
}

#[test]
fn error_store_honors_its_own_cap() {
    let dir = TempDir::new().unwrap();
    let mut recorder = ErrorRecorder::new(store(dir.path(), "error-logs", 3));

    for i in 0..5 {
        recorder.service("svc", None, Some(format!("failure-{i}")));
    }

    let retained = recorder.query(&LogFilter::default());
    assert_eq!(retained.len(), 3);
    assert_eq!(retained[0].message, "failure-2");
}

#[test]
fn component_and_service_errors_map_to_system_category() {
    let dir = TempDir::new().unwrap();
    let mut recorder = error_recorder(dir.path());

    let component = recorder.component("viewer", Some("render"), None);
    let service = recorder.service("storage", None, None);

    assert_eq!(component.category, Category::System);
    assert_eq!(component.message, "Component Error");
    assert_eq!(service.category, Category::System);
    assert_eq!(service.message, "Service Error");
}

#[test]
fn facade_statistics_reflect_recorded_errors() {
    let dir = TempDir::new().unwrap();
    let mut recorder = error_recorder(dir.path());

    recorder.http(500, "GET", "/a", None);
    recorder.navigation("/missing", None);

    let stats = recorder.statistics(24);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.errors, 2);
    assert_eq!(stats.warnings, 0);
}
