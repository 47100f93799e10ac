//! Composition root.
//!
//! `LogHub` explicitly constructs the two store instances (generic events
//! and errors) with their collaborators and owns their lifecycle; producers
//! receive the facades by reference. The binary entry point is an offline
//! inspector over the persisted mirrors.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, LogLevel};

use crate::logger::{ErrorRecorder, EventLogger};
use crate::persist::JsonFileStore;
use crate::sink::{ConsoleSink, HttpSink, RemoteDispatcher, SinkConfig, SinkError};
use crate::store::{self, BoundedEventLog, LogStatistics, StoreError};
use thiserror::Error;

/// Mirror slot name for the generic event store.
pub const ADVANCED_SLOT: &str = "advanced-logs";
/// Mirror slot name for the error store.
pub const ERROR_SLOT: &str = "error-logs";

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("Logging error: {0}")]
    Logging(#[from] logging::LoggingError),
}

/// The two explicitly constructed log stores.
pub struct LogHub {
    pub events: EventLogger,
    pub errors: ErrorRecorder,
}

impl LogHub {
    /// Builds both stores with empty in-memory sequences.
    ///
    /// In production mode each store gets a remote dispatcher, which
    /// requires a running tokio runtime.
    pub fn init(config: &Config) -> Result<Self, InitError> {
        let events = build_store(config, ADVANCED_SLOT, config.advanced_cap)?;
        let errors = build_store(config, ERROR_SLOT, config.error_cap)?;

        Ok(Self {
            events: EventLogger::new(events),
            errors: ErrorRecorder::new(errors),
        })
    }

    /// Builds both stores and seeds them from their persisted mirrors,
    /// for offline inspection.
    pub fn open(config: &Config) -> Result<Self, InitError> {
        let mut events = build_store(config, ADVANCED_SLOT, config.advanced_cap)?;
        let mut errors = build_store(config, ERROR_SLOT, config.error_cap)?;
        events.restore();
        errors.restore();

        Ok(Self {
            events: EventLogger::new(events),
            errors: ErrorRecorder::new(errors),
        })
    }
}

fn build_store(config: &Config, slot: &str, cap: usize) -> Result<BoundedEventLog, InitError> {
    let mirror = JsonFileStore::new(&config.storage_dir, slot);
    let log = BoundedEventLog::new(cap, Box::new(ConsoleSink), Box::new(mirror))?;

    if config.production {
        let sink = HttpSink::new(SinkConfig {
            endpoint: config.endpoint.clone(),
            timeout: config.request_timeout,
            ..SinkConfig::default()
        })?;
        Ok(log.with_remote(RemoteDispatcher::spawn(sink)))
    } else {
        Ok(log)
    }
}

/// Binary entry point: inspects the persisted mirrors, reports trailing
/// 24-hour statistics, and optionally exports or clears both stores.
pub async fn main() -> anyhow::Result<()> {
    let cli = Config::from_args(std::env::args())?;
    let config = match &cli.config_file {
        Some(path) => {
            // The file supplies the store configuration; the inspector's own
            // action flags still come from the command line.
            let mut from_file = Config::from_file(path)?;
            from_file.clear = cli.clear;
            from_file.export_dir = cli.export_dir.clone().or(from_file.export_dir);
            from_file
        }
        None => cli,
    };
    logging::init(config.log_level)?;

    tracing::info!(storage_dir = %config.storage_dir.display(), "opening persisted mirrors");
    let mut hub = LogHub::open(&config)?;

    if config.clear {
        hub.events.clear();
        hub.errors.clear();
        tracing::info!("emptied both stores and removed their mirrors");
        return Ok(());
    }

    report(ADVANCED_SLOT, hub.events.len(), &hub.events.statistics(24));
    report(ERROR_SLOT, hub.errors.len(), &hub.errors.statistics(24));

    if let Some(dir) = &config.export_dir {
        std::fs::create_dir_all(dir)?;
        let today = chrono::Utc::now().date_naive();

        let events_path = dir.join(store::export_file_name(ADVANCED_SLOT, today));
        std::fs::write(&events_path, hub.events.export()?)?;

        let errors_path = dir.join(store::export_file_name(ERROR_SLOT, today));
        std::fs::write(&errors_path, hub.errors.export()?)?;

        tracing::info!(
            events = %events_path.display(),
            errors = %errors_path.display(),
            "wrote date-stamped exports"
        );
    }

    Ok(())
}

fn report(slot: &str, retained: usize, stats: &LogStatistics) {
    tracing::info!(
        slot,
        retained,
        total_24h = stats.total,
        errors = stats.errors,
        warnings = stats.warnings,
        performance = stats.performance,
        "store statistics"
    );
}
