use super::{RemoteSink, SinkError};
use crate::domain::LogEntry;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub connection_timeout: Duration,
    pub user_agent: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9600/v1/logs".to_string(),
            timeout: Duration::from_secs(10),
            connection_timeout: Duration::from_secs(5),
            user_agent: format!("logos-event-log/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Posts one JSON-serialized entry per delivery.
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: Client,
    endpoint: Url,
    config: SinkConfig,
}

impl HttpSink {
    pub fn new(config: SinkConfig) -> Result<Self, SinkError> {
        let endpoint: Url = config.endpoint.parse().map_err(|e| {
            SinkError::InvalidConfiguration(format!(
                "Invalid endpoint URL '{}': {e}",
                config.endpoint
            ))
        })?;

        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connection_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                SinkError::InvalidConfiguration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

impl RemoteSink for HttpSink {
    async fn deliver(&self, entry: &LogEntry) -> Result<(), SinkError> {
        let response = timeout(
            self.config.timeout,
            self.client.post(self.endpoint.clone()).json(entry).send(),
        )
        .await
        .map_err(|_| SinkError::Timeout(format!("delivery to {} timed out", self.endpoint)))??;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(SinkError::Http {
                status: response.status().as_u16(),
            })
        }
    }
}
