//! Realtime readings HTTP client
//!
//! Thin client over the realtime environment API. One endpoint per
//! metric, status triage into typed errors, no retry here (the caller
//! owns the retry policy).

use async_trait::async_trait;
use domain::{Metric, StationReading};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ReadingsEnvelope;

/// Realtime client errors
#[derive(Debug, Error)]
pub enum RealtimeError {
    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the readings service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl RealtimeError {
    /// Whether a retry has a chance of succeeding
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RequestFailed(_) | Self::ServiceUnavailable(_) | Self::RateLimitExceeded
        )
    }
}

/// Realtime readings service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// API base URL (default: <https://api.data.gov.sg/v1/environment>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.data.gov.sg/v1/environment".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for fetching the latest per-station readings
#[async_trait]
pub trait RealtimeApi: Send + Sync {
    /// Fetch the most recent readings for a metric, one per station
    async fn latest_readings(&self, metric: Metric) -> Result<Vec<StationReading>, RealtimeError>;

    /// Check if the readings service is reachable
    async fn is_healthy(&self) -> bool;
}

/// HTTP client implementation over reqwest
#[derive(Debug)]
pub struct RealtimeClient {
    client: Client,
    config: RealtimeConfig,
}

impl RealtimeClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: RealtimeConfig) -> Result<Self, RealtimeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RealtimeError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, RealtimeError> {
        Self::new(RealtimeConfig::default())
    }

    fn metric_url(&self, metric: Metric) -> String {
        format!("{}/{}", self.config.base_url, metric.endpoint_path())
    }
}

#[async_trait]
impl RealtimeApi for RealtimeClient {
    #[instrument(skip(self), fields(%metric))]
    async fn latest_readings(&self, metric: Metric) -> Result<Vec<StationReading>, RealtimeError> {
        let url = self.metric_url(metric);
        debug!(url = %url, "Fetching latest readings");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RealtimeError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RealtimeError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(RealtimeError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(RealtimeError::RequestFailed(format!("HTTP {status}")));
        }

        let envelope: ReadingsEnvelope = response
            .json()
            .await
            .map_err(|e| RealtimeError::ParseError(e.to_string()))?;

        let readings = envelope.into_readings(metric);
        debug!(count = readings.len(), "Readings normalized");
        Ok(readings)
    }

    async fn is_healthy(&self) -> bool {
        self.latest_readings(Metric::Temperature).await.is_ok()
    }
}
