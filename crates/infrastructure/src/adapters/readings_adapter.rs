//! Readings port adapter over the realtime client
//!
//! Wraps a [`RealtimeApi`] client with the retry policy and maps its
//! errors into application errors. Parse failures are not retried; a
//! malformed body will not get better on the next attempt.

use async_trait::async_trait;
use tracing::{debug, instrument};

use application::{ApplicationError, ReadingsPort};
use domain::{Metric, StationReading};
use integration_realtime::{RealtimeApi, RealtimeError};

use crate::retry::{RetryConfig, with_retry};

/// [`ReadingsPort`] implementation backed by the realtime readings API
pub struct RealtimeReadingsAdapter<C> {
    client: C,
    retry: RetryConfig,
}

impl<C> RealtimeReadingsAdapter<C> {
    /// Create a new adapter with the given retry policy
    pub const fn new(client: C, retry: RetryConfig) -> Self {
        Self { client, retry }
    }
}

impl<C> std::fmt::Debug for RealtimeReadingsAdapter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeReadingsAdapter")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

fn map_realtime_error(err: RealtimeError) -> ApplicationError {
    match err {
        RealtimeError::ParseError(msg) => ApplicationError::DataShape(msg),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl<C: RealtimeApi> ReadingsPort for RealtimeReadingsAdapter<C> {
    #[instrument(skip(self), fields(%metric))]
    #[allow(clippy::cast_possible_truncation)]
    async fn latest_readings(
        &self,
        metric: Metric,
    ) -> Result<Vec<StationReading>, ApplicationError> {
        let outcome = with_retry(&self.retry, || self.client.latest_readings(metric)).await;
        if outcome.attempts > 1 {
            debug!(
                attempts = outcome.attempts,
                duration_ms = outcome.total_duration.as_millis() as u64,
                "Readings fetch settled after retries"
            );
        }
        outcome.into_result().map_err(map_realtime_error)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
