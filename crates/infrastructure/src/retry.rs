//! Generic retry logic with linear backoff
//!
//! Provides a configurable retry mechanism for fallible operations.
//! Backoff grows linearly with the attempt number: after the first
//! failed attempt the caller waits one base delay, after the second
//! two, and so on, capped at a maximum.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::retry::{RetryConfig, with_retry};
//!
//! let config = RetryConfig::default();
//! let result = with_retry(&config, || async {
//!     external_service.call().await
//! }).await;
//! ```

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for retry behavior with linear backoff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Base delay between attempts in milliseconds (default: 1000ms)
    #[serde(default = "default_base_delay")]
    pub base_delay_ms: u64,

    /// Maximum delay between attempts in milliseconds (default: 10000ms)
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Total number of attempts including the first (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

const fn default_base_delay() -> u64 {
    1000
}

const fn default_max_delay() -> u64 {
    10_000
}

const fn default_max_attempts() -> u32 {
    3
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: default_base_delay(),
            max_delay_ms: default_max_delay(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration with custom parameters
    #[must_use]
    pub const fn new(base_delay_ms: u64, max_delay_ms: u64, max_attempts: u32) -> Self {
        Self {
            base_delay_ms,
            max_delay_ms,
            max_attempts,
        }
    }

    /// Configuration suited to tests and low-latency probes
    #[must_use]
    pub const fn fast() -> Self {
        Self {
            base_delay_ms: 10,
            max_delay_ms: 100,
            max_attempts: 3,
        }
    }

    /// Calculate the delay after a given failed attempt (1-indexed)
    ///
    /// Linear backoff: delay = attempt * `base_delay`, capped at
    /// `max_delay`.
    #[must_use]
    pub fn delay_after_attempt(&self, attempt: u32) -> Duration {
        let delay = self.base_delay_ms.saturating_mul(u64::from(attempt));
        let capped = if delay > self.max_delay_ms {
            self.max_delay_ms
        } else {
            delay
        };
        Duration::from_millis(capped)
    }
}

/// Trait for errors that can be checked for retryability
pub trait Retryable {
    /// Returns true if this error is retryable
    fn is_retryable(&self) -> bool;
}

impl Retryable for application::ApplicationError {
    fn is_retryable(&self) -> bool {
        Self::is_retryable(self)
    }
}

impl Retryable for integration_realtime::RealtimeError {
    fn is_retryable(&self) -> bool {
        Self::is_retryable(self)
    }
}

/// Retry result containing either success or the last error
#[derive(Debug)]
pub struct RetryResult<T, E> {
    /// The result of the operation
    pub result: Result<T, E>,
    /// Number of attempts made (1 = no retries, 2 = one retry, etc.)
    pub attempts: u32,
    /// Total time spent including backoff
    pub total_duration: Duration,
}

impl<T, E> RetryResult<T, E> {
    /// Check if the operation succeeded
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Check if the operation failed
    #[must_use]
    pub const fn is_err(&self) -> bool {
        self.result.is_err()
    }

    /// Convert to standard Result, discarding metadata
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Execute an async operation with retry logic
///
/// Each attempt carries its own explicit attempt number; the loop never
/// shares a counter with the operation. Non-retryable errors abort
/// immediately.
#[allow(clippy::cast_possible_truncation)]
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> RetryResult<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    let start = std::time::Instant::now();
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(
                        attempt = attempt,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "Operation succeeded after retries"
                    );
                }
                return RetryResult {
                    result: Ok(value),
                    attempts: attempt,
                    total_duration: start.elapsed(),
                };
            },
            Err(err) => {
                if !err.is_retryable() {
                    debug!(
                        attempt = attempt,
                        error = %err,
                        "Operation failed with non-retryable error"
                    );
                    return RetryResult {
                        result: Err(err),
                        attempts: attempt,
                        total_duration: start.elapsed(),
                    };
                }

                if attempt >= max_attempts {
                    warn!(
                        attempt = attempt,
                        max_attempts = max_attempts,
                        error = %err,
                        "Operation failed after final attempt"
                    );
                    return RetryResult {
                        result: Err(err),
                        attempts: attempt,
                        total_duration: start.elapsed(),
                    };
                }

                let delay = config.delay_after_attempt(attempt);
                warn!(
                    attempt = attempt,
                    max_attempts = max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Operation failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            },
        }
    }
}

/// Execute an async operation with retry logic, returning only the Result
///
/// This is a convenience wrapper around `with_retry` that discards metadata.
pub async fn retry<F, Fut, T, E>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    with_retry(config, operation).await.into_result()
}
