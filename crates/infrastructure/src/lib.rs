//! Infrastructure layer
//!
//! Configuration loading, the retry policy for outbound calls, and the
//! adapter wiring the realtime readings client into the application's
//! ports.

pub mod adapters;
pub mod config;
pub mod retry;

pub use adapters::RealtimeReadingsAdapter;
pub use config::{AppConfig, ForecastConfig, SiteConfig};
pub use retry::{RetryConfig, RetryResult, Retryable, retry, with_retry};
