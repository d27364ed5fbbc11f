//! Station readings port
//!
//! Defines the interface for fetching per-metric station reading sets.

use async_trait::async_trait;
use domain::{Metric, StationReading};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for retrieving the latest station readings for a metric
///
/// One call yields one reading set: the latest value of the metric from
/// every reporting station, with station coordinates attached. Retry
/// policy lives behind this port; callers see only the final outcome.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReadingsPort: Send + Sync {
    /// Fetch the latest readings for a single metric
    async fn latest_readings(
        &self,
        metric: Metric,
    ) -> Result<Vec<StationReading>, ApplicationError>;

    /// Check if the readings service is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ReadingsPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ReadingsPort>();
    }
}
