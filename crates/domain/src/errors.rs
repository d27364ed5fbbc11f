//! Domain-level errors

use thiserror::Error;

use crate::value_objects::Metric;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A fetch cycle produced no readings for a metric
    #[error("No {metric} readings available from any station")]
    EmptyStationSet {
        /// The metric whose reading set was empty
        metric: Metric,
    },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an empty-station-set error for a metric
    pub const fn empty_station_set(metric: Metric) -> Self {
        Self::EmptyStationSet { metric }
    }
}
