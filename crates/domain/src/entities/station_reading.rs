//! A single station's metric reading

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, Metric, StationId};

/// One metric's latest value from one station
///
/// Immutable once fetched; a fresh set is produced every fetch cycle and
/// discarded on the next (only the latest reading per station is kept).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReading {
    /// Reporting station
    pub station_id: StationId,
    /// Station coordinates
    pub location: GeoLocation,
    /// Metric value in the metric's natural unit
    pub value: f64,
    /// Which metric this reading reports
    pub metric: Metric,
}

impl StationReading {
    /// Create a new reading
    #[must_use]
    pub const fn new(
        station_id: StationId,
        location: GeoLocation,
        value: f64,
        metric: Metric,
    ) -> Self {
        Self {
            station_id,
            location,
            value,
            metric,
        }
    }
}
