//! Nearest-station selection

use domain::{DomainError, GeoLocation, Metric, StationId, StationReading};
use tracing::debug;

/// Pick the station nearest to the target coordinate
///
/// Great-circle distance via the haversine formula; on a tie the first
/// encountered minimum wins (the API returns stations in a fixed
/// order). An empty input set returns the fixed fallback identifier
/// rather than failing.
#[must_use]
pub fn nearest_station(readings: &[StationReading], target: &GeoLocation) -> StationId {
    let mut best: Option<(&StationReading, f64)> = None;

    for reading in readings {
        let distance = reading.location.distance_km(target);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((reading, distance));
        }
    }

    best.map_or_else(
        || {
            debug!("No stations in reading set, using fallback station");
            StationId::fallback()
        },
        |(reading, distance)| {
            debug!(
                station = %reading.station_id,
                distance_km = distance,
                "Selected nearest station"
            );
            reading.station_id.clone()
        },
    )
}

/// Resolve the metric value reported by the station nearest to the target
///
/// # Errors
///
/// Returns `DomainError::EmptyStationSet` when the reading set is empty;
/// the caller decides between fallback substitution (current weather)
/// and surfacing the error (forecast anchor).
pub fn reading_for(
    metric: Metric,
    readings: &[StationReading],
    target: &GeoLocation,
) -> Result<f64, DomainError> {
    if readings.is_empty() {
        return Err(DomainError::empty_station_set(metric));
    }

    let station = nearest_station(readings, target);
    let value = readings
        .iter()
        .find(|r| r.station_id == station)
        .map_or_else(|| metric.fallback_value(), |r| r.value);

    Ok(value.max(0.0))
}
