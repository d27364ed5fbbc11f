//! Wire types for the realtime readings API
//!
//! The service has shipped two response envelopes over its lifetime:
//! the legacy shape (`metadata.stations` + `items[].readings`) and the
//! v2 shape (everything nested under `data`, camelCase station ids).
//! Both deserialize into [`ReadingsEnvelope`] and normalize to domain
//! [`StationReading`]s.

use std::collections::HashMap;

use domain::{GeoLocation, Metric, StationId, StationReading};
use serde::Deserialize;
use tracing::warn;

/// Response envelope, either legacy or v2 shape
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReadingsEnvelope {
    /// Legacy shape: top-level `metadata` and `items`
    Legacy(LegacyEnvelope),
    /// v2 shape: everything under a top-level `data` object
    V2(V2Envelope),
}

/// Legacy response body
#[derive(Debug, Deserialize)]
pub struct LegacyEnvelope {
    /// Station catalogue for this metric
    pub metadata: StationMetadata,
    /// Reading batches, most recent first
    #[serde(default)]
    pub items: Vec<ReadingItem>,
}

/// Station catalogue wrapper
#[derive(Debug, Default, Deserialize)]
pub struct StationMetadata {
    /// Stations reporting this metric
    #[serde(default)]
    pub stations: Vec<Station>,
}

/// A physical weather station
#[derive(Debug, Deserialize)]
pub struct Station {
    /// Station identifier, e.g. "S117"
    pub id: String,
    /// Human-readable station name
    #[serde(default)]
    pub name: Option<String>,
    /// Station coordinates
    pub location: Coordinates,
}

/// Raw latitude/longitude pair
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One timestamped batch of readings
#[derive(Debug, Deserialize)]
pub struct ReadingItem {
    /// Observation timestamp (RFC 3339)
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Per-station values in this batch
    #[serde(default)]
    pub readings: Vec<RawReading>,
}

/// A single station's value in a legacy batch
#[derive(Debug, Deserialize)]
pub struct RawReading {
    pub station_id: String,
    pub value: f64,
}

/// v2 response body
#[derive(Debug, Deserialize)]
pub struct V2Envelope {
    /// Payload wrapper
    pub data: V2Data,
}

/// v2 payload
#[derive(Debug, Deserialize)]
pub struct V2Data {
    /// Stations reporting this metric
    #[serde(default)]
    pub stations: Vec<Station>,
    /// Reading batches, most recent first
    #[serde(default)]
    pub readings: Vec<V2ReadingItem>,
}

/// One timestamped batch of readings (v2)
#[derive(Debug, Deserialize)]
pub struct V2ReadingItem {
    /// Observation timestamp (RFC 3339)
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Per-station values in this batch
    #[serde(default)]
    pub data: Vec<V2RawReading>,
}

/// A single station's value in a v2 batch
#[derive(Debug, Deserialize)]
pub struct V2RawReading {
    #[serde(rename = "stationId")]
    pub station_id: String,
    pub value: f64,
}

impl ReadingsEnvelope {
    /// Normalize either envelope shape into domain readings
    ///
    /// Only the first (most recent) batch is used. Readings from
    /// stations missing from the catalogue, and non-finite values, are
    /// skipped with a warning rather than failing the whole batch.
    #[must_use]
    pub fn into_readings(self, metric: Metric) -> Vec<StationReading> {
        let (stations, raw) = match self {
            Self::Legacy(body) => {
                let raw = body
                    .items
                    .into_iter()
                    .next()
                    .map(|item| {
                        item.readings
                            .into_iter()
                            .map(|r| (r.station_id, r.value))
                            .collect()
                    })
                    .unwrap_or_default();
                (body.metadata.stations, raw)
            },
            Self::V2(body) => {
                let raw = body
                    .data
                    .readings
                    .into_iter()
                    .next()
                    .map(|item| {
                        item.data
                            .into_iter()
                            .map(|r| (r.station_id, r.value))
                            .collect()
                    })
                    .unwrap_or_default();
                (body.data.stations, raw)
            },
        };

        let catalogue = station_catalogue(&stations);
        normalize(metric, &catalogue, raw)
    }
}

/// Build an id -> location map, dropping stations with bad coordinates
fn station_catalogue(stations: &[Station]) -> HashMap<&str, GeoLocation> {
    let mut catalogue = HashMap::with_capacity(stations.len());
    for station in stations {
        match GeoLocation::new(station.location.latitude, station.location.longitude) {
            Ok(location) => {
                catalogue.insert(station.id.as_str(), location);
            },
            Err(e) => {
                warn!(
                    station = %station.id,
                    error = %e,
                    "Skipping station with invalid coordinates"
                );
            },
        }
    }
    catalogue
}

fn normalize(
    metric: Metric,
    catalogue: &HashMap<&str, GeoLocation>,
    raw: Vec<(String, f64)>,
) -> Vec<StationReading> {
    let mut readings = Vec::with_capacity(raw.len());
    for (station_id, value) in raw {
        let Some(location) = catalogue.get(station_id.as_str()) else {
            warn!(station = %station_id, %metric, "Reading from uncatalogued station, skipping");
            continue;
        };
        if !value.is_finite() {
            warn!(station = %station_id, %metric, "Non-finite reading value, skipping");
            continue;
        }
        readings.push(StationReading::new(
            StationId::new(station_id),
            *location,
            value,
            metric,
        ));
    }
    readings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_body() -> &'static str {
        r#"{
            "metadata": {
                "stations": [
                    {"id": "S117", "name": "Banyan Road", "location": {"latitude": 1.256, "longitude": 103.679}},
                    {"id": "S50", "name": "Clementi Road", "location": {"latitude": 1.3337, "longitude": 103.7768}}
                ]
            },
            "items": [
                {
                    "timestamp": "2026-08-31T14:00:00+08:00",
                    "readings": [
                        {"station_id": "S117", "value": 29.4},
                        {"station_id": "S50", "value": 30.1}
                    ]
                },
                {
                    "timestamp": "2026-08-31T13:00:00+08:00",
                    "readings": [
                        {"station_id": "S117", "value": 99.0}
                    ]
                }
            ]
        }"#
    }

    fn v2_body() -> &'static str {
        r#"{
            "code": 0,
            "data": {
                "stations": [
                    {"id": "S117", "name": "Banyan Road", "location": {"latitude": 1.256, "longitude": 103.679}}
                ],
                "readings": [
                    {
                        "timestamp": "2026-08-31T14:00:00+08:00",
                        "data": [
                            {"stationId": "S117", "value": 28.7}
                        ]
                    }
                ]
            }
        }"#
    }

    #[test]
    fn legacy_envelope_normalizes_first_batch_only() {
        let envelope: ReadingsEnvelope =
            serde_json::from_str(legacy_body()).expect("valid legacy body");
        let readings = envelope.into_readings(Metric::Temperature);

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].station_id.as_str(), "S117");
        assert!((readings[0].value - 29.4).abs() < f64::EPSILON);
        // The stale 13:00 batch with value 99.0 is ignored.
        assert!(readings.iter().all(|r| r.value < 31.0));
    }

    #[test]
    fn v2_envelope_normalizes_camel_case_ids() {
        let envelope: ReadingsEnvelope = serde_json::from_str(v2_body()).expect("valid v2 body");
        let readings = envelope.into_readings(Metric::Temperature);

        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].station_id.as_str(), "S117");
        assert!((readings[0].value - 28.7).abs() < f64::EPSILON);
    }

    #[test]
    fn uncatalogued_station_is_skipped() {
        let body = r#"{
            "metadata": {"stations": [{"id": "S117", "location": {"latitude": 1.256, "longitude": 103.679}}]},
            "items": [{"readings": [
                {"station_id": "S117", "value": 1.2},
                {"station_id": "S999", "value": 5.0}
            ]}]
        }"#;
        let envelope: ReadingsEnvelope = serde_json::from_str(body).expect("valid body");
        let readings = envelope.into_readings(Metric::Rainfall);

        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].station_id.as_str(), "S117");
    }

    #[test]
    fn invalid_station_coordinates_are_skipped() {
        let body = r#"{
            "metadata": {"stations": [{"id": "S1", "location": {"latitude": 95.0, "longitude": 103.0}}]},
            "items": [{"readings": [{"station_id": "S1", "value": 3.0}]}]
        }"#;
        let envelope: ReadingsEnvelope = serde_json::from_str(body).expect("valid body");
        assert!(envelope.into_readings(Metric::WindSpeed).is_empty());
    }

    #[test]
    fn empty_items_yield_no_readings() {
        let body = r#"{"metadata": {"stations": []}, "items": []}"#;
        let envelope: ReadingsEnvelope = serde_json::from_str(body).expect("valid body");
        assert!(envelope.into_readings(Metric::Humidity).is_empty());
    }
}
