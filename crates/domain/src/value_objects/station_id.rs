//! Station identifier value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an environmental monitoring station
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

/// Station used when a fetch cycle returns no stations at all.
///
/// Pasir Ris area station; selection must degrade to this identifier
/// rather than fail.
const FALLBACK_STATION_ID: &str = "S94";

impl StationId {
    /// Create a new station identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The fixed fallback identifier for an empty station set
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_STATION_ID.to_string())
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
