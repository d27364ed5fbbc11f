//! Weather condition label

use serde::{Deserialize, Serialize};

/// Discrete weather-state tag derived from current readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionLabel {
    /// Rainfall above 5 mm
    HeavyRain,
    /// Rainfall above 0.1 mm
    LightRain,
    /// Humidity above 85 %
    VeryHumid,
    /// Humidity above 70 %
    Humid,
    /// Temperature above 32 °C
    Hot,
    /// Temperature below 25 °C
    Cool,
    /// Default when no rule matches
    PartlyCloudy,
}

impl ConditionLabel {
    /// Human-readable description of the condition
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::HeavyRain => "Heavy Rain",
            Self::LightRain => "Light Rain",
            Self::VeryHumid => "Very Humid",
            Self::Humid => "Humid",
            Self::Hot => "Hot",
            Self::Cool => "Cool",
            Self::PartlyCloudy => "Partly Cloudy",
        }
    }

    /// Emoji representation of the condition
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::HeavyRain => "🌧️",
            Self::LightRain => "🌦️",
            Self::VeryHumid | Self::Humid => "🌫️",
            Self::Hot => "☀️",
            Self::Cool => "🌤️",
            Self::PartlyCloudy => "⛅",
        }
    }
}

impl std::fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
