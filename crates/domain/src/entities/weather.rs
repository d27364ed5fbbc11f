//! Current weather and forecast-day entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::ConditionLabel;

/// Current weather at the cleanup site
///
/// Derived from one fetch cycle's readings and recomputed every cycle;
/// no history is retained. All values are non-negative after fallback
/// substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Rainfall in mm
    pub rainfall: f64,
    /// Classified condition
    pub condition: ConditionLabel,
}

impl CurrentWeather {
    /// Formatted one-line summary of current conditions
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} {:.1}°C, humidity {:.0}%, wind {:.1} km/h, rain {:.1} mm",
            self.condition.emoji(),
            self.condition.description(),
            self.temperature,
            self.humidity,
            self.wind_speed,
            self.rainfall
        )
    }
}

/// One synthesized entry in the 7-day outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Display label: "Today", "Tomorrow", then short weekday names
    pub label: String,
    /// Calendar date of this entry
    pub date: NaiveDate,
    /// High temperature in °C
    pub high: f64,
    /// Low temperature in °C
    pub low: f64,
    /// Expected condition
    pub condition: ConditionLabel,
    /// Humidity in percent, within [70, 90]
    pub humidity: u8,
    /// Rain chance in percent, within [20, 60]
    pub rain_chance: u8,
}

impl ForecastDay {
    /// Formatted one-line summary of this forecast entry
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{:<9} {} {:.0}°C/{:.0}°C, humidity {}%, rain {}%",
            self.label,
            self.condition.emoji(),
            self.high,
            self.low,
            self.humidity,
            self.rain_chance
        )
    }
}
