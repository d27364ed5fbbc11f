//! Application configuration
//!
//! Layered configuration: built-in defaults, then an optional TOML
//! file, then `SHORECAST_`-prefixed environment variables.

use domain::GeoLocation;
use integration_realtime::RealtimeConfig;
use serde::{Deserialize, Serialize};

use crate::retry::RetryConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Cleanup site the weather report is anchored to
    #[serde(default)]
    pub site: SiteConfig,

    /// Realtime readings service configuration
    #[serde(default)]
    pub realtime: RealtimeConfig,

    /// Retry configuration for external service calls
    #[serde(default)]
    pub retry: RetryConfig,

    /// Forecast synthesis configuration
    #[serde(default)]
    pub forecast: ForecastConfig,
}

/// Cleanup site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name for the site
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Site latitude in decimal degrees
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Site longitude in decimal degrees
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

fn default_site_name() -> String {
    "Pasir Ris Beach".to_string()
}

const fn default_latitude() -> f64 {
    1.3814
}

const fn default_longitude() -> f64 {
    103.9556
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl SiteConfig {
    /// The site's coordinates as a validated location
    ///
    /// # Errors
    ///
    /// Returns an error if the configured latitude or longitude is out
    /// of range.
    pub fn location(&self) -> Result<GeoLocation, domain::InvalidCoordinates> {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

/// Forecast synthesis configuration
///
/// The outlook is always seven entries; only the seed is tunable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Fixed random seed; when unset, each run seeds from the date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from environment and an optional `shorecast` file
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder(config::File::with_name("shorecast").required(false))
    }

    /// Load configuration from a specific TOML file plus the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialized.
    pub fn load_from(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        Self::builder(config::File::from(path).required(true))
    }

    fn builder(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g. SHORECAST_SITE_NAME)
            .add_source(
                config::Environment::with_prefix("SHORECAST")
                    .separator("_")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
