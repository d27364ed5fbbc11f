//! Weather pipeline orchestration
//!
//! Fetcher -> Selector -> Classifier for the current-weather panel, and
//! Fetcher -> Synthesizer for the 7-day outlook. All four metric fetches
//! are issued concurrently and joined before classification. Everything
//! is rebuilt from scratch each cycle; nothing persists across cycles.

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{CurrentWeather, ForecastDay, GeoLocation, Metric, RecommendationTier, StationReading};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{PresenterPort, ReadingsPort};

use super::classifier::{classify, recommend};
use super::forecast::synthesize;
use super::station_selector::reading_for;

/// One render cycle's worth of weather data
///
/// Current weather always carries a displayable value (fallback
/// substitution happens upstream); the forecast keeps its failure so
/// the presenter can render an inline error panel instead.
#[derive(Debug, Clone)]
pub struct CleanupOutlook {
    /// Classified current weather at the site
    pub current: CurrentWeather,
    /// Cleanup-suitability tier for the current conditions
    pub tier: RecommendationTier,
    /// Synthesized 7-day outlook, or the reason it is unavailable
    pub forecast: Result<Vec<ForecastDay>, String>,
}

/// Orchestrates the weather pipeline for one cleanup site
pub struct WeatherService {
    readings: Arc<dyn ReadingsPort>,
    site: GeoLocation,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("site", &self.site)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new service for a site
    #[must_use]
    pub fn new(readings: Arc<dyn ReadingsPort>, site: GeoLocation) -> Self {
        Self { readings, site }
    }

    /// Run one full fetch/classify/synthesize cycle
    ///
    /// Current weather never fails: each metric degrades independently
    /// to its typical-climate fallback. The forecast anchor comes from
    /// the same cycle's temperature fetch and its failure is surfaced.
    #[instrument(skip(self), fields(site = %self.site))]
    pub async fn outlook(&self, today: NaiveDate, seed: u64) -> CleanupOutlook {
        let (temp, humidity, wind, rain) = tokio::join!(
            self.resolve(Metric::Temperature),
            self.resolve(Metric::Humidity),
            self.resolve(Metric::WindSpeed),
            self.resolve(Metric::Rainfall),
        );

        let forecast = match &temp {
            Ok(anchor) => Ok(synthesize(*anchor, today, seed)),
            Err(e) => {
                warn!(error = %e, "Forecast anchor unavailable");
                Err(e.to_string())
            },
        };

        let temperature = Self::or_fallback(Metric::Temperature, temp);
        let humidity = Self::or_fallback(Metric::Humidity, humidity);
        let wind_speed = Self::or_fallback(Metric::WindSpeed, wind);
        let rainfall = Self::or_fallback(Metric::Rainfall, rain);

        let current = CurrentWeather {
            temperature,
            humidity,
            wind_speed,
            rainfall,
            condition: classify(temperature, humidity, rainfall),
        };
        let tier = recommend(temperature, rainfall, wind_speed, humidity);

        debug!(summary = %current.summary(), tier = %tier, "Cycle complete");

        CleanupOutlook {
            current,
            tier,
            forecast,
        }
    }

    /// Render an outlook through a presenter
    ///
    /// The presenter is a pure sink; the forecast error panel asymmetry
    /// is applied here.
    pub fn present(outlook: &CleanupOutlook, presenter: &dyn PresenterPort) {
        presenter.show_current(&outlook.current, outlook.tier);
        match &outlook.forecast {
            Ok(days) => presenter.show_forecast(days),
            Err(reason) => presenter.show_forecast_unavailable(reason),
        }
    }

    /// Check whether the readings backend is reachable
    pub async fn is_available(&self) -> bool {
        self.readings.is_available().await
    }

    /// Fetch one metric and resolve the nearest station's value
    async fn resolve(&self, metric: Metric) -> Result<f64, ApplicationError> {
        let readings: Vec<StationReading> = self.readings.latest_readings(metric).await?;
        let value = reading_for(metric, &readings, &self.site)?;
        Ok(value)
    }

    /// Substitute the typical-climate fallback for a failed metric
    fn or_fallback(metric: Metric, resolved: Result<f64, ApplicationError>) -> f64 {
        match resolved {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    %metric,
                    fallback = metric.fallback_value(),
                    error = %e,
                    "Substituting typical-climate fallback"
                );
                metric.fallback_value()
            },
        }
    }
}
