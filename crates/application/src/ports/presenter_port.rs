//! Presenter port
//!
//! Boundary contract for the UI collaborator that renders weather data.
//! The presenter is purely a sink: it consumes one `CurrentWeather` and
//! one 7-entry forecast per cycle and must not mutate pipeline state.

use domain::{CurrentWeather, ForecastDay, RecommendationTier};
#[cfg(test)]
use mockall::automock;

/// Port for rendering weather data to the user
#[cfg_attr(test, automock)]
pub trait PresenterPort: Send + Sync {
    /// Render the current-weather panel with its recommendation tier
    fn show_current(&self, weather: &CurrentWeather, tier: RecommendationTier);

    /// Render the 7-day outlook panel
    fn show_forecast(&self, days: &[ForecastDay]);

    /// Render an inline error panel in place of the forecast
    ///
    /// Current weather always degrades to fallback values, but the
    /// forecast panel surfaces its failure. Intentional asymmetry.
    fn show_forecast_unavailable(&self, reason: &str);
}
