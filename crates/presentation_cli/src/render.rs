//! Console presenter
//!
//! Renders the weather panels as plain text. The presenter is a pure
//! sink: it never fetches, classifies or mutates anything, it only
//! formats what it is handed.

use application::PresenterPort;
use domain::{CurrentWeather, ForecastDay, RecommendationTier};

/// Text-panel presenter writing to stdout
#[derive(Debug, Clone)]
pub struct ConsolePresenter {
    site_name: String,
}

impl ConsolePresenter {
    /// Create a presenter for the named cleanup site
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }

    fn current_panel(&self, weather: &CurrentWeather, tier: RecommendationTier) -> String {
        [
            format!("🏖️  {}", self.site_name),
            weather.summary(),
            format!("{} {}: {}", tier.emoji(), tier.headline(), tier.message()),
        ]
        .join("\n")
    }

    fn forecast_panel(days: &[ForecastDay]) -> String {
        let mut lines = Vec::with_capacity(days.len() + 1);
        lines.push(format!("📅 {}-Day Outlook", days.len()));
        lines.extend(days.iter().map(ForecastDay::summary));
        lines.join("\n")
    }

    fn unavailable_panel(reason: &str) -> String {
        [
            "📅 Outlook".to_string(),
            format!("⚠️  Forecast unavailable: {reason}"),
            "   Check back once the readings service recovers.".to_string(),
        ]
        .join("\n")
    }
}

#[allow(clippy::print_stdout)]
impl PresenterPort for ConsolePresenter {
    fn show_current(&self, weather: &CurrentWeather, tier: RecommendationTier) {
        println!("{}\n", self.current_panel(weather, tier));
    }

    fn show_forecast(&self, days: &[ForecastDay]) {
        println!("{}", Self::forecast_panel(days));
    }

    fn show_forecast_unavailable(&self, reason: &str) {
        println!("{}", Self::unavailable_panel(reason));
    }
}
