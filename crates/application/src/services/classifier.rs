//! Condition and recommendation rule chains
//!
//! Two independent classifiers over overlapping inputs. Each is an
//! ordered list of (predicate, result) pairs evaluated top to bottom,
//! first match wins; downstream messaging depends on the exact tier
//! boundaries, so thresholds and ordering must not be reordered.

use domain::{ConditionLabel, RecommendationTier};

/// Map current readings to a discrete condition label
///
/// Rainfall rules outrank humidity rules, which outrank temperature
/// rules, even when several would match.
#[must_use]
pub fn classify(temperature: f64, humidity: f64, rainfall: f64) -> ConditionLabel {
    let rules = [
        (rainfall > 5.0, ConditionLabel::HeavyRain),
        (rainfall > 0.1, ConditionLabel::LightRain),
        (humidity > 85.0, ConditionLabel::VeryHumid),
        (humidity > 70.0, ConditionLabel::Humid),
        (temperature > 32.0, ConditionLabel::Hot),
        (temperature < 25.0, ConditionLabel::Cool),
    ];

    rules
        .into_iter()
        .find_map(|(matched, label)| matched.then_some(label))
        .unwrap_or(ConditionLabel::PartlyCloudy)
}

/// Map current readings to a cleanup-suitability tier
#[must_use]
pub fn recommend(
    temperature: f64,
    rainfall: f64,
    wind_speed: f64,
    humidity: f64,
) -> RecommendationTier {
    let rules = [
        (rainfall > 3.0 || wind_speed > 25.0, RecommendationTier::Poor),
        (
            rainfall > 1.0 || temperature > 35.0 || humidity > 90.0,
            RecommendationTier::Fair,
        ),
        (
            temperature > 30.0 && humidity < 80.0,
            RecommendationTier::Good,
        ),
    ];

    rules
        .into_iter()
        .find_map(|(matched, tier)| matched.then_some(tier))
        .unwrap_or(RecommendationTier::Excellent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_branch_is_partly_cloudy() {
        assert_eq!(classify(30.0, 60.0, 0.0), ConditionLabel::PartlyCloudy);
    }

    #[test]
    fn hot_above_32() {
        assert_eq!(classify(36.0, 50.0, 0.0), ConditionLabel::Hot);
    }

    #[test]
    fn cool_below_25() {
        assert_eq!(classify(22.0, 60.0, 0.0), ConditionLabel::Cool);
    }

    #[test]
    fn humid_above_70() {
        assert_eq!(classify(28.0, 75.0, 0.0), ConditionLabel::Humid);
    }

    #[test]
    fn very_humid_above_85() {
        assert_eq!(classify(28.0, 88.0, 0.0), ConditionLabel::VeryHumid);
    }

    #[test]
    fn light_rain_above_tenth_of_mm() {
        assert_eq!(classify(28.0, 60.0, 0.5), ConditionLabel::LightRain);
    }

    #[test]
    fn rainfall_rule_outranks_humidity_and_temperature() {
        // Humidity 75 and temp 28 would match lower rules; rainfall wins.
        assert_eq!(classify(28.0, 75.0, 6.0), ConditionLabel::HeavyRain);
    }

    #[test]
    fn heavy_rain_boundary_is_exclusive() {
        assert_eq!(classify(28.0, 60.0, 5.0), ConditionLabel::LightRain);
        assert_eq!(classify(28.0, 60.0, 5.01), ConditionLabel::HeavyRain);
    }

    #[test]
    fn recommend_excellent_in_mild_conditions() {
        assert_eq!(
            recommend(29.0, 0.0, 10.0, 78.0),
            RecommendationTier::Excellent
        );
    }

    #[test]
    fn recommend_good_when_hot_but_dry() {
        assert_eq!(recommend(31.0, 0.0, 10.0, 75.0), RecommendationTier::Good);
    }

    #[test]
    fn recommend_fair_on_light_rain() {
        assert_eq!(recommend(29.0, 1.5, 10.0, 70.0), RecommendationTier::Fair);
    }

    #[test]
    fn recommend_fair_when_very_hot() {
        assert_eq!(recommend(36.0, 0.0, 10.0, 70.0), RecommendationTier::Fair);
    }

    #[test]
    fn recommend_poor_on_heavy_rain() {
        assert_eq!(recommend(29.0, 4.0, 10.0, 70.0), RecommendationTier::Poor);
    }

    #[test]
    fn recommend_poor_on_strong_wind() {
        assert_eq!(recommend(29.0, 0.0, 30.0, 70.0), RecommendationTier::Poor);
    }

    #[test]
    fn recommend_poor_outranks_fair() {
        // rainfall matches both the Poor and Fair predicates; Poor wins.
        assert_eq!(recommend(36.0, 4.0, 30.0, 95.0), RecommendationTier::Poor);
    }

    #[test]
    fn recommend_good_requires_low_humidity() {
        // temp > 30 but humidity at 80 misses the Good branch
        assert_eq!(
            recommend(31.0, 0.0, 10.0, 80.0),
            RecommendationTier::Excellent
        );
    }
}
