//! 7-day outlook synthesizer
//!
//! This is a simulation, not a real forecast source: no forecast API is
//! consulted for days beyond today. Each day's high is a smooth
//! pseudo-periodic function of the day index anchored to the current
//! temperature, plus bounded jitter from a seeded generator; humidity
//! and rain chance are sampled independently within fixed ranges.

use chrono::{Days, NaiveDate};
use domain::{ConditionLabel, ForecastDay};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::classifier::classify;

/// Number of entries in one outlook
pub const FORECAST_DAYS: usize = 7;

/// Amplitude of the sinusoidal day-to-day swing in °C
const SWING_AMPLITUDE: f64 = 2.5;

/// Synthesize a 7-entry outlook anchored to the current temperature
///
/// The same seed and anchor always produce the same sequence. Day 0 is
/// labeled "Today", day 1 "Tomorrow", the rest short weekday names.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn synthesize(anchor_temp: f64, start_date: NaiveDate, seed: u64) -> Vec<ForecastDay> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..FORECAST_DAYS)
        .map(|day| {
            let date = start_date
                .checked_add_days(Days::new(day as u64))
                .unwrap_or(start_date);

            let swing = (day as f64 * 0.9).sin() * SWING_AMPLITUDE;
            let jitter: f64 = rng.random_range(-1.5..=1.5);
            let high = (anchor_temp + swing + jitter).max(0.0);
            let low = (high - rng.random_range(4.0..=7.0)).max(0.0);

            let humidity: u8 = rng.random_range(70..=90);
            let rain_chance: u8 = rng.random_range(20..=60);

            ForecastDay {
                label: day_label(day, date),
                date,
                high,
                low,
                condition: day_condition(high, humidity, rain_chance),
                humidity,
                rain_chance,
            }
        })
        .collect()
}

/// Display label for a day offset
///
/// Days beyond tomorrow use English weekday abbreviations (`Mon`..`Sun`);
/// the labels are not localized.
fn day_label(day: usize, date: NaiveDate) -> String {
    match day {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a").to_string(),
    }
}

/// Condition for a synthesized day
///
/// A rain chance above 50 % reads as light rain; otherwise the sampled
/// humidity and high run through the current-weather rule chain.
fn day_condition(high: f64, humidity: u8, rain_chance: u8) -> ConditionLabel {
    if rain_chance > 50 {
        ConditionLabel::LightRain
    } else {
        classify(high, f64::from(humidity), 0.0)
    }
}
