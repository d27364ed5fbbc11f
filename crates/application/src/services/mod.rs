//! Application services

mod classifier;
mod forecast;
mod station_selector;
mod weather_service;

pub use classifier::{classify, recommend};
pub use forecast::{FORECAST_DAYS, synthesize};
pub use station_selector::{nearest_station, reading_for};
pub use weather_service::{CleanupOutlook, WeatherService};
