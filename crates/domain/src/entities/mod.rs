//! Domain entities

mod station_reading;
mod weather;

pub use station_reading::StationReading;
pub use weather::{CurrentWeather, ForecastDay};
