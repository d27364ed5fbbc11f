//! Value objects for the weather pipeline

mod condition;
mod geo_location;
mod metric;
mod recommendation;
mod station_id;

pub use condition::ConditionLabel;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use metric::Metric;
pub use recommendation::RecommendationTier;
pub use station_id::StationId;
