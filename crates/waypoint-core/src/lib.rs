mod app_config;
mod config;
mod itinerary;
mod trip_request;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use itinerary::{Attraction, DayPlan, ItineraryResponse};
pub use trip_request::{
    FormValues, TripRequest, ValidationError, MAX_ATTRACTIONS_PER_DAY, MAX_DAYS,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every `WAYPOINT_*` variable has a default, so only a present but
    /// unparseable value is an error.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
