use serde::Serialize;
use thiserror::Error;

/// Longest trip accepted from the form.
pub const MAX_DAYS: u32 = 30;

/// Most attractions accepted per day.
pub const MAX_ATTRACTIONS_PER_DAY: u32 = 10;

/// Raw, unvalidated values read from the trip form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub city: String,
    pub days: String,
    pub attractions_per_day: String,
}

/// Rejections raised before a request is sent. The `Display` text is shown
/// to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a city to plan a trip.")]
    MissingCity,

    #[error("{field} must be a whole number from 1 to {max} (got \"{value}\").")]
    InvalidCount {
        field: &'static str,
        max: u32,
        value: String,
    },
}

/// Outbound planning request. Built once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripRequest {
    city: String,
    days: u32,
    attractions_per_day: u32,
}

impl TripRequest {
    /// Validate raw form values into a request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCity`] when the city is blank and
    /// [`ValidationError::InvalidCount`] when either count is not an integer
    /// between 1 and its maximum ([`MAX_DAYS`], [`MAX_ATTRACTIONS_PER_DAY`]).
    pub fn from_form(values: &FormValues) -> Result<Self, ValidationError> {
        let city = values.city.trim();
        if city.is_empty() {
            return Err(ValidationError::MissingCity);
        }
        let days = parse_count("Days", MAX_DAYS, &values.days)?;
        let attractions_per_day = parse_count(
            "Attractions per day",
            MAX_ATTRACTIONS_PER_DAY,
            &values.attractions_per_day,
        )?;
        Ok(Self {
            city: city.to_owned(),
            days,
            attractions_per_day,
        })
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn days(&self) -> u32 {
        self.days
    }

    #[must_use]
    pub fn attractions_per_day(&self) -> u32 {
        self.attractions_per_day
    }
}

fn parse_count(field: &'static str, max: u32, raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(ValidationError::InvalidCount {
            field,
            max,
            value: raw.to_owned(),
        }),
    }
}
