//! Offline planner producing placeholder itineraries.

use std::time::Duration;

use waypoint_core::{Attraction, DayPlan, ItineraryResponse, TripRequest};

use crate::client::ItineraryPlanner;
use crate::error::PlanError;

const CATEGORIES: &[&str] = &["Museum", "Historical Site", "Park", "Landmark", "Market"];
const MEALS: &[&str] = &["breakfast", "lunch", "dinner"];

/// Deterministic planner for demos and tests. Never fails.
#[derive(Debug, Clone, Default)]
pub struct SimulatedPlanner {
    latency: Duration,
}

impl SimulatedPlanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay each response by `latency`.
    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Build the itinerary without waiting.
    #[must_use]
    pub fn itinerary_for(request: &TripRequest) -> ItineraryResponse {
        let city = request.city();
        let per_day = request.attractions_per_day();
        let daily_plans = (1..=request.days())
            .map(|day| DayPlan {
                day_number: day,
                attractions: (1..=per_day)
                    .map(|slot| {
                        // Counts are capped by form validation, so this stays small.
                        let index = u64::from(day - 1) * u64::from(per_day) + u64::from(slot);
                        let category = CATEGORIES[usize::try_from(index - 1)
                            .map_or(0, |i| i % CATEGORIES.len())];
                        Attraction {
                            name: format!("{city} {category} #{index}"),
                            category: category.to_owned(),
                            estimated_duration: "2 hours".to_owned(),
                            address: (slot % 2 == 1).then(|| format!("{index} Main Street, {city}")),
                            description: format!("A popular {} in {city}.", category.to_lowercase()),
                        }
                    })
                    .collect(),
                meal_suggestions: Some(
                    MEALS
                        .iter()
                        .map(|meal| format!("Local {meal} spot in {city}"))
                        .collect(),
                ),
            })
            .collect();

        ItineraryResponse {
            city: city.to_owned(),
            days: request.days(),
            daily_plans: Some(daily_plans),
            overall_tips: Some(format!(
                "Check opening hours in {city} before you go and book popular sights ahead."
            )),
        }
    }
}

impl ItineraryPlanner for SimulatedPlanner {
    async fn plan(&self, request: &TripRequest) -> Result<ItineraryResponse, PlanError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        tracing::debug!(city = request.city(), "returning simulated itinerary");
        Ok(Self::itinerary_for(request))
    }
}
