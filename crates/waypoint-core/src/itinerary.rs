//! Itinerary payload returned by the trip-planning service.
//!
//! Field names follow the service's snake_case JSON. Optional fields treat
//! absence, `null`, and empty values the same way: there is nothing to show.

use serde::{Deserialize, Deserializer, Serialize};

/// A single point of interest within a day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub category: String,
    pub estimated_duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub description: String,
}

impl Attraction {
    /// The address, if one was supplied and is non-empty.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().filter(|a| !a.is_empty())
    }
}

/// One day's attractions plus optional meal suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day_number: u32,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_suggestions: Option<Vec<String>>,
}

impl DayPlan {
    /// Meal suggestions in order; empty when absent.
    #[must_use]
    pub fn meal_suggestions(&self) -> &[String] {
        self.meal_suggestions.as_deref().unwrap_or_default()
    }
}

/// The full itinerary for one request.
///
/// `daily_plans` is `None` when the service omitted it or sent something
/// other than a JSON array. An array whose entries are not day plans is a
/// decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryResponse {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub days: u32,
    #[serde(
        default,
        deserialize_with = "sequence_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_plans: Option<Vec<DayPlan>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_tips: Option<String>,
}

impl ItineraryResponse {
    /// Overall tips, if present and non-empty.
    #[must_use]
    pub fn overall_tips(&self) -> Option<&str> {
        self.overall_tips.as_deref().filter(|t| !t.is_empty())
    }
}

fn sequence_or_absent<'de, D>(deserializer: D) -> Result<Option<Vec<DayPlan>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_array() {
        serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_full_payload() {
        let body = json!({
            "city": "Paris",
            "days": 1,
            "daily_plans": [{
                "day_number": 1,
                "attractions": [{
                    "name": "Louvre",
                    "category": "Museum",
                    "estimated_duration": "3 hours",
                    "address": "Rue de Rivoli",
                    "description": "Art museum"
                }],
                "meal_suggestions": ["Le Procope"]
            }],
            "overall_tips": "Buy a museum pass"
        });
        let itinerary: ItineraryResponse = serde_json::from_value(body).unwrap();
        let plans = itinerary.daily_plans.as_ref().expect("plans present");
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].attractions[0].address(), Some("Rue de Rivoli"));
        assert_eq!(plans[0].meal_suggestions(), ["Le Procope".to_string()]);
        assert_eq!(itinerary.overall_tips(), Some("Buy a museum pass"));
    }

    #[test]
    fn null_optionals_decode_as_absent() {
        let body = json!({
            "city": "Rome",
            "days": 1,
            "daily_plans": [{
                "day_number": 1,
                "attractions": [{
                    "name": "Colosseum",
                    "category": "Historical Site",
                    "estimated_duration": "2 hours",
                    "address": null,
                    "description": "Amphitheatre"
                }],
                "meal_suggestions": null
            }],
            "overall_tips": null
        });
        let itinerary: ItineraryResponse = serde_json::from_value(body).unwrap();
        let day = &itinerary.daily_plans.as_ref().unwrap()[0];
        assert!(day.attractions[0].address().is_none());
        assert!(day.meal_suggestions().is_empty());
        assert!(itinerary.overall_tips().is_none());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let attraction = Attraction {
            name: "Park".to_string(),
            category: "Outdoors".to_string(),
            estimated_duration: "1 hour".to_string(),
            address: Some(String::new()),
            description: "Green".to_string(),
        };
        assert!(attraction.address().is_none());
    }

    #[test]
    fn missing_daily_plans_is_none() {
        let itinerary: ItineraryResponse =
            serde_json::from_value(json!({ "city": "Oslo", "days": 2 })).unwrap();
        assert!(itinerary.daily_plans.is_none());
    }

    #[test]
    fn non_array_daily_plans_is_none() {
        let itinerary: ItineraryResponse =
            serde_json::from_value(json!({ "city": "Oslo", "days": 2, "daily_plans": "soon" }))
                .unwrap();
        assert!(itinerary.daily_plans.is_none());
    }

    #[test]
    fn malformed_day_plan_entry_is_an_error() {
        let result = serde_json::from_value::<ItineraryResponse>(json!({
            "daily_plans": [{ "day_number": "first" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn missing_attractions_decode_as_empty() {
        let itinerary: ItineraryResponse =
            serde_json::from_value(json!({ "daily_plans": [{ "day_number": 1 }] })).unwrap();
        assert!(itinerary.daily_plans.unwrap()[0].attractions.is_empty());
    }
}
