//! HTTP client for the trip-planning service.
//!
//! Posts the trip form as `application/x-www-form-urlencoded` and interprets
//! the reply: a 2xx JSON object is an itinerary, anything else is surfaced as
//! a [`PlanError`] variant.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::Error as _;
use waypoint_core::{AppConfig, ItineraryResponse, TripRequest};

use crate::error::PlanError;

/// Source of itineraries for a trip request.
pub trait ItineraryPlanner {
    /// Plan a trip.
    ///
    /// # Errors
    ///
    /// Returns a [`PlanError`] when the plan could not be obtained.
    fn plan(
        &self,
        request: &TripRequest,
    ) -> impl Future<Output = Result<ItineraryResponse, PlanError>> + Send;
}

/// Planner backed by a remote HTTP endpoint.
///
/// Use [`HttpPlanner::from_config`] in the binary or
/// [`HttpPlanner::with_base_url`] to point at a mock server in tests.
pub struct HttpPlanner {
    client: Client,
    endpoint: Url,
}

impl HttpPlanner {
    /// Creates a planner from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`PlanError::InvalidUrl`] if the configured URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlanError> {
        Self::with_base_url(
            &config.planner_url,
            &config.plan_path,
            config.request_timeout(),
            &config.user_agent,
        )
    }

    /// Creates a planner posting to `{base_url}{plan_path}`.
    ///
    /// `timeout` of `None` lets the request wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`PlanError::InvalidUrl`] if the joined URL does not parse.
    pub fn with_base_url(
        base_url: &str,
        plan_path: &str,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, PlanError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let joined = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            plan_path.trim_start_matches('/')
        );
        let endpoint = Url::parse(&joined).map_err(|e| PlanError::InvalidUrl {
            url: joined.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Turns a status and raw body into an itinerary or a typed error.
    fn interpret(&self, status: StatusCode, body: &str) -> Result<ItineraryResponse, PlanError> {
        if !status.is_success() {
            return Err(PlanError::Application {
                status: status.as_u16(),
                message: error_message(body),
            });
        }

        let context = self.endpoint.to_string();
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|source| PlanError::MalformedPayload {
                context: context.clone(),
                source,
            })?;
        if !value.is_object() {
            return Err(PlanError::MalformedPayload {
                context,
                source: serde_json::Error::custom(format!(
                    "expected a JSON object, got {}",
                    json_type_name(&value)
                )),
            });
        }
        serde_json::from_value(value)
            .map_err(|source| PlanError::MalformedPayload { context, source })
    }
}

impl ItineraryPlanner for HttpPlanner {
    async fn plan(&self, request: &TripRequest) -> Result<ItineraryResponse, PlanError> {
        tracing::debug!(endpoint = %self.endpoint, "posting trip request");
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "planner responded");
        self.interpret(status, &body)
    }
}

/// Extracts a non-empty `error` string from a JSON error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
