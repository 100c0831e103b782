//! The submit → request → render cycle.
//!
//! One cycle per submission. A submission that arrives while a cycle is in
//! flight is ignored. The loading indicator is hidden when the cycle ends on
//! any path, including the cycle future being dropped mid-request.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Instrument as _;
use uuid::Uuid;
use waypoint_core::{FormValues, TripRequest, ValidationError};
use waypoint_render::{error_alert, render_itinerary};

use crate::client::ItineraryPlanner;
use crate::error::{FailureKind, PlanError};
use crate::ui::{UiHandles, VisibilityHandle};

/// Shown when the planner rejected the request without an explanation.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while planning your trip.";

/// Shown for transport faults and malformed payloads.
pub const GENERIC_FAULT_MESSAGE: &str =
    "An error occurred while planning your trip. Please try again.";

/// A form submission. The handler always cancels the default action.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Which branch a submission took.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Itinerary rendered with this many day sections.
    Rendered { day_count: usize },
    /// Payload carried no day plans; the no-data notice was rendered.
    NoData,
    /// An error message was rendered.
    Failed(FailureKind),
    /// The form was rejected before any request.
    Invalid(ValidationError),
    /// Another submission was still in flight.
    Ignored,
}

impl SubmitOutcome {
    /// `true` when the planner produced a usable response.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered { .. } | SubmitOutcome::NoData)
    }
}

/// Owns the request/response/render cycle for one trip form.
pub struct ItineraryRequestHandler<P> {
    planner: P,
    ui: UiHandles,
    in_flight: AtomicBool,
}

impl<P: ItineraryPlanner> ItineraryRequestHandler<P> {
    pub fn new(planner: P, ui: UiHandles) -> Self {
        Self {
            planner,
            ui,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Handle a form submission.
    ///
    /// Errors never escape: every failure is rendered into the content region
    /// and reported through the returned [`SubmitOutcome`].
    pub async fn on_submit(&self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let Some(_cycle) = CycleGuard::acquire(&self.in_flight) else {
            tracing::debug!("submission ignored: another request is in flight");
            return SubmitOutcome::Ignored;
        };

        let values = self.ui.form.values();
        let span = tracing::info_span!(
            "submission",
            submission_id = %Uuid::new_v4(),
            city = %values.city.trim(),
        );
        self.run_cycle(values).instrument(span).await
    }

    async fn run_cycle(&self, values: FormValues) -> SubmitOutcome {
        let request = match TripRequest::from_form(&values) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(error = %err, "trip form rejected");
                self.ui.results.set_visible(true);
                self.ui.content.replace(error_alert(&err.to_string()).to_html());
                // Never shown on this path, but every cycle ends hidden.
                self.ui.loading.set_visible(false);
                return SubmitOutcome::Invalid(err);
            }
        };

        let _loading = LoadingGuard::show(self.ui.loading.as_ref());
        self.ui.results.set_visible(true);
        self.ui.content.replace(String::new());

        tracing::info!(
            days = request.days(),
            attractions_per_day = request.attractions_per_day(),
            "requesting itinerary"
        );

        let (markup, outcome) = match self.planner.plan(&request).await {
            Ok(itinerary) => {
                let outcome = match itinerary.daily_plans.as_ref() {
                    Some(plans) => {
                        if u32::try_from(plans.len()).ok() != Some(request.days()) {
                            tracing::debug!(
                                requested = request.days(),
                                received = plans.len(),
                                "day plan count differs from request"
                            );
                        }
                        SubmitOutcome::Rendered {
                            day_count: plans.len(),
                        }
                    }
                    None => SubmitOutcome::NoData,
                };
                (render_itinerary(&itinerary), outcome)
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = ?err.kind(), "itinerary request failed");
                (error_alert(failure_message(&err)), SubmitOutcome::Failed(err.kind()))
            }
        };

        self.ui.content.replace(markup.to_html());
        tracing::info!(outcome = ?outcome, "submission complete");
        outcome
    }
}

/// Message rendered for a planner failure.
fn failure_message(err: &PlanError) -> &str {
    match err {
        PlanError::Application {
            message: Some(message),
            ..
        } => message.as_str(),
        PlanError::Application { message: None, .. } => FALLBACK_ERROR_MESSAGE,
        PlanError::Http(_) | PlanError::MalformedPayload { .. } | PlanError::InvalidUrl { .. } => {
            GENERIC_FAULT_MESSAGE
        }
    }
}

/// Marks a cycle in flight; cleared on drop.
struct CycleGuard<'a>(&'a AtomicBool);

impl<'a> CycleGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Shows the loading indicator; hides it on drop.
struct LoadingGuard<'a>(&'a dyn VisibilityHandle);

impl<'a> LoadingGuard<'a> {
    fn show(indicator: &'a dyn VisibilityHandle) -> Self {
        indicator.set_visible(true);
        Self(indicator)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set_visible(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_prefers_server_text() {
        let err = PlanError::Application {
            status: 404,
            message: Some("City not found".to_owned()),
        };
        assert_eq!(failure_message(&err), "City not found");
    }

    #[test]
    fn failure_message_falls_back_without_server_text() {
        let err = PlanError::Application {
            status: 500,
            message: None,
        };
        assert_eq!(failure_message(&err), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn failure_message_is_generic_for_malformed_payload() {
        let source = serde_json::from_str::<()>("{").unwrap_err();
        let err = PlanError::MalformedPayload {
            context: "test".to_owned(),
            source,
        };
        assert_eq!(failure_message(&err), GENERIC_FAULT_MESSAGE);
    }

    #[test]
    fn cycle_guard_is_exclusive_until_dropped() {
        let flag = AtomicBool::new(false);
        let first = CycleGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(CycleGuard::acquire(&flag).is_none());
        drop(first);
        assert!(CycleGuard::acquire(&flag).is_some());
    }

    #[test]
    fn submit_outcome_success_classification() {
        assert!(SubmitOutcome::Rendered { day_count: 2 }.is_success());
        assert!(SubmitOutcome::NoData.is_success());
        assert!(!SubmitOutcome::Failed(FailureKind::Transport).is_success());
        assert!(!SubmitOutcome::Ignored.is_success());
    }
}
