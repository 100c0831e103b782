//! Client side of the trip-planning flow: submit a trip form, call the
//! planner, and render the itinerary into injected UI handles.

pub mod client;
pub mod error;
pub mod handler;
pub mod simulated;
pub mod ui;

pub use client::{HttpPlanner, ItineraryPlanner};
pub use error::{FailureKind, PlanError};
pub use handler::{
    ItineraryRequestHandler, SubmitEvent, SubmitOutcome, FALLBACK_ERROR_MESSAGE,
    GENERIC_FAULT_MESSAGE,
};
pub use simulated::SimulatedPlanner;
pub use ui::{BufferedContent, ContentHandle, FormHandle, StaticForm, UiHandles, VisibilityHandle};
