use thiserror::Error;

/// Errors returned by an itinerary planner.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The planner answered with a non-success status.
    #[error(
        "planner returned HTTP {status}: {}",
        .message.as_deref().unwrap_or("no error message")
    )]
    Application {
        status: u16,
        message: Option<String>,
    },

    /// A success response whose body is not a usable itinerary.
    #[error("malformed itinerary payload from {context}: {source}")]
    MalformedPayload {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid planner URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Coarse failure category used to pick the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Application,
    MalformedPayload,
}

impl PlanError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            PlanError::Http(_) | PlanError::InvalidUrl { .. } => FailureKind::Transport,
            PlanError::Application { .. } => FailureKind::Application,
            PlanError::MalformedPayload { .. } => FailureKind::MalformedPayload,
        }
    }
}
