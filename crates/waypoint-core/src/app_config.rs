use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the trip-planning service, without a trailing path.
    pub planner_url: String,
    pub plan_path: String,
    /// `0` means the request may wait indefinitely.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl AppConfig {
    /// Request timeout, or `None` when waiting is unbounded.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
