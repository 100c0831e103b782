use crate::app_config::AppConfig;
use crate::ConfigError;

/// Read the planner settings, letting a `.env` file in the working directory
/// fill in anything the process environment leaves unset.
///
/// Unset `WAYPOINT_*` variables fall back to a local planner at
/// `http://127.0.0.1:3000/api/plan` with no request timeout.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] when the planner URL is not http(s)
/// or the timeout is not a whole number of seconds.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] but reads only the process environment; no
/// `.env` file is consulted.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for an unusable planner URL or timeout.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let planner_url = or_default("WAYPOINT_PLANNER_URL", "http://127.0.0.1:3000");
    if !(planner_url.starts_with("http://") || planner_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "WAYPOINT_PLANNER_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{planner_url}'"),
        });
    }

    let plan_path = normalize_path(&or_default("WAYPOINT_PLAN_PATH", "/api/plan"));
    let request_timeout_secs = parse_u64("WAYPOINT_REQUEST_TIMEOUT_SECS", "0")?;
    let user_agent = or_default("WAYPOINT_USER_AGENT", "waypoint/0.1 (itinerary-client)");
    let log_level = or_default("WAYPOINT_LOG_LEVEL", "info");

    Ok(AppConfig {
        planner_url,
        plan_path,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

/// Ensure the path starts with exactly one slash.
fn normalize_path(raw: &str) -> String {
    format!("/{}", raw.trim().trim_start_matches('/'))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
