use std::env;

/// Built-in probe targets, matching the stock local deployment layout.
pub const DEFAULT_TARGETS: [&str; 3] = [
    "http://localhost:8080/api/health",
    "http://localhost:8080/health",
    "http://localhost:4000/api/health",
];

/// Environment variable advertising the API base URL to clients.
pub const API_URL_ENV: &str = "PULSE_API_URL";

/// Shown in place of the API URL when the variable is absent or empty.
pub const API_URL_UNSET: &str = "(unset)";

pub fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect()
}

/// Diagnostic lookup of the advertised API base URL. Display-only: the
/// value never influences which targets are probed.
pub fn api_url_hint() -> String {
    match env::var(API_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => API_URL_UNSET.to_string(),
    }
}
