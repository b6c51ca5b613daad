//! Environment-sourced configuration, read once at startup.

use std::time::Duration;

use creditrisk_predictor::VertexConfig;

/// Origins always allowed, regardless of environment configuration.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

const DEFAULT_PROJECT_ID: &str = "cloud-ml-project-477817";
const DEFAULT_LOCATION: &str = "us-central1";
const DEFAULT_ENDPOINT_ID: &str = "7091875287922638848";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Process configuration: predictor target plus HTTP surface policy.
///
/// Built once in `main` and passed by reference into the router; nothing
/// reads the environment after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub vertex: VertexConfig,
    pub allowed_origins: Vec<String>,
    pub bind_addr: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let vertex = VertexConfig {
            project_id: env_or("VERTEX_PROJECT_ID", DEFAULT_PROJECT_ID),
            location: env_or("VERTEX_LOCATION", DEFAULT_LOCATION),
            endpoint_id: env_or("VERTEX_ENDPOINT_ID", DEFAULT_ENDPOINT_ID),
            auth_token: std::env::var("VERTEX_AUTH_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
            timeout: Duration::from_secs(
                std::env::var("VERTEX_TIMEOUT_SECS")
                    .ok()
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        };

        let extra_origins = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();

        Self {
            vertex,
            allowed_origins: merge_origins(DEFAULT_ALLOWED_ORIGINS, &extra_origins),
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Merge the fixed origin list with a comma-separated extra list, keeping
/// order and dropping blanks and duplicates.
fn merge_origins(fixed: &[&str], extra: &str) -> Vec<String> {
    let mut origins: Vec<String> = Vec::new();
    for origin in fixed.iter().copied().chain(extra.split(',')) {
        let origin = origin.trim();
        if origin.is_empty() || origins.iter().any(|seen| seen == origin) {
            continue;
        }
        origins.push(origin.to_string());
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_extra_origins_keeps_the_fixed_list() {
        let origins = merge_origins(DEFAULT_ALLOWED_ORIGINS, "");
        assert_eq!(origins.len(), DEFAULT_ALLOWED_ORIGINS.len());
        assert_eq!(origins[0], "http://localhost:5173");
    }

    #[test]
    fn extra_origins_are_appended_in_order() {
        let origins = merge_origins(
            DEFAULT_ALLOWED_ORIGINS,
            "https://app.example.com,https://staging.example.com",
        );
        assert_eq!(
            &origins[DEFAULT_ALLOWED_ORIGINS.len()..],
            &[
                "https://app.example.com".to_string(),
                "https://staging.example.com".to_string(),
            ]
        );
    }

    #[test]
    fn duplicates_and_blanks_are_dropped() {
        let origins = merge_origins(
            DEFAULT_ALLOWED_ORIGINS,
            " http://localhost:5173 ,, https://app.example.com , https://app.example.com ",
        );
        assert_eq!(origins.len(), DEFAULT_ALLOWED_ORIGINS.len() + 1);
        assert_eq!(origins.last().unwrap(), "https://app.example.com");
    }
}
