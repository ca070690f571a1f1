//! Proxy configuration

use std::time::Duration;

use http::HeaderValue;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Public YouTube Data API v3 endpoint
pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Proxy configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// YouTube Data API key
    pub youtube_api_key: String,
    /// YouTube Data API base URL (overridable for tests and mirrors)
    pub youtube_api_base: String,
    /// Timeout of each upstream call
    pub upstream_timeout: Duration,
    /// Allowed browser origin; any origin when unset
    pub cors_allow_origin: Option<HeaderValue>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let cors_allow_origin = match std::env::var("CORS_ALLOW_ORIGIN") {
            Ok(origin) if !origin.trim().is_empty() => Some(
                HeaderValue::from_str(origin.trim())
                    .map_err(|e| format!("CORS_ALLOW_ORIGIN is not a valid header value: {e}"))?,
            ),
            _ => None,
        };

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            youtube_api_key: Self::require_secret("YOUTUBE_API_KEY", &environment)?,
            youtube_api_base: std::env::var("YOUTUBE_API_BASE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_YOUTUBE_API_BASE.into()),
            upstream_timeout: Duration::from_secs(
                std::env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            cors_allow_origin,
            environment,
        })
    }
}
