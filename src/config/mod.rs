//! Environment-driven service configuration.
//!
//! Values come from process environment (optionally seeded from `.env`
//! by the binary). Engine weights and thresholds are fixed and live next
//! to the code that applies them.

use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SCORER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_SCORER_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SCORER_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    pub environment: String,
    pub scorer_url: String,
    pub scorer_timeout: Duration,
    pub scorer_concurrency: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: "development".to_string(),
            scorer_url: DEFAULT_SCORER_URL.to_string(),
            scorer_timeout: Duration::from_millis(DEFAULT_SCORER_TIMEOUT_MS),
            scorer_concurrency: DEFAULT_SCORER_CONCURRENCY,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);
        let scorer_url = lookup("SENTIMENT_SCORER_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.scorer_url);
        let scorer_timeout = lookup("SCORER_TIMEOUT_MS")
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.scorer_timeout);
        let scorer_concurrency = lookup("SCORER_CONCURRENCY")
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(defaults.scorer_concurrency)
            .max(1);

        Self {
            port,
            environment,
            scorer_url,
            scorer_timeout,
            scorer_concurrency,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}
