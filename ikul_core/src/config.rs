//! Configuration for the landing page.
//!
//! Values come from an environment-style lookup so the same resolution logic
//! serves the native process environment and the build-time values baked
//! into the wasm bundle.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Base URL of the catalog API.
pub const BACKEND_URL_KEY: &str = "IKUL_BACKEND_URL";
/// `tracing` filter directive.
pub const LOG_KEY: &str = "IKUL_LOG";
/// Debounce quiet interval in milliseconds.
pub const DEBOUNCE_KEY: &str = "IKUL_SEARCH_DEBOUNCE_MS";
/// Minimum trimmed query length before searching.
pub const MIN_CHARS_KEY: &str = "IKUL_SEARCH_MIN_CHARS";
/// Per-request timeout in milliseconds.
pub const REQUEST_TIMEOUT_KEY: &str = "IKUL_REQUEST_TIMEOUT_MS";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
const DEFAULT_LOG_FILTER: &str = "info";

/// Tuning for the debounced search controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSettings {
    /// Queries shorter than this (after trimming, in chars) never hit the network.
    pub min_query_len: usize,
    /// Quiet period after the last keystroke before a search fires.
    pub quiet_interval: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            quiet_interval: Duration::from_millis(300),
        }
    }
}

/// Resolved application configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Catalog API base, e.g. `https://api.ikulcars.com`
    pub backend_url: Url,
    /// `tracing` filter directive, e.g. `info,ikul_core=debug`
    pub log_filter: String,
    /// Search controller tuning
    pub search: SearchSettings,
    /// Example placeholder rotation period
    pub placeholder_period: Duration,
    /// Upper bound for one API call
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            search: SearchSettings::default(),
            placeholder_period: Duration::from_millis(3000),
            request_timeout: Duration::from_millis(10_000),
        }
    }
}

impl AppConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary key lookup. Missing or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(BACKEND_URL_KEY) {
            config.backend_url =
                Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
                    key: BACKEND_URL_KEY,
                    value: raw.clone(),
                    source,
                })?;
        }
        if let Some(filter) = get(LOG_KEY) {
            config.log_filter = filter;
        }
        if let Some(raw) = get(DEBOUNCE_KEY) {
            config.search.quiet_interval = Duration::from_millis(parse_number(DEBOUNCE_KEY, &raw)?);
        }
        if let Some(raw) = get(MIN_CHARS_KEY) {
            config.search.min_query_len = parse_number(MIN_CHARS_KEY, &raw)? as usize;
        }
        if let Some(raw) = get(REQUEST_TIMEOUT_KEY) {
            config.request_timeout =
                Duration::from_millis(parse_number(REQUEST_TIMEOUT_KEY, &raw)?);
        }
        Ok(config)
    }
}

fn default_backend_url() -> Url {
    Url::parse(DEFAULT_BACKEND_URL).unwrap_or_else(|_| unreachable!("default url is valid"))
}

fn parse_number(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = AppConfig::from_lookup(|_| None).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.backend_url.as_str(), "http://localhost:8001/");
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.search.quiet_interval, Duration::from_millis(300));
        assert_eq!(config.placeholder_period, Duration::from_millis(3000));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            (BACKEND_URL_KEY, "https://api.ikulcars.com"),
            (LOG_KEY, "debug"),
            (DEBOUNCE_KEY, " 150 "),
            (MIN_CHARS_KEY, "3"),
            (REQUEST_TIMEOUT_KEY, "2500"),
        ]))
        .expect("valid overrides");

        assert_eq!(config.backend_url.host_str(), Some("api.ikulcars.com"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.search.quiet_interval, Duration::from_millis(150));
        assert_eq!(config.search.min_query_len, 3);
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config =
            AppConfig::from_lookup(lookup(&[(BACKEND_URL_KEY, "  "), (LOG_KEY, "")])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn relative_backend_url_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(BACKEND_URL_KEY, "/api")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { key: BACKEND_URL_KEY, .. }));
    }

    #[test]
    fn non_numeric_debounce_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(DEBOUNCE_KEY, "fast")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "IKUL_SEARCH_DEBOUNCE_MS must be a non-negative integer, got `fast`"
        );
    }
}
