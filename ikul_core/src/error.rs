//! Error types shared across the crate.

use thiserror::Error;

/// Failure talking to the catalog API.
///
/// None of these reach the page: [`DegradingBackend`](crate::DegradingBackend)
/// logs them and answers from the static catalog instead.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The configured base URL cannot carry an `/api/...` path.
    #[error("backend base url `{0}` cannot be used as a base")]
    InvalidBaseUrl(String),

    /// Connection, timeout or body decoding failure.
    #[error("request to catalog api failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("catalog api returned {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },
}

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `IKUL_BACKEND_URL` is not an absolute URL.
    #[error("{key} is not a valid url ({value}): {source}")]
    InvalidUrl {
        /// Configuration key
        key: &'static str,
        /// Raw value
        value: String,
        /// Parser error
        source: url::ParseError,
    },

    /// A numeric setting did not parse.
    #[error("{key} must be a non-negative integer, got `{value}`")]
    InvalidNumber {
        /// Configuration key
        key: &'static str,
        /// Raw value
        value: String,
    },
}

/// A phase timeline that would not play monotonically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    /// Cue offsets must strictly increase.
    #[error("cue {index} starts at {at_ms} ms, not after the previous cue")]
    OffsetNotIncreasing {
        /// Index of the offending cue
        index: usize,
        /// Its offset in milliseconds
        at_ms: u128,
    },

    /// Each cue must move the phase forward.
    #[error("cue {index} does not advance the phase")]
    PhaseNotAdvancing {
        /// Index of the offending cue
        index: usize,
    },
}
