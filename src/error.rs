//! Error types for parallel-fetch
//!
//! A single [`Error`] enum covers the whole crate:
//! - Input validation ([`Error::EmptyInput`])
//! - The aggregate fetch failure ([`Error::FetchFailed`]) which wraps exactly
//!   one underlying client error
//! - Client-level failures (invalid URL, transport, HTTP status)
//! - Payload decoding and configuration errors

use thiserror::Error;

/// Result type alias for parallel-fetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for parallel-fetch
#[derive(Debug, Error)]
pub enum Error {
    /// The URL list was empty; no request was issued
    #[error("Bad Request: empty or missing URL list")]
    EmptyInput,

    /// At least one fetch failed
    ///
    /// Wraps the failure with the lowest input index. Sibling fetches were
    /// still driven to completion before this error was produced.
    #[error("failed to fetch data: {source}")]
    FetchFailed {
        /// Position of the failed URL in the input list
        index: usize,
        /// The URL that failed
        url: String,
        /// The underlying client error
        #[source]
        source: Box<Error>,
    },

    /// URL could not be parsed
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser error text
        reason: String,
    },

    /// Transport-level failure (connect, timeout, body read)
    #[error("network error for '{url}': {message}")]
    Http {
        /// The URL being fetched
        url: String,
        /// Human-readable description of the failure
        message: String,
    },

    /// Server answered with a non-success status
    #[error("HTTP status {status} for '{url}'")]
    Status {
        /// The URL being fetched
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// A payload could not be decoded into the requested type
    #[error("failed to decode payload {index} from '{url}': {source}")]
    Decode {
        /// Position of the payload in the result list
        index: usize,
        /// The URL the payload came from
        url: String,
        /// JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "timeout")
        key: Option<String>,
    },
}

impl Error {
    /// True for the "bad input" error, false for every fetch-related error
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }

    /// The URL this error is attributed to, if any
    pub fn failed_url(&self) -> Option<&str> {
        match self {
            Error::FetchFailed { url, .. }
            | Error::InvalidUrl { url, .. }
            | Error::Http { url, .. }
            | Error::Status { url, .. }
            | Error::Decode { url, .. } => Some(url),
            Error::EmptyInput | Error::Config { .. } => None,
        }
    }
}
