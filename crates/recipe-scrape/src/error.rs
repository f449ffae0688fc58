//! Error types for recipe sources.

use thiserror::Error;

/// A failure to obtain listings from one site.
///
/// The scrape cycle recovers from every variant by skipping the site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("network error: {0}")]
    Http(String),

    /// The site answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// A CSS selector failed to compile.
    #[error("invalid selector `{selector}`: {message}")]
    Selector {
        /// The selector source text.
        selector: String,
        /// Parser message.
        message: String,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, FetchError>;
