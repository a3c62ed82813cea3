//! Error types for translation API operations.
//!
//! Every network-facing operation distinguishes three failure classes:
//! the transport itself failed, the server answered with an unexpected
//! status, or the body could not be decoded as JSON. Callers can match on
//! the variant; nothing is retried or downgraded in this layer.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures surfaced by translation API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP client failed before a response was available
    /// (connectivity, protocol, request build).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The request URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a status other than the one expected
    /// for the operation (200 for list/upload/download, 201 for create).
    #[error("unexpected status {status} from {url}: {body}")]
    UnexpectedStatus {
        /// The request URL.
        url: String,
        /// The HTTP status code received.
        status: u16,
        /// The raw response body, kept for diagnostics.
        body: String,
    },

    /// A response body could not be parsed as JSON when JSON was expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The request URL.
        url: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Wraps a transport-level failure with its request URL.
    pub fn transport(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            source: Box::new(source),
        }
    }
}
