use thiserror::Error;

/// Errors returned by the search client.
///
/// [`SearchError::Authentication`] covers credential problems; every other
/// variant is a fetch failure.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Blank credentials, or the service rejected the signed request (HTTP 401).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The service answered with a non-2xx status other than 401.
    #[error("search API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl SearchError {
    /// `true` when the failure is an authentication problem rather than a
    /// failed fetch.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, SearchError::Authentication(_))
    }
}
