use crate::response::Meta;
use thiserror::Error;

/// Main error type for Tumblr API operations
#[derive(Debug, Error)]
pub enum TumblrError {
    /// The envelope carried a non-success status
    #[error("Tumblr API error {status}: {msg}")]
    Api { status: u16, msg: String },

    /// HTTP response that could not be read as an API envelope
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// A required field was absent from an OAuth token response
    #[error("missing field in response: {0}")]
    MissingField(&'static str),

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// OAuth signing error
    #[error("failed to sign request: {0}")]
    Signing(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl TumblrError {
    /// Create an API error from the envelope metadata
    pub fn from_meta(meta: &Meta) -> Self {
        TumblrError::Api {
            status: meta.status,
            msg: meta.msg.clone(),
        }
    }

    /// Create a new HTTP error
    pub fn http(status: u16, body: String) -> Self {
        TumblrError::Http { status, body }
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check if the credentials were rejected (401)
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Get the status code reported by the API or the HTTP layer
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TumblrError::Api { status, .. } | TumblrError::Http { status, .. } => Some(*status),
            TumblrError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for Tumblr operations
pub type Result<T> = std::result::Result<T, TumblrError>;
