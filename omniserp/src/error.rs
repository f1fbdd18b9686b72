//! Error types for search engine operations
//!
//! Normalization has its own small taxonomy ([`NormalizeError`]) because it
//! is the only failure a caller can hit without touching the network. All
//! other failures are variants of [`Error`].

use thiserror::Error;

/// Errors produced while normalizing a raw engine response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The response root was not a JSON object (or was missing entirely)
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// No mapping table exists for the named engine
    #[error("unsupported engine: {0}")]
    UnsupportedProvider(String),
}

/// Errors that can occur when talking to a search engine
#[derive(Error, Debug)]
pub enum Error {
    /// Normalizing the engine response failed
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// Request parameters failed validation
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The active engine does not support the requested operation
    #[error("operation not supported by current engine: '{operation}' (engine: {engine}, supported: {supported:?})")]
    OperationNotSupported {
        operation: String,
        engine: String,
        supported: Vec<String>,
    },

    /// No engine with the given name is registered
    #[error("engine '{name}' not found. Available engines: {available:?}")]
    EngineNotFound { name: String, available: Vec<String> },

    /// The registry is empty
    #[error("no search engines available. Please ensure API keys are set")]
    NoEnginesAvailable,

    /// An engine was constructed without credentials
    #[error("{0} is required")]
    MissingApiKey(&'static str),

    /// The HTTP request itself failed
    #[error("request failed: {0}")]
    Http(reqwest::Error),

    /// The engine answered with a non-success status
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body was not valid JSON
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Whether the error was caused by the caller rather than the engine
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidParams(_)
                | Error::OperationNotSupported { .. }
                | Error::EngineNotFound { .. }
                | Error::InvalidUrl(_)
        )
    }
}

/// Request URLs can carry the SerpAPI key in their query string, so the URL
/// is stripped before the error is kept
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.without_url())
    }
}

/// Result type alias for omniserp operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed_response() {
        let err = NormalizeError::MalformedResponse("expected object, found array".into());
        assert_eq!(
            err.to_string(),
            "malformed response: expected object, found array"
        );
    }

    #[test]
    fn normalize_error_is_transparent() {
        let err: Error = NormalizeError::UnsupportedProvider("bing".into()).into();
        assert_eq!(err.to_string(), "unsupported engine: bing");
    }

    #[test]
    fn display_operation_not_supported() {
        let err = Error::OperationNotSupported {
            operation: "google_search_lens".into(),
            engine: "serpapi".into(),
            supported: vec!["google_search".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'google_search_lens'"));
        assert!(msg.contains("engine: serpapi"));
        assert!(err.is_client_error());
    }

    #[test]
    fn api_error_is_not_client_error() {
        let err = Error::Api {
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(err.to_string(), "API error 401: unauthorized");
        assert!(!err.is_client_error());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
