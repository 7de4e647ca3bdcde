//! Search error types.
//!
//! Errors from the remote engine are carried through as they were received;
//! nothing here retries or reinterprets them.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Failed to set up the client handle.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request could not be sent or no response was received.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The engine answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    ResponseError { status: u16, body: String },

    /// Failed to parse response from search engine.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for the search engine.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create a response error from a status code and the raw response body.
    pub fn response(status: u16, body: impl Into<String>) -> Self {
        Self::ResponseError {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// The HTTP status returned by the engine, if this error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ResponseError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_display_keeps_body() {
        let body = r#"{"error":{"type":"index_not_found_exception"},"status":404}"#;
        let err = SearchError::response(404, body);

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            format!("Request failed with status 404: {}", body)
        );
    }

    #[test]
    fn test_status_absent_for_local_errors() {
        assert_eq!(SearchError::transport("connection refused").status(), None);
        assert_eq!(SearchError::serialization("bad").status(), None);
    }
}
