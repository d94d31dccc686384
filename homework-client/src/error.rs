//! Error types for the homework clients

use homework_core::ShapeError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or to Telegram
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Status reason phrase
        message: String,
    },

    /// Response body is not valid JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Response is valid JSON but not the expected shape
    #[error("Unexpected response shape: {0}")]
    Shape(#[from] ShapeError),

    /// Message could not be delivered to the chat
    #[error("Failed to deliver message: {0}")]
    DeliveryFailed(String),
}

/// Coarse classification of a [`ClientError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream fetch failed on the network or returned a bad status
    Transport,
    /// Upstream body could not be decoded
    Decode,
    /// Upstream body decoded but is semantically invalid
    Shape,
    /// Messaging endpoint failed
    Delivery,
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Which part of the taxonomy this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RequestFailed(_) | Self::ApiError { .. } => ErrorKind::Transport,
            Self::ParseError(_) => ErrorKind::Decode,
            Self::Shape(_) => ErrorKind::Shape,
            Self::DeliveryFailed(_) => ErrorKind::Delivery,
        }
    }

    /// Check if this error came from the messaging endpoint
    pub fn is_delivery(&self) -> bool {
        self.kind() == ErrorKind::Delivery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ClientError::api_error(503, "unavailable").kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            ClientError::ParseError("eof".to_string()).kind(),
            ErrorKind::Decode
        );
        assert_eq!(
            ClientError::from(ShapeError::MissingField("homeworks")).kind(),
            ErrorKind::Shape
        );
        assert!(ClientError::DeliveryFailed("chat not found".to_string()).is_delivery());
    }

    #[test]
    fn test_shape_error_message() {
        let err = ClientError::from(ShapeError::MissingField("homeworks"));
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: missing field `homeworks`"
        );
    }
}
