//! Error taxonomy for order operations
//!
//! Every service operation returns one of these three variants; the gateway
//! owns the mapping to HTTP status codes and the JSON error envelope.

use thiserror::Error;

/// Failures an order operation can surface to the HTTP layer.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Missing or malformed caller input (HTTP 400)
    #[error("{0}")]
    Validation(String),

    /// The id does not resolve to a stored order (HTTP 404)
    #[error("{0}")]
    NotFound(String),

    /// Store or connectivity failure, surfaced without retry (HTTP 500)
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl OrderError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_uses_message() {
        assert_eq!(
            OrderError::validation("All fields are required").to_string(),
            "All fields are required"
        );
        assert_eq!(
            OrderError::not_found("Order not found").to_string(),
            "Order not found"
        );
    }
}
