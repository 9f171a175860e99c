//! Error types for lifecycle hook reconciliation.

use thiserror::Error;

/// Errors that can occur while reconciling a lifecycle hook.
///
/// Every variant is terminal for the invocation: there is no local
/// recovery, no retry, and no partial-success state.
#[derive(Debug, Error)]
pub enum HookError {
    /// A required parameter is missing or invalid. Raised before any
    /// provider call is made.
    #[error("invalid parameters: {message}")]
    Validation {
        /// What was missing or invalid.
        message: String,
    },

    /// Credential or connection setup failed.
    #[error("authentication failed: {message}")]
    Auth {
        /// The provider's message, passed through.
        message: String,
    },

    /// The provider rejected or failed an API call. The original provider
    /// message is preserved verbatim for diagnosability.
    #[error("{operation} failed: {message}")]
    Api {
        /// The API operation that failed (e.g. `PutLifecycleHook`).
        operation: &'static str,
        /// The provider's message, verbatim.
        message: String,
    },
}

impl HookError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a provider API error for the named operation.
    pub fn api(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Api {
            operation,
            message: message.into(),
        }
    }
}

/// Result type for hook reconciliation operations.
pub type HookResult<T> = Result<T, HookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HookError::validation("transition parameter is required");
        assert_eq!(
            err.to_string(),
            "invalid parameters: transition parameter is required"
        );

        let err = HookError::api("PutLifecycleHook", "ValidationError: role not assumable");
        assert_eq!(
            err.to_string(),
            "PutLifecycleHook failed: ValidationError: role not assumable"
        );
    }

    #[test]
    fn test_provider_message_preserved() {
        let original = "AccessDenied: not authorized to perform autoscaling:DeleteLifecycleHook";
        let err = HookError::api("DeleteLifecycleHook", original);
        assert!(err.to_string().contains(original));
    }
}
