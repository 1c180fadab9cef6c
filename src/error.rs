//! Error types

use serde::Serialize;
use thiserror::Error;

/// Failure reported by a post store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("store rejected the post: {0}")]
    Rejected(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// What went wrong, as seen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ValidationFailed,
    CreateFailed,
    LoadFailed,
}

/// Errors surfaced by the composer and feed
///
/// Every variant has one fixed user-facing message; the detail is only
/// written to the log.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("validation failed: title, author and body are required")]
    ValidationFailed,

    #[error("error creating post: {detail}")]
    CreateFailed { detail: String },

    #[error("error loading posts: {detail}")]
    LoadFailed { detail: String },
}

impl BoardError {
    pub fn create(err: &StoreError) -> Self {
        BoardError::CreateFailed {
            detail: err.to_string(),
        }
    }

    pub fn load(err: &StoreError) -> Self {
        BoardError::LoadFailed {
            detail: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::ValidationFailed => ErrorKind::ValidationFailed,
            BoardError::CreateFailed { .. } => ErrorKind::CreateFailed,
            BoardError::LoadFailed { .. } => ErrorKind::LoadFailed,
        }
    }

    /// Underlying cause, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            BoardError::ValidationFailed => None,
            BoardError::CreateFailed { detail } | BoardError::LoadFailed { detail } => Some(detail),
        }
    }

    /// The message shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            BoardError::ValidationFailed => "Please fill in all fields",
            BoardError::CreateFailed { .. } => "Failed to create post. Please try again.",
            BoardError::LoadFailed { .. } => "Failed to load posts. Please refresh the page.",
        }
    }

    /// Whether the error is worth a log line
    pub fn is_logged(&self) -> bool {
        !matches!(self, BoardError::ValidationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            BoardError::ValidationFailed.user_message(),
            "Please fill in all fields"
        );
        let err = BoardError::create(&StoreError::Unavailable("down".to_string()));
        assert_eq!(err.user_message(), "Failed to create post. Please try again.");
        assert_eq!(err.kind(), ErrorKind::CreateFailed);
        assert_eq!(err.detail(), Some("store unavailable: down"));
    }

    #[test]
    fn test_only_store_failures_are_logged() {
        assert!(!BoardError::ValidationFailed.is_logged());
        assert!(BoardError::load(&StoreError::Rejected("x".to_string())).is_logged());
    }

    #[test]
    fn test_status_display() {
        let err = StoreError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "store returned 500: boom");
    }
}
