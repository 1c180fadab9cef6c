//! User notification boundary
//!
//! Every error the composer produces passes through [`present`], which
//! logs store failures and then hands the error to a [`Notifier`].

use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::error::{BoardError, ErrorKind};

/// Something that can show a message to the user
pub trait Notifier {
    fn notify(&self, error: &BoardError);
}

/// Log the error if it came from the store, then show it
pub fn present<N: Notifier + ?Sized>(notifier: &N, error: &BoardError) {
    if error.is_logged() {
        tracing::error!(kind = ?error.kind(), detail = error.detail().unwrap_or_default(), "{}", error);
    }
    notifier.notify(error);
}

/// A shown notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&BoardError> for Notice {
    fn from(error: &BoardError) -> Self {
        Self {
            kind: error.kind(),
            message: error.user_message().to_string(),
        }
    }
}

/// Collects notices so they can be rendered into a page
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices shown so far
    pub fn notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(notices) => notices.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.notices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, error: &BoardError) {
        let notice = Notice::from(error);
        match self.notices.lock() {
            Ok(mut notices) => notices.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}

/// Prints notices to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, error: &BoardError) {
        eprintln!("{}", error.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn test_notice_log_collects() {
        let log = NoticeLog::new();
        assert!(log.is_empty());

        present(&log, &BoardError::ValidationFailed);
        present(
            &log,
            &BoardError::load(&StoreError::Unavailable("offline".to_string())),
        );

        let notices = log.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, ErrorKind::ValidationFailed);
        assert_eq!(notices[0].message, "Please fill in all fields");
        assert_eq!(
            notices[1].message,
            "Failed to load posts. Please refresh the page."
        );
    }

    #[test]
    fn test_clones_share_notices() {
        let log = NoticeLog::new();
        let shared = log.clone();
        shared.notify(&BoardError::ValidationFailed);
        assert_eq!(log.len(), 1);
    }
}
