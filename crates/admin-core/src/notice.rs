//! Notices and Dialogs
//!
//! Every user-visible outcome is a modal, dismiss-only notice; destructive
//! actions ask first through the same widget.

use async_trait::async_trait;

use crate::domain::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub kind: NoticeKind,
    /// Label of the accept button when the notice is a confirmation
    pub confirm_label: Option<String>,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            text: text.into(),
            kind: NoticeKind::Success,
            confirm_label: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            text: text.into(),
            kind: NoticeKind::Error,
            confirm_label: None,
        }
    }

    /// "Are you sure?" prompt
    pub fn confirmation(text: impl Into<String>, confirm_label: impl Into<String>) -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: text.into(),
            kind: NoticeKind::Warning,
            confirm_label: Some(confirm_label.into()),
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Error notice with the server's message, or `fallback` when it has none
    pub fn failure(err: &ApiError, fallback: &str) -> Self {
        let message = err.user_message();
        if message.trim().is_empty() {
            Self::error(fallback)
        } else {
            Self::error(message)
        }
    }
}

/// The host's modal widget: `(title, body, kind) -> confirmed`
#[async_trait(?Send)]
pub trait Dialogs {
    /// Show a notice and resolve once dismissed
    async fn alert(&self, notice: Notice);

    /// Ask a yes/no question
    async fn confirm(&self, notice: Notice) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_uses_error_message() {
        let err = ApiError::Status {
            status: 500,
            message: Some("Database offline".to_string()),
        };
        assert_eq!(Notice::failure(&err, "Failed").text, "Database offline");
    }

    #[test]
    fn test_failure_falls_back_on_blank_message() {
        let err = ApiError::Transport(String::new());
        let notice = Notice::failure(&err, "Failed to delete article");
        assert_eq!(notice.text, "Failed to delete article");
        assert_eq!(notice.kind, NoticeKind::Error);
    }
}
