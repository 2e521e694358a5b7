//! Error kinds for the chat and viewer controllers.
//!
//! Both enums are `Clone` because they travel inside UI messages. None of them
//! is fatal: chat errors become transcript text, viewer errors are logged and
//! degrade the view.

use thiserror::Error;

/// Fallback text when a non-OK response carries no usable `error` field.
pub const NOT_OK_FALLBACK: &str = "Network response was not ok.";
/// Fallback text when an OK response has neither `reply` nor `error`.
pub const INVALID_RESPONSE: &str = "Invalid response from server.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// Input was empty after trimming. Dropped silently by the panel.
    #[error("message is empty")]
    EmptyInput,
    #[error("{0}")]
    NetworkFailure(String),
    /// Non-OK status or an explicit `error` field in the body.
    #[error("{0}")]
    ServerError(String),
    #[error("{0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("failed to load document: {0}")]
    DocumentLoadFailure(String),
    #[error("failed to render page {page}: {reason}")]
    PageRenderFailure { page: usize, reason: String },
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::NetworkFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_errors_display_the_bare_message() {
        let err = ChatError::ServerError("rate limited".to_string());
        assert_eq!(err.to_string(), "rate limited");
        assert_eq!(
            ChatError::MalformedResponse(INVALID_RESPONSE.to_string()).to_string(),
            INVALID_RESPONSE
        );
    }

    #[test]
    fn render_failure_names_the_page() {
        let err = ViewerError::PageRenderFailure {
            page: 4,
            reason: "out of range".to_string(),
        };
        assert_eq!(err.to_string(), "failed to render page 4: out of range");
    }
}
