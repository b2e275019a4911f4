use thiserror::Error;

/// Failure of a backend call or of client-side validation before one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with {status}")]
    Server { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Text shown to the user: the server's own message or the validation
    /// text when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.trim().to_string(),
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Server {
            status: 409,
            message: Some("Stream already exists".into()),
        };
        assert_eq!(err.user_message("Failed to save"), "Stream already exists");
    }

    #[test]
    fn blank_server_message_uses_fallback() {
        let err = ApiError::Server {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(err.user_message("Failed to save"), "Failed to save");
    }

    #[test]
    fn transport_failures_use_fallback() {
        assert_eq!(ApiError::Timeout.user_message("Network error"), "Network error");
        assert_eq!(
            ApiError::Transport("refused".into()).user_message("Network error"),
            "Network error"
        );
    }

    #[test]
    fn validation_text_is_shown_verbatim() {
        assert_eq!(
            ApiError::Validation("Please enter stream name".into()).user_message("x"),
            "Please enter stream name"
        );
    }
}
