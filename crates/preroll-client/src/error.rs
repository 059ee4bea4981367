//! Error types for the generation client

/// Detail used when the endpoint gives no reason for a failure
pub const DEFAULT_DETAIL: &str = "Something went wrong";

/// Errors from preparing or sending a generation request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Prompt is empty after trimming
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    /// Composed prompt exceeds the configured limit
    #[error("prompt too long: {len} characters, max {max}")]
    PromptTooLong { len: usize, max: usize },

    /// Endpoint answered with a non-success status
    #[error("endpoint returned {status}: {detail}")]
    Endpoint { status: u16, detail: String },

    /// Request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body was not a reply envelope
    #[error("could not decode response: {0}")]
    Decode(String),

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Create endpoint error, defaulting a blank detail
    pub fn endpoint(status: u16, detail: Option<String>) -> Self {
        let detail = detail
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DETAIL.to_string());
        Self::Endpoint { status, detail }
    }

    /// Create transport error from a reqwest failure
    pub fn transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport("request timed out".to_string())
        } else if err.is_connect() {
            Self::Transport(format!("unable to reach the endpoint: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Message suitable for showing to a user
    ///
    /// Endpoint failures show only the endpoint's own detail.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Endpoint { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Result alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
