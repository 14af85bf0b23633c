//! Error types for kyso-api

/// Result type for kyso-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the Kyso API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with a non-success status
    #[error("{method} {url} failed with status {status}: {message}")]
    Http {
        method: String,
        url: String,
        status: u16,
        message: String,
    },

    /// 401/403 from the API
    #[error("Not authorized: {message}")]
    Unauthorized { message: String },

    /// 404 from the API
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Connection, TLS or body decoding failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The stored token is not a decodable JWT
    #[error("Invalid session token: {message}")]
    InvalidToken { message: String },

    /// No session file
    #[error("Not logged in. Run `kyso login` first.")]
    NotLoggedIn,

    /// The session token's `exp` is in the past
    #[error("Session expired. Run `kyso login` again.")]
    SessionExpired,

    /// Filesystem error from kyso-fs
    #[error(transparent)]
    Fs(#[from] kyso_fs::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether retrying the same request might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
