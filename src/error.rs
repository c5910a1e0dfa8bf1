//! Error types for changelog-guard.
//!
//! A missing changelog entry is not an error: it is reported through
//! [`crate::validator::Verdict::Missing`]. Everything here is a fault that
//! stops validation before a verdict can be reached.

use thiserror::Error;

/// Main error type for changelog-guard operations.
#[derive(Error, Debug)]
pub enum ChangelogGuardError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Payload errors
    #[error("Pull request #{pr_number} has no description")]
    MissingDescription { pr_number: u64 },

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Result type alias using ChangelogGuardError
pub type Result<T> = std::result::Result<T, ChangelogGuardError>;

impl ChangelogGuardError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }
}

// Implement From for reqwest errors (network/API)
impl From<reqwest::Error> for ChangelogGuardError {
    fn from(err: reqwest::Error) -> Self {
        match err.status().map(|s| s.as_u16()) {
            Some(401) | Some(403) => Self::AuthenticationError(err.to_string()),
            Some(429) => Self::RateLimitExceeded,
            _ => Self::NetworkError(err.to_string()),
        }
    }
}

// Implement From for reqwest header errors (needs custom message)
impl From<reqwest::header::InvalidHeaderValue> for ChangelogGuardError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::AuthenticationError(format!("Invalid header value: {}", err))
    }
}
