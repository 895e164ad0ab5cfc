//! Client error types

use thiserror::Error;

/// Failure of a call against the instance API.
///
/// The `Display` output is exactly what the pane shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The server answered `success: false`
    #[error("Error: {0}")]
    Application(String),
    /// The request never produced a usable envelope
    #[error("Connection error: {0}")]
    Transport(String),
    /// The configured base URL cannot be used
    #[error("Connection error: invalid API URL '{0}'")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_error_text() {
        assert_eq!(
            ClientError::Application("X".into()).to_string(),
            "Error: X"
        );
    }

    #[test]
    fn transport_error_text() {
        assert_eq!(
            ClientError::Transport("connection refused".into()).to_string(),
            "Connection error: connection refused"
        );
    }
}
