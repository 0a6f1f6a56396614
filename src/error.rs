// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Network(NetworkError),
    Parse(String),
}

/// Failures of remote requests, kept apart so callers can tell a bad HTTP
/// status from a transport problem.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// The request could not be sent or the connection dropped.
    Transport(String),

    /// The request timed out.
    Timeout,

    /// The server answered with a non-success status code.
    Status(u16),
}

impl NetworkError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NetworkError::Transport(_) => "error-network-transport",
            NetworkError::Timeout => "error-network-timeout",
            NetworkError::Status(_) => "error-network-status",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Transport(msg) => write!(f, "transport failure: {}", msg),
            NetworkError::Timeout => write!(f, "request timed out"),
            NetworkError::Status(code) => write!(f, "HTTP status {}", code),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network(NetworkError::Timeout)
        } else if let Some(status) = err.status() {
            Error::Network(NetworkError::Status(status.as_u16()))
        } else if err.is_decode() {
            Error::Parse(err.to_string())
        } else {
            Error::Network(NetworkError::Transport(err.to_string()))
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
