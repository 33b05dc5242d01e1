use std::fmt;

/// Result type for taglytics-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Request failures from the analysis endpoints or the tag catalog.
///
/// None of these are retried here; the caller decides how to surface
/// them.
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, TLS, ...)
    Transport(reqwest::Error),

    /// Endpoint answered with a non-success status
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body did not match the expected shape
    Decode(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Request failed: {}", err),
            Error::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "Server answered {}", status)
                } else {
                    write!(f, "Server answered {}: {}", status, body)
                }
            }
            Error::Decode(err) => write!(f, "Failed to decode response: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Status { .. } => None,
            Error::Decode(err) => Some(err),
        }
    }
}
