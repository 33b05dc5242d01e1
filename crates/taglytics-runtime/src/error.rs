use std::fmt;

/// Result type for taglytics-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Persistence layer error
    Store(taglytics_store::Error),

    /// Analysis endpoint or transport error
    Client(taglytics_client::Error),

    /// No saved query at the requested position
    QueryNotFound { index: usize, available: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Client(err) => write!(f, "Request error: {}", err),
            Error::QueryNotFound { index, available } => write!(
                f,
                "No saved query at index {} ({} available)",
                index, available
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Client(err) => Some(err),
            Error::QueryNotFound { .. } => None,
        }
    }
}

impl From<taglytics_store::Error> for Error {
    fn from(err: taglytics_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<taglytics_client::Error> for Error {
    fn from(err: taglytics_client::Error) -> Self {
        Error::Client(err)
    }
}
