use std::fmt;

/// Result type for taglytics-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the persistence layer
#[derive(Debug)]
pub enum Error {
    /// Database operation failed
    Database(rusqlite::Error),

    /// A stored query row exists but no longer parses.
    ///
    /// Deliberately fatal for the whole list operation: a corrupt entry
    /// means the store is damaged, and pretending the data is absent
    /// would silently hide saved work.
    Corrupt {
        rowid: i64,
        source: serde_json::Error,
    },

    /// Query could not be serialized for storage
    Serialize(serde_json::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::Corrupt { rowid, source } => write!(
                f,
                "Stored query at row {} is corrupt and cannot be read: {}",
                rowid, source
            ),
            Error::Serialize(err) => write!(f, "Failed to serialize query: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Corrupt { source, .. } => Some(source),
            Error::Serialize(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
