use std::fmt;

/// Result type for taglytics-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures raised by draft operations.
///
/// These are recoverable: the draft that produced them is unchanged and
/// the message is suitable for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Named tag is not currently in the pool
    TagNotInPool(String),

    /// Move requested with no pool tag selected
    NothingSelected,

    /// Group name was empty or blank
    EmptyGroupName,

    /// Query name was empty or blank
    EmptyQueryName,

    /// Save requested on a draft with no groups
    NoGroups,

    /// Group or tag index does not address an existing tag
    IndexOutOfRange { group_index: usize, tag_index: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TagNotInPool(name) => write!(f, "Tag '{}' is not in the pool", name),
            Error::NothingSelected => write!(f, "No tags selected"),
            Error::EmptyGroupName => write!(f, "Group name must not be empty"),
            Error::EmptyQueryName => write!(f, "Query name must not be empty"),
            Error::NoGroups => write!(f, "Query has no groups"),
            Error::IndexOutOfRange {
                group_index,
                tag_index,
            } => write!(
                f,
                "No tag at group {} position {}",
                group_index, tag_index
            ),
        }
    }
}

impl std::error::Error for Error {}
