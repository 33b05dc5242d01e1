use serde::{Deserialize, Serialize};

/// A selectable event tag. `selected` is transient builder state and is
/// always false once the tag sits inside a group.
///
/// Serialized camelCase (`tagName`) to stay compatible with the query
/// format persisted by earlier clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub tag_name: String,
    #[serde(default)]
    pub selected: bool,
}

impl Tag {
    /// Create an unselected tag
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            selected: false,
        }
    }
}

/// A named bucket of tags treated as one unit in a query.
///
/// Invariant: `tags` is non-empty for every group inside a draft or a
/// saved query; the builder prunes a group when its last tag is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub tags: Vec<Tag>,
}

impl Group {
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    /// Tag names in group order
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.tag_name.clone()).collect()
    }
}

/// A saved, reusable collection of groups under one user-chosen name.
///
/// Immutable once persisted: re-running a stored query always produces
/// the same wire request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedQuery {
    pub name: String,
    pub groups: Vec<Group>,
}

impl NamedQuery {
    pub fn new(name: impl Into<String>, groups: Vec<Group>) -> Self {
        Self {
            name: name.into(),
            groups,
        }
    }
}
