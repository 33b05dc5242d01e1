use serde::{Deserialize, Serialize};

use taglytics_types::{Group, NamedQuery, Tag};

use crate::error::{Error, Result};

/// Working state of one query under construction: the pool of still
/// selectable tags plus the groups assembled so far.
///
/// A draft is a plain value. Every operation leaves `self` untouched and
/// returns the successor state, so callers own the single source of truth
/// and there is no hidden shared container behind the builder.
///
/// Lifecycle: `new` (pool loaded, no groups) -> move/remove edits ->
/// `save`, which consumes the draft into an immutable [`NamedQuery`].
/// A saved draft is never resumed; the next query starts from a freshly
/// fetched catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDraft {
    pool: Vec<Tag>,
    groups: Vec<Group>,
}

impl QueryDraft {
    /// Start a draft from the project's tag catalog, all tags unselected
    pub fn new(tag_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            pool: tag_names.into_iter().map(Tag::new).collect(),
            groups: Vec::new(),
        }
    }

    /// Tags still in the pool, in catalog order
    pub fn pool(&self) -> &[Tag] {
        &self.pool
    }

    /// Groups assembled so far, in creation order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// True iff at least one pool tag is selected. Drives enablement of
    /// the move action.
    pub fn some_selected(&self) -> bool {
        self.pool.iter().any(|tag| tag.selected)
    }

    /// Flip the selection flag of one pool tag.
    ///
    /// Tags inside groups are not addressable here; selection only ever
    /// applies to the pool.
    pub fn toggle_select(&self, tag_name: &str) -> Result<QueryDraft> {
        let mut next = self.clone();
        let tag = next
            .pool
            .iter_mut()
            .find(|tag| tag.tag_name == tag_name)
            .ok_or_else(|| Error::TagNotInPool(tag_name.to_string()))?;
        tag.selected = !tag.selected;
        Ok(next)
    }

    /// Move every selected pool tag into the named group, selection reset.
    ///
    /// The tags leave the pool atomically and are appended, in pool
    /// order, to the existing group of that name; a new group is created
    /// at the end of the group list when the name is unseen. Moving twice
    /// to the same name therefore merges instead of duplicating.
    pub fn move_selected_to(&self, group_name: &str) -> Result<QueryDraft> {
        if group_name.trim().is_empty() {
            return Err(Error::EmptyGroupName);
        }
        if !self.some_selected() {
            return Err(Error::NothingSelected);
        }

        let mut next = self.clone();
        let (selected, remaining): (Vec<Tag>, Vec<Tag>) =
            next.pool.into_iter().partition(|tag| tag.selected);
        next.pool = remaining;

        let mut moved: Vec<Tag> = selected
            .into_iter()
            .map(|tag| Tag::new(tag.tag_name))
            .collect();

        match next.groups.iter_mut().find(|g| g.name == group_name) {
            Some(group) => group.tags.append(&mut moved),
            None => next.groups.push(Group::new(group_name, moved)),
        }

        Ok(next)
    }

    /// Return the tag at the given position to the pool, unselected.
    ///
    /// Exactly one tag is removed, addressed by position. A group emptied
    /// of its last tag is pruned, so no draft (and no saved query) ever
    /// carries a zero-tag group.
    pub fn remove_tag_from_group(&self, group_index: usize, tag_index: usize) -> Result<QueryDraft> {
        let out_of_range = || Error::IndexOutOfRange {
            group_index,
            tag_index,
        };

        let group = self.groups.get(group_index).ok_or_else(out_of_range)?;
        if tag_index >= group.tags.len() {
            return Err(out_of_range());
        }

        let mut next = self.clone();
        let tag = next.groups[group_index].tags.remove(tag_index);
        next.pool.push(Tag::new(tag.tag_name));
        if next.groups[group_index].tags.is_empty() {
            next.groups.remove(group_index);
        }
        Ok(next)
    }

    /// Freeze the draft into an immutable named query.
    ///
    /// Only the groups survive; the pool (and any still-selected flags)
    /// is dropped by the caller once the query is persisted. Validation
    /// failures leave the draft reusable, so a rejected name can simply
    /// be corrected and saved again.
    pub fn save(&self, name: &str) -> Result<NamedQuery> {
        if name.trim().is_empty() {
            return Err(Error::EmptyQueryName);
        }
        if self.groups.is_empty() {
            return Err(Error::NoGroups);
        }
        Ok(NamedQuery::new(name, self.groups.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QueryDraft {
        QueryDraft::new(["signup", "purchase", "churn"])
    }

    fn select(draft: QueryDraft, names: &[&str]) -> QueryDraft {
        names
            .iter()
            .fold(draft, |d, name| d.toggle_select(name).unwrap())
    }

    #[test]
    fn test_new_draft_starts_empty() {
        let d = draft();
        assert_eq!(d.pool().len(), 3);
        assert!(d.groups().is_empty());
        assert!(!d.some_selected());
    }

    #[test]
    fn test_toggle_select_flips_one_flag() {
        let d = draft().toggle_select("signup").unwrap();
        assert!(d.pool()[0].selected);
        assert!(!d.pool()[1].selected);
        assert!(d.some_selected());

        let d = d.toggle_select("signup").unwrap();
        assert!(!d.pool()[0].selected);
        assert!(!d.some_selected());
    }

    #[test]
    fn test_toggle_select_unknown_tag_fails() {
        let err = draft().toggle_select("missing").unwrap_err();
        assert_eq!(err, Error::TagNotInPool("missing".to_string()));
    }

    #[test]
    fn test_toggle_select_grouped_tag_fails() {
        let d = select(draft(), &["signup"]).move_selected_to("funnel1").unwrap();
        let err = d.toggle_select("signup").unwrap_err();
        assert_eq!(err, Error::TagNotInPool("signup".to_string()));
    }

    #[test]
    fn test_move_selected_creates_group() {
        // Scenario: select signup + purchase, move to "funnel1"
        let d = select(draft(), &["signup", "purchase"])
            .move_selected_to("funnel1")
            .unwrap();

        assert_eq!(d.groups().len(), 1);
        assert_eq!(d.groups()[0].name, "funnel1");
        assert_eq!(d.groups()[0].tag_names(), vec!["signup", "purchase"]);
        assert_eq!(d.pool().len(), 1);
        assert_eq!(d.pool()[0].tag_name, "churn");
        assert!(!d.some_selected());
    }

    #[test]
    fn test_moved_tags_are_unselected() {
        let d = select(draft(), &["signup"]).move_selected_to("a").unwrap();
        assert!(!d.groups()[0].tags[0].selected);
    }

    #[test]
    fn test_move_to_existing_name_merges() {
        let d = select(draft(), &["signup"]).move_selected_to("a").unwrap();
        let d = select(d, &["purchase"]).move_selected_to("a").unwrap();

        assert_eq!(d.groups().len(), 1);
        assert_eq!(d.groups()[0].tag_names(), vec!["signup", "purchase"]);
    }

    #[test]
    fn test_move_count_is_conserved() {
        let d = select(draft(), &["signup", "churn"]);
        let before = d.pool().len();
        let d = d.move_selected_to("g").unwrap();

        assert_eq!(d.pool().len(), before - 2);
        assert_eq!(d.groups()[0].tags.len(), 2);

        // Pool and group are disjoint afterwards
        for tag in d.pool() {
            assert!(!d.groups()[0].tag_names().contains(&tag.tag_name));
        }
    }

    #[test]
    fn test_move_with_nothing_selected_fails() {
        assert_eq!(draft().move_selected_to("a").unwrap_err(), Error::NothingSelected);
    }

    #[test]
    fn test_move_to_blank_name_fails() {
        let d = select(draft(), &["signup"]);
        assert_eq!(d.move_selected_to("  ").unwrap_err(), Error::EmptyGroupName);
    }

    #[test]
    fn test_remove_returns_exactly_one_tag_to_pool() {
        let d = select(draft(), &["signup", "purchase"])
            .move_selected_to("funnel1")
            .unwrap();

        let d = d.remove_tag_from_group(0, 0).unwrap();

        assert_eq!(d.groups()[0].tag_names(), vec!["purchase"]);
        assert_eq!(d.pool().len(), 2);
        let returned = d.pool().last().unwrap();
        assert_eq!(returned.tag_name, "signup");
        assert!(!returned.selected);
    }

    #[test]
    fn test_remove_last_tag_prunes_group() {
        let d = select(draft(), &["signup"]).move_selected_to("a").unwrap();
        let d = d.remove_tag_from_group(0, 0).unwrap();
        assert!(d.groups().is_empty());
        assert_eq!(d.pool().len(), 3);
    }

    #[test]
    fn test_remove_out_of_range_fails() {
        let d = select(draft(), &["signup"]).move_selected_to("a").unwrap();
        assert!(matches!(
            d.remove_tag_from_group(0, 5),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            d.remove_tag_from_group(3, 0),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_failed_operation_leaves_draft_unchanged() {
        let d = draft();
        let before = d.clone();
        let _ = d.move_selected_to("a");
        assert_eq!(d, before);
    }

    #[test]
    fn test_save_produces_named_query() {
        let query = select(draft(), &["signup", "purchase"])
            .move_selected_to("funnel1")
            .unwrap()
            .save("q1")
            .unwrap();

        assert_eq!(query.name, "q1");
        assert_eq!(query.groups.len(), 1);
        assert_eq!(query.groups[0].tag_names(), vec!["signup", "purchase"]);
    }

    #[test]
    fn test_save_with_blank_name_fails() {
        let d = select(draft(), &["signup"]).move_selected_to("a").unwrap();
        assert_eq!(d.save("   ").unwrap_err(), Error::EmptyQueryName);

        // Draft stays usable after the rejected name
        assert!(d.save("q1").is_ok());
    }

    #[test]
    fn test_save_without_groups_fails() {
        assert_eq!(draft().save("q1").unwrap_err(), Error::NoGroups);
    }
}
