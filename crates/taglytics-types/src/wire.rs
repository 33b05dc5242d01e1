//! Request and response shapes spoken by the analysis endpoints.
//!
//! Field names are snake_case on the wire (`tags_names`, `step_number`),
//! matching the server's JSON contract.

use serde::{Deserialize, Serialize};

use crate::query::NamedQuery;

/// One group as submitted to an analysis endpoint.
///
/// `id` is the zero-based position of the group within the submitted
/// query. It is renumbered on every submission and must never be
/// treated as a stable identifier across saves or edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireGroup {
    pub id: usize,
    pub tags_names: Vec<String>,
}

/// Percentage per group, positionally aligned with the submitted groups
pub type PercentagesResult = Vec<f64>;

/// Tag names of one group, as echoed back by the session-analysis endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroupNames {
    pub tags_names: Vec<String>,
}

/// One funnel step of a session-analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStep {
    pub step_number: u32,
    /// Average time spent on this step, in milliseconds
    pub average_duration: f64,
    pub tag_groups_sorted: Vec<TagGroupNames>,
}

/// Ordered funnel steps returned by the session-analysis endpoint
pub type SessionAnalysisResult = Vec<AnalysisStep>;

/// Map a saved query to the wire shape, assigning each group its
/// submission position as `id`. Deterministic: the same query always
/// yields the same request.
pub fn build_wire_query(query: &NamedQuery) -> Vec<WireGroup> {
    query
        .groups
        .iter()
        .enumerate()
        .map(|(id, group)| WireGroup {
            id,
            tags_names: group.tag_names(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Group, Tag};

    fn sample_query() -> NamedQuery {
        NamedQuery::new(
            "q1",
            vec![
                Group::new("funnel1", vec![Tag::new("signup"), Tag::new("purchase")]),
                Group::new("funnel2", vec![Tag::new("churn")]),
            ],
        )
    }

    #[test]
    fn test_wire_ids_are_positions() {
        let wire = build_wire_query(&sample_query());
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].id, 0);
        assert_eq!(wire[0].tags_names, vec!["signup", "purchase"]);
        assert_eq!(wire[1].id, 1);
        assert_eq!(wire[1].tags_names, vec!["churn"]);
    }

    #[test]
    fn test_wire_query_is_deterministic() {
        let query = sample_query();
        assert_eq!(build_wire_query(&query), build_wire_query(&query));
    }

    #[test]
    fn test_empty_query_yields_empty_request() {
        let query = NamedQuery::new("empty", vec![]);
        assert!(build_wire_query(&query).is_empty());
    }

    #[test]
    fn test_analysis_step_wire_format() {
        let json = r#"{
            "step_number": 1,
            "average_duration": 1500.0,
            "tag_groups_sorted": [{"tags_names": ["signup", "purchase"]}]
        }"#;
        let step: AnalysisStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.step_number, 1);
        assert_eq!(step.average_duration, 1500.0);
        assert_eq!(step.tag_groups_sorted[0].tags_names, vec!["signup", "purchase"]);
    }
}
