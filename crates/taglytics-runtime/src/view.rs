//! View models for the two result tabs.
//!
//! These are plain values; the CLI (or any other frontend) decides how
//! to print them.

use taglytics_types::AnalysisStep;

/// One group row of the percentages tab.
///
/// `percentage` is `None` when the server returned fewer values than
/// the query has groups; the row still renders, just without a number.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageRow {
    pub group_name: String,
    pub tags: Vec<String>,
    pub percentage: Option<f64>,
}

/// What a result tab currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum TabView {
    /// No query bound yet, or this tab has not been run
    RunFirst,

    /// Percentage per group, positional
    Percentages {
        query_name: String,
        rows: Vec<PercentageRow>,
    },

    /// Funnel steps from the session analysis
    Analysis {
        query_name: String,
        steps: Vec<AnalysisStep>,
    },
}
