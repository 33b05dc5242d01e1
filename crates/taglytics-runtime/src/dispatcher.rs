use taglytics_types::{NamedQuery, PercentagesResult, SessionAnalysisResult};

use crate::view::{PercentageRow, TabView};

/// The two display modes for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTab {
    Percentages,
    SessionAnalysis,
}

/// Proof that a run was started, bound to one tab and one issue number.
///
/// Tokens are issued per tab and increase monotonically; a settled run
/// is applied only while its token is still the latest for that tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken {
    tab: ResultTab,
    seq: u64,
}

impl RunToken {
    pub fn tab(&self) -> ResultTab {
        self.tab
    }
}

/// Holds the currently bound query and the settled result of each tab.
///
/// Switching tabs never triggers a request, and running one tab never
/// clears the other tab's stored result. A response from a superseded
/// run (the user hit run again before the first settled) is discarded
/// silently via the token check.
#[derive(Debug, Default)]
pub struct Dispatcher {
    query: Option<NamedQuery>,
    percentages: Option<PercentagesResult>,
    analysis: Option<SessionAnalysisResult>,
    active_tab: Option<ResultTab>,
    pending: bool,
    last_error: Option<String>,
    issued_percentages: u64,
    issued_analysis: u64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tab currently shown, defaulting to percentages
    pub fn active_tab(&self) -> ResultTab {
        self.active_tab.unwrap_or(ResultTab::Percentages)
    }

    /// Pure tab switch; no request is triggered
    pub fn select_tab(&mut self, tab: ResultTab) {
        self.active_tab = Some(tab);
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Bind the query and start a run for the given tab.
    ///
    /// Issues the next token for that tab; any run still in flight for
    /// the same tab is superseded from this point on.
    pub fn begin_run(&mut self, query: NamedQuery, tab: ResultTab) -> RunToken {
        self.query = Some(query);
        self.pending = true;
        self.last_error = None;

        let seq = match tab {
            ResultTab::Percentages => {
                self.issued_percentages += 1;
                self.issued_percentages
            }
            ResultTab::SessionAnalysis => {
                self.issued_analysis += 1;
                self.issued_analysis
            }
        };

        RunToken { tab, seq }
    }

    fn is_latest(&self, token: &RunToken) -> bool {
        let latest = match token.tab {
            ResultTab::Percentages => self.issued_percentages,
            ResultTab::SessionAnalysis => self.issued_analysis,
        };
        token.seq == latest
    }

    /// Store a settled percentages result. Returns false (and changes
    /// nothing) when the token is stale or belongs to the other tab.
    pub fn apply_percentages(&mut self, token: &RunToken, result: PercentagesResult) -> bool {
        if token.tab != ResultTab::Percentages || !self.is_latest(token) {
            tracing::debug!("discarding stale percentages response (seq {})", token.seq);
            return false;
        }
        self.percentages = Some(result);
        self.pending = false;
        true
    }

    /// Store a settled session-analysis result, same token rules
    pub fn apply_analysis(&mut self, token: &RunToken, result: SessionAnalysisResult) -> bool {
        if token.tab != ResultTab::SessionAnalysis || !self.is_latest(token) {
            tracing::debug!("discarding stale analysis response (seq {})", token.seq);
            return false;
        }
        self.analysis = Some(result);
        self.pending = false;
        true
    }

    /// Record a failed run. Pending is cleared, the message is kept for
    /// display, and previously stored results stay visible. Stale
    /// failures are discarded like stale successes.
    pub fn fail(&mut self, token: &RunToken, message: impl Into<String>) -> bool {
        if !self.is_latest(token) {
            tracing::debug!("discarding stale failure (seq {})", token.seq);
            return false;
        }
        self.pending = false;
        self.last_error = Some(message.into());
        true
    }

    /// View model for a tab.
    ///
    /// `RunFirst` whenever the bound query or that tab's result is
    /// absent. An empty result is present: it renders as zero rows, not
    /// as the placeholder. Rows pair groups with `result.get(i)`, so a
    /// short (or overlong) result never faults.
    pub fn view(&self, tab: ResultTab) -> TabView {
        let Some(query) = &self.query else {
            return TabView::RunFirst;
        };

        match tab {
            ResultTab::Percentages => match &self.percentages {
                None => TabView::RunFirst,
                Some(result) => TabView::Percentages {
                    query_name: query.name.clone(),
                    rows: query
                        .groups
                        .iter()
                        .enumerate()
                        .map(|(i, group)| PercentageRow {
                            group_name: group.name.clone(),
                            tags: group.tag_names(),
                            percentage: result.get(i).copied(),
                        })
                        .collect(),
                },
            },
            ResultTab::SessionAnalysis => match &self.analysis {
                None => TabView::RunFirst,
                Some(result) => TabView::Analysis {
                    query_name: query.name.clone(),
                    steps: result.clone(),
                },
            },
        }
    }
}
