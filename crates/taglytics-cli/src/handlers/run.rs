use anyhow::Result;

use taglytics_client::AnalysisClient;
use taglytics_runtime::{ops, Dispatcher, ResultTab};
use taglytics_store::QueryStore;
use taglytics_types::ProjectId;

use crate::output;
use crate::types::OutputFormat;

pub async fn handle(
    client: &AnalysisClient,
    store: &QueryStore,
    project: &ProjectId,
    index: usize,
    tab: ResultTab,
    format: OutputFormat,
) -> Result<()> {
    let query = ops::load_saved(store, project, index)?;

    let mut dispatcher = Dispatcher::new();
    dispatcher.select_tab(tab);
    ops::run_query(client, &mut dispatcher, query, project, tab).await?;

    output::render_tab(&dispatcher.view(tab), format)
}
