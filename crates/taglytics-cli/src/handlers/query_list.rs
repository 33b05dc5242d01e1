use anyhow::Result;

use taglytics_store::QueryStore;
use taglytics_types::ProjectId;

use crate::output;
use crate::types::OutputFormat;

pub fn handle(store: &QueryStore, project: &ProjectId, format: OutputFormat) -> Result<()> {
    let queries = store.list(project)?;
    output::render_queries(&queries, format)
}
