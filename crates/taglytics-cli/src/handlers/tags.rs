use anyhow::Result;

use taglytics_client::AnalysisClient;
use taglytics_types::AccessKey;

use crate::output;
use crate::types::OutputFormat;

pub async fn handle(
    client: &AnalysisClient,
    access_key: &AccessKey,
    format: OutputFormat,
) -> Result<()> {
    let tags = client.fetch_tags(access_key).await?;
    output::render_tags(&tags, format)
}
