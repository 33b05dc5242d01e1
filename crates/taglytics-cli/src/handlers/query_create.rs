use anyhow::{bail, Context, Result};

use taglytics_client::AnalysisClient;
use taglytics_engine::QueryDraft;
use taglytics_store::QueryStore;
use taglytics_types::{AccessKey, ProjectId};

use crate::output;
use crate::types::OutputFormat;

/// Build a draft from the live tag catalog, apply the group specs
/// through the engine operations and persist the result.
pub async fn handle(
    client: &AnalysisClient,
    store: &QueryStore,
    project: &ProjectId,
    access_key: &AccessKey,
    name: Option<String>,
    group_specs: &[String],
    format: OutputFormat,
) -> Result<()> {
    if group_specs.is_empty() {
        bail!("At least one --group NAME=TAG,... is required");
    }

    let catalog = client.fetch_tags(access_key).await?;
    let mut draft = QueryDraft::new(catalog);

    for spec in group_specs {
        let (group_name, tag_list) = parse_group_spec(spec)?;
        for tag in &tag_list {
            draft = draft
                .toggle_select(tag)
                .with_context(|| format!("In group spec '{}'", spec))?;
        }
        draft = draft.move_selected_to(group_name)?;
    }

    let name = match name {
        Some(name) => name,
        None => store.next_query_name(project)?,
    };

    let query = draft.save(&name)?;
    store.save(project, &query)?;

    output::render_saved(&query, format)
}

/// "funnel1=signup,purchase" -> ("funnel1", ["signup", "purchase"])
fn parse_group_spec(spec: &str) -> Result<(&str, Vec<&str>)> {
    let Some((name, tags)) = spec.split_once('=') else {
        bail!("Invalid group spec '{}': expected NAME=TAG,TAG,...", spec);
    };

    let tags: Vec<&str> = tags
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tags.is_empty() {
        bail!("Invalid group spec '{}': no tags listed", spec);
    }

    Ok((name.trim(), tags))
}
