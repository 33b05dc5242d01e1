//! Console rendering for catalog, saved queries and result tabs.

use anyhow::Result;
use owo_colors::OwoColorize;

use taglytics_runtime::TabView;
use taglytics_types::NamedQuery;

use crate::types::OutputFormat;

const RUN_FIRST: &str = "You have to run the query first";

pub fn render_tags(tags: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!(tags)),
        OutputFormat::Plain => {
            if tags.is_empty() {
                println!("No tags recorded for this project yet");
                return Ok(());
            }
            for tag in tags {
                println!("{}", tag);
            }
            Ok(())
        }
    }
}

pub fn render_queries(queries: &[NamedQuery], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&serde_json::to_value(queries)?),
        OutputFormat::Plain => {
            if queries.is_empty() {
                println!("No query found, create a new one");
                return Ok(());
            }

            for (index, query) in queries.iter().enumerate() {
                println!("[{}] {}", index, query.name.bold());
                for group in &query.groups {
                    println!("    {}: {}", group.name.cyan(), group.tag_names().join(", "));
                }
            }
            Ok(())
        }
    }
}

pub fn render_saved(query: &NamedQuery, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&serde_json::to_value(query)?),
        OutputFormat::Plain => {
            println!(
                "Saved {} ({} groups)",
                query.name.bold(),
                query.groups.len()
            );
            Ok(())
        }
    }
}

pub fn render_tab(view: &TabView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&tab_json(view)),
        OutputFormat::Plain => {
            print_tab_plain(view);
            Ok(())
        }
    }
}

fn print_tab_plain(view: &TabView) {
    match view {
        TabView::RunFirst => println!("{}", RUN_FIRST.yellow()),

        TabView::Percentages { query_name, rows } => {
            println!("Query {}", query_name.bold());
            for row in rows {
                match row.percentage {
                    Some(value) => println!("{}: {}%", row.group_name.cyan(), value),
                    None => println!("{}: -", row.group_name.cyan()),
                }
                println!("  {}", row.tags.join(" | "));
            }
        }

        TabView::Analysis { query_name, steps } => {
            println!("Query {}", query_name.bold());
            for step in steps {
                // Durations arrive in milliseconds; show seconds
                println!(
                    "{}. average duration: {}s",
                    step.step_number,
                    step.average_duration / 1000.0
                );
                let tags: Vec<String> = step
                    .tag_groups_sorted
                    .iter()
                    .flat_map(|g| g.tags_names.iter().cloned())
                    .collect();
                println!("   tags sorted: {}", tags.join(", "));
            }
        }
    }
}

fn tab_json(view: &TabView) -> serde_json::Value {
    match view {
        TabView::RunFirst => serde_json::json!({ "status": "run-first" }),

        TabView::Percentages { query_name, rows } => serde_json::json!({
            "query": query_name,
            "percentages": rows
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "group": row.group_name,
                        "tags": row.tags,
                        "percentage": row.percentage,
                    })
                })
                .collect::<Vec<_>>(),
        }),

        TabView::Analysis { query_name, steps } => serde_json::json!({
            "query": query_name,
            "steps": steps,
        }),
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
