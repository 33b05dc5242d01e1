use anyhow::Result;
use std::path::PathBuf;

use taglytics_client::AnalysisClient;
use taglytics_store::QueryStore;

use crate::args::{Cli, Commands, QueryCommand};
use crate::config::Config;
use crate::handlers;
use crate::types::LogLevel;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_level);

    let data_dir = expand_tilde(&cli.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let config = Config::load_from(&data_dir.join("config.toml"))?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    let format = cli.format;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Commands::Tags { access_key } => {
            let client = AnalysisClient::new(&base_url)?;
            runtime.block_on(handlers::tags::handle(&client, &access_key.into(), format))
        }

        Commands::Query { command } => {
            let store = QueryStore::open(&data_dir.join("queries.db"))?;

            match command {
                QueryCommand::Create {
                    project,
                    access_key,
                    name,
                    groups,
                } => {
                    let client = AnalysisClient::new(&base_url)?;
                    runtime.block_on(handlers::query_create::handle(
                        &client,
                        &store,
                        &project.into(),
                        &access_key.into(),
                        name,
                        &groups,
                        format,
                    ))
                }
                QueryCommand::List { project } => {
                    handlers::query_list::handle(&store, &project.into(), format)
                }
            }
        }

        Commands::Run {
            project,
            index,
            tab,
        } => {
            let client = AnalysisClient::new(&base_url)?;
            let store = QueryStore::open(&data_dir.join("queries.db"))?;
            runtime.block_on(handlers::run::handle(
                &client,
                &store,
                &project.into(),
                index,
                tab.into(),
                format,
            ))
        }
    }
}

fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}
