use clap::{Parser, Subcommand};

use crate::types::{LogLevel, OutputFormat, TabArg};

#[derive(Parser)]
#[command(name = "taglytics")]
#[command(about = "Build, save and run tag-group analytics queries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.taglytics", global = true)]
    pub data_dir: String,

    /// Analytics server base URL (overrides config.toml)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the tag catalog of a project
    Tags {
        #[arg(long)]
        access_key: String,
    },

    /// Create and inspect saved queries
    Query {
        #[command(subcommand)]
        command: QueryCommand,
    },

    /// Execute a saved query against an analysis endpoint
    Run {
        #[arg(long)]
        project: String,

        /// Position of the saved query in `query list` order, zero-based
        #[arg(long)]
        index: usize,

        #[arg(long, default_value = "percentages")]
        tab: TabArg,
    },
}

#[derive(Subcommand)]
pub enum QueryCommand {
    /// Build a query from the live tag catalog and save it
    Create {
        #[arg(long)]
        project: String,

        #[arg(long)]
        access_key: String,

        /// Query name; defaults to the next "query #n" for the project
        #[arg(long)]
        name: Option<String>,

        /// Group spec, repeatable: --group funnel1=signup,purchase
        #[arg(long = "group", value_name = "NAME=TAG,TAG,...")]
        groups: Vec<String>,
    },

    /// List the queries saved for a project
    List {
        #[arg(long)]
        project: String,
    },
}
