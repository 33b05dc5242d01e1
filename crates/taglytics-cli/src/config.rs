use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Optional `config.toml` in the data directory.
///
/// Everything here can also be supplied on the command line; flags win.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    /// Load the config file, or defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Effective base URL: flag > config file > built-in default
    pub fn resolve_base_url(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}
