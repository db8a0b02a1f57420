// File: crates/demo/src/config.rs
// Summary: Optional TOML page config; CLI flags override whatever it sets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use energy_charts::{PageLayout, Size};
use serde::Deserialize;

/// Contents of a `dashboard.toml`. Every key is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub data_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    /// Theme preset name (`light`, `dark`).
    pub theme: Option<String>,
    pub viewport: Option<Size>,
    pub layout: PageLayout,
}

impl PageConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid page config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in '{}'", path.display()))
    }
}
