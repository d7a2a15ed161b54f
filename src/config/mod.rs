//! Configuration loading for geolens

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".geolensrc.json";

/// Scoring and prompt options with documented defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringOptions {
    /// Force website-mode AIO bonuses. `None` infers from platform
    /// detection: recognized blog platforms score in blog mode.
    pub force_website: Option<bool>,
    /// Include Grok in the per-model citation scores (default: true)
    pub include_grok: bool,
    /// Character budget for the extracted text in revision prompts
    /// (default: 15000)
    pub prompt_char_budget: usize,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            force_website: None,
            include_grok: true,
            prompt_char_budget: 15_000,
        }
    }
}

/// Project configuration loaded from `.geolensrc.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Scoring options applied to every analysis
    pub scoring: ScoringOptions,
    /// Minimum overall score for a passing exit code
    pub threshold: Option<u8>,
}

/// Find and load the config file. Searches the working directory, then its
/// parents; a missing file yields the defaults.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        let candidate = d.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = d.parent();
    }
    None
}
