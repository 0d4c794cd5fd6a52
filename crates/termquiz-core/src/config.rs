//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Hub;
use crate::quiz::DEFAULT_QUESTION_COUNT;

/// Top-level termquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermquizConfig {
    /// Questions per quiz when `--count` is not given.
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,
    /// Where finished quizzes are recorded.
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
    /// Directory searched for decks when `--deck` is not given.
    #[serde(default = "default_deck_dir")]
    pub deck_dir: PathBuf,
    /// Restrict quizzes to one hub.
    #[serde(default)]
    pub default_hub: Option<Hub>,
    /// Fixed seed for reproducible quizzes.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}
fn default_history_path() -> PathBuf {
    PathBuf::from("./termquiz-history.json")
}
fn default_deck_dir() -> PathBuf {
    PathBuf::from("./decks")
}

impl Default for TermquizConfig {
    fn default() -> Self {
        Self {
            default_question_count: default_question_count(),
            history_path: default_history_path(),
            deck_dir: default_deck_dir(),
            default_hub: None,
            seed: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `termquiz.toml` in the current directory
/// 2. `~/.config/termquiz/config.toml`
///
/// Environment variable overrides: `TERMQUIZ_HISTORY`, `TERMQUIZ_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<TermquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("termquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<TermquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TermquizConfig::default(),
    };

    // Apply env var overrides
    if let Ok(history) = std::env::var("TERMQUIZ_HISTORY") {
        if !history.is_empty() {
            config.history_path = PathBuf::from(history);
        }
    }

    if let Ok(seed) = std::env::var("TERMQUIZ_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid TERMQUIZ_SEED: '{seed}'"))?;
        config.seed = Some(seed);
    }

    anyhow::ensure!(
        config.default_question_count >= 1,
        "default_question_count must be at least 1"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("termquiz"))
}
