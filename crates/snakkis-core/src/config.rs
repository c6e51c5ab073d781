//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::conversation::{DEFAULT_REPLY_DELAY_MS, DEFAULT_REPLY_TEXT};
use crate::types::Topic;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Delay before a canned reply lands, in milliseconds
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// The canned acknowledgement text
    #[serde(default = "default_reply_text")]
    pub reply_text: String,

    /// Replacement topic catalog (built-in catalog when absent)
    #[serde(default)]
    pub topics: Option<Vec<Topic>>,
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}
fn default_reply_text() -> String {
    DEFAULT_REPLY_TEXT.into()
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    /// `config_path` is the path to config.yaml.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;

        // Reply delay (env var override)
        if let Ok(delay) = std::env::var("SNAKKIS_REPLY_DELAY_MS") {
            config.reply_delay_ms = delay
                .parse()
                .context("SNAKKIS_REPLY_DELAY_MS must be an integer")?;
        }

        // Reply text (env var override)
        if let Ok(text) = std::env::var("SNAKKIS_REPLY_TEXT") {
            config.reply_text = text;
        }

        // Validation
        if config.reply_text.trim().is_empty() {
            anyhow::bail!("reply_text must not be empty");
        }
        if let Some(ref topics) = config.topics {
            if topics.is_empty() {
                anyhow::bail!("topics must not be an empty list (omit the key for the built-in catalog)");
            }
        }

        Ok(config)
    }

    /// Load config from the default location (project_root/config.yaml)
    pub fn load_from_dir(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join("config.yaml");
        Self::load(&config_path)
    }

    /// The effective topic catalog.
    pub fn topics(&self) -> Vec<Topic> {
        self.topics
            .clone()
            .unwrap_or_else(crate::types::builtin_topics)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            reply_text: default_reply_text(),
            topics: None,
        }
    }
}
