//! Editor configuration.
//!
//! Read from the JSON file named by `CHESS_EDITOR_CONFIG`. Every field is
//! optional; missing ones fall back to the built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::ui::theme::Theme;

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "CHESS_EDITOR_CONFIG";

pub const DEFAULT_TITLE: &str = "Chess Board Editor";
pub const DEFAULT_SUBTITLE: &str = "Press Ctrl+C to exit";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Shown in the top border of the board panel
    pub title: String,
    /// Shown in the bottom border of the board panel
    pub subtitle: String,
    pub theme: Theme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            theme: Theme::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Invalid editor config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("In config file {}", path.display()))
    }

    /// Load from the file named by `CHESS_EDITOR_CONFIG`, or defaults if it is unset
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// JSON schema describing the config file
    pub fn json_schema() -> anyhow::Result<String> {
        let schema = schema_for!(EditorConfig);
        serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")
    }
}
