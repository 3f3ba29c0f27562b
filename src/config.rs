//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Local config: `<dir>/.rstree.toml` (current directory unless `-C` is given)
//! 4. Environment variables: `RSTREE_*` prefix, `__` between section and key

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::OutputFormat;
use crate::application::ApplicationError;
use crate::domain::{NodeKeys, Traversal};

/// Tree rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeSettings {
    /// Traversal strategy used when none is given on the command line
    pub traversal: Traversal,
    /// JSON key holding a node's label
    pub label_key: String,
    /// JSON key holding a node's children
    pub children_key: String,
}

impl Default for TreeSettings {
    fn default() -> Self {
        let keys = NodeKeys::default();
        Self {
            traversal: Traversal::default(),
            label_key: keys.label,
            children_key: keys.children,
        }
    }
}

impl TreeSettings {
    pub fn node_keys(&self) -> NodeKeys {
        NodeKeys::new(self.label_key.clone(), self.children_key.clone())
    }
}

/// Word vector output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WordsSettings {
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Raw tree section: `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawTreeSettings {
    pub traversal: Option<Traversal>,
    pub label_key: Option<String>,
    pub children_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawWordsSettings {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub tree: RawTreeSettings,
    pub words: RawWordsSettings,
}

/// Unified configuration for rstree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub tree: TreeSettings,
    pub words: WordsSettings,
}

/// Get the XDG config directory for rstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rstree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".rstree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// An unset variable is `None`; a set but unparsable one is an error.
fn env_value<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

impl Settings {
    /// Overlay wins field by field where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            tree: TreeSettings {
                traversal: overlay.tree.traversal.unwrap_or(self.tree.traversal),
                label_key: overlay
                    .tree
                    .label_key
                    .clone()
                    .unwrap_or_else(|| self.tree.label_key.clone()),
                children_key: overlay
                    .tree
                    .children_key
                    .clone()
                    .unwrap_or_else(|| self.tree.children_key.clone()),
            },
            words: WordsSettings {
                format: overlay.words.format.unwrap_or(self.words.format),
                pretty: overlay.words.pretty.unwrap_or(self.words.pretty),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory searched for `.rstree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with(global_config_path().as_deref(), local_dir)
    }

    /// Load settings with an explicit global config path.
    ///
    /// A missing file at either location is skipped; an unreadable or
    /// malformed one is an error.
    pub fn load_with(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current)
    }

    /// Apply RSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RSTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("tree.traversal"))? {
            settings.tree.traversal = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Some(val) = env_value(config.get_string("tree.label_key"))? {
            settings.tree.label_key = val;
        }
        if let Some(val) = env_value(config.get_string("tree.children_key"))? {
            settings.tree.children_key = val;
        }
        if let Some(val) = env_value(config.get_string("words.format"))? {
            settings.words.format = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Some(val) = env_value(config.get_bool("words.pretty"))? {
            settings.words.pretty = val;
        }

        Ok(settings)
    }

    /// Serialize to TOML (for `config show` and `config init`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
