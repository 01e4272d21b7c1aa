use sane_lists_engine::{ListConfig, ListConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid list settings: {0}")]
    InvalidSettings(#[from] ListConfigError),
}

/// On-disk settings. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spaces per nesting level.
    pub nested_indent: usize,
    /// Keep adjacent lists apart (`false` restores the legacy merge).
    pub sane: bool,
    /// Ignore the number of the first ordered marker.
    pub lazy_ol: bool,
    /// Columns per tab stop when expanding tabs.
    pub tab_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        let list = ListConfig::default();
        Self {
            nested_indent: list.indent_width,
            sane: list.strict_mode,
            lazy_ol: list.lazy_ol,
            tab_length: list.tab_length,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/sane-lists");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VAR` in a user-supplied path, e.g. `--config`.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Parser settings described by this file, validated.
    pub fn list_config(&self) -> Result<ListConfig, ConfigError> {
        let config = ListConfig::default()
            .with_indent_width(self.nested_indent)
            .with_strict_mode(self.sane)
            .with_lazy_ol(self.lazy_ol)
            .with_tab_length(self.tab_length);
        config.validate()?;
        Ok(config)
    }
}
