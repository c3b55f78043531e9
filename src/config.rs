use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{slog_debug, Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Surface clipboard failures as an error notification instead of
    /// only logging them.
    #[serde(default = "default_true")]
    pub report_copy_errors: bool,
    /// Start with the keymap legend expanded.
    #[serde(default)]
    pub show_keymap: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_copy_errors: true,
            show_keymap: false,
        }
    }
}

impl Config {
    pub fn studio_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".studio"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::studio_dir()?.join("studio.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        slog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            slog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        slog_debug!(
            "Config loaded: report_copy_errors={}, show_keymap={}",
            config.report_copy_errors,
            config.show_keymap
        );
        Ok(config)
    }
}
