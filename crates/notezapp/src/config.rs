use crate::error::{NotezError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Environment override for the config directory. Scripted sessions and
/// tests set this to keep state out of the user's home.
pub const CONFIG_DIR_ENV: &str = "NOTEZ_CONFIG_DIR";

/// Settings for notez, stored as config.json in the config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotezConfig {
    /// Treat out-of-range positions as an error instead of ignoring them.
    #[serde(default)]
    pub strict_indexes: bool,

    /// Fallback path when `save`/`load` is issued without an explicit file.
    #[serde(default)]
    pub default_file: Option<PathBuf>,
}

impl NotezConfig {
    /// Look up a setting by key, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "strict_indexes" => Some(self.strict_indexes.to_string()),
            "default_file" => Some(
                self.default_file
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "unset".to_string()),
            ),
            _ => None,
        }
    }

    /// Set a setting from string input. The error is a user-facing message.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "strict_indexes" => {
                self.strict_indexes = value
                    .parse()
                    .map_err(|_| format!("strict_indexes must be true or false, got {}", value))?;
                Ok(())
            }
            "default_file" => {
                if value == "unset" {
                    self.default_file = None;
                } else {
                    self.default_file = Some(PathBuf::from(value));
                }
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotezConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

/// Resolve the directory holding config.json and the session logs.
///
/// `NOTEZ_CONFIG_DIR` wins when set; otherwise the platform config dir for
/// the notez application is used.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let dirs = ProjectDirs::from("com", "notez", "notez")
        .ok_or_else(|| NotezError::Input("Could not determine a config directory".to_string()))?;
    Ok(dirs.config_dir().to_path_buf())
}
