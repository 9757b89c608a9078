//! Global meow-schedule configuration.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::reminder::Permission;

static DEFAULT_DATA_DIR: &str = "~/.meow-schedule";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn is_undetermined(p: &Permission) -> bool {
    *p == Permission::Undetermined
}

/// Configuration at ~/.config/meow-schedule/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScheduleConfig {
    /// Directory holding the session and tag records
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Whether desktop reminders may be shown
    #[serde(default, skip_serializing_if = "is_undetermined")]
    pub notifications: Permission,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            data_dir: default_data_dir(),
            notifications: Permission::default(),
        }
    }
}

impl ScheduleConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("meow-schedule");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/meow-schedule/config.toml, creating a commented default on first run.
    pub fn load() -> ScheduleResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to ~/.config/meow-schedule/config.toml
    pub fn save(&self) -> ScheduleResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> ScheduleResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ScheduleError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        let contents = format!(
            "\
# meow-schedule configuration

# Where sessions and tags are stored:
# data_dir = \"{}\"

# Desktop reminders for tomorrow's shoots (granted, denied or undetermined):
# notifications = \"undetermined\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScheduleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
