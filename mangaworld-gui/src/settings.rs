use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::GuiError;

/// Environment variable that overrides the catalog database location.
pub const DB_ENV_VAR: &str = "MANGAWORLD_DB";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DatabaseSettings {
    /// Catalog file. `None` uses [`default_db_path`].
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    900.0
}

fn default_height() -> f32 {
    600.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Where the database path in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbPathSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the settings file.
    SettingsFile,
    /// Built-in default location.
    Default,
}

impl std::fmt::Display for DbPathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Returns `~/.config/mangaworld/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mangaworld").join("settings.toml")
}

/// Returns `~/.local/share/mangaworld/catalog.db` (or the platform equivalent).
pub fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("mangaworld").join("catalog.db")
}

/// Pick the database path. Priority: env var > settings file > default.
pub fn resolve_db_path(settings: &AppSettings) -> (PathBuf, DbPathSource) {
    resolve_db_path_with(std::env::var_os(DB_ENV_VAR), settings)
}

fn resolve_db_path_with(env: Option<OsString>, settings: &AppSettings) -> (PathBuf, DbPathSource) {
    if let Some(value) = env.filter(|v| !v.is_empty()) {
        return (PathBuf::from(value), DbPathSource::EnvVar(DB_ENV_VAR));
    }
    if let Some(path) = &settings.database.path {
        return (path.clone(), DbPathSource::SettingsFile);
    }
    (default_db_path(), DbPathSource::Default)
}

/// Load settings from disk, returning defaults if missing or corrupt.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Save settings to disk atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), GuiError> {
    let parent = path
        .parent()
        .ok_or_else(|| GuiError::config(format!("No parent directory for {}", path.display())))?;
    std::fs::create_dir_all(parent)?;
    let contents = toml::to_string_pretty(settings)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
