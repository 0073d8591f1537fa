use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::identity::DEFAULT_PROFILE_URL_BASE;

pub const DEFAULT_THEME: &str = "dark";

/// Persisted viewer preferences.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Address of the signed-in user; `None` means nobody is "me".
    pub current_user: Option<String>,
    pub profile_url_base: String,
    pub theme: String,
    /// Use UTC instead of the local zone for day boundaries and times.
    pub use_utc: bool,
    pub last_transcript: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            current_user: None,
            profile_url_base: DEFAULT_PROFILE_URL_BASE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            use_utc: false,
            last_transcript: None,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "convo-view", "convo-view")?;
    let dir = proj.config_dir();
    if let Err(e) = fs::create_dir_all(dir) {
        tracing::warn!(error = %e, dir = %dir.display(), "failed to create config dir");
        return None;
    }
    Some(dir.join("settings.json"))
}

/// Read settings from `path`.
pub fn read_settings(path: &Path) -> Result<Settings, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from the platform config directory, falling back to
/// defaults when the file is missing or unreadable.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    if !path.exists() {
        return Settings::default();
    }
    match read_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "using default settings");
            Settings::default()
        }
    }
}

pub fn write_settings(path: &Path, settings: &Settings) -> Result<(), LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let data = serde_json::to_string_pretty(settings).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let mut file = fs::File::create(path).map_err(io_err)?;
    file.write_all(data.as_bytes()).map_err(io_err)?;
    Ok(())
}
