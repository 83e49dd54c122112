//! Settings manager
//!
//! Owns the active configuration together with the file it came from.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "slidecanvas";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Manager for the platform config file, not yet loaded.
    pub fn new() -> SettingsResult<Self> {
        Ok(Self::with_path(Self::config_file_path()?))
    }

    /// Manager for an explicit file path, starting from defaults.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Config::default(),
        }
    }

    /// Platform configuration directory for SlideCanvas.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Default configuration file path.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Create the platform configuration directory if it is missing.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Load the file. A missing file leaves the defaults in place and returns `false`.
    pub fn load(&mut self) -> SettingsResult<bool> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "No config file, using defaults");
            self.config = Config::default();
            return Ok(false);
        }

        self.config = Config::load_from_file(&self.path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", self.path.display(), e)))?;
        Ok(true)
    }

    /// Load the file, falling back to defaults when it is missing or unreadable.
    pub fn load_or_default(&mut self) -> &Config {
        if let Err(e) = self.load() {
            tracing::warn!("{}; using default settings", e);
            self.config = Config::default();
        }
        &self.config
    }

    /// Write the current config, creating parent directories as needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.config
            .save_to_file(&self.path)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", self.path.display(), e)))
    }
}
