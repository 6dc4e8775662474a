//! RON settings loader
//!
//! Loads shrine settings from a RON file, with fallback to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use super::settings::ShrineSettings;

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "shrine_of_disorder.ron";

/// Get the default config directory
pub fn config_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "vatora", "ShrineOfDisorder") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        // Fallback to current directory
        PathBuf::from(".")
    }
}

/// Get the default settings file path
pub fn default_settings_path() -> PathBuf {
    config_directory().join(SETTINGS_FILE)
}

impl ShrineSettings {
    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, using the defaults if the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{}. Using default settings.", e);
            Self::default()
        })
    }

    /// Render these settings as pretty RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Write these settings to a RON file, creating parent directories
    pub fn export(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_ron()?).map_err(io_err)?;

        log::info!("Settings written to {}", path.display());
        Ok(())
    }
}
