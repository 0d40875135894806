//! Path management for BudgetWise
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETWISE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budgetwise` or `~/.config/budgetwise`
//! 3. Windows: `%APPDATA%\budgetwise`

use std::path::PathBuf;

use crate::error::BudgetwiseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGETWISE_DATA_DIR";

/// Manages all paths used by BudgetWise
#[derive(Debug, Clone)]
pub struct BudgetwisePaths {
    base_dir: PathBuf,
}

impl BudgetwisePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be
    /// determined.
    pub fn new() -> Result<Self, BudgetwiseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default YAML keyword table location
    pub fn keywords_yaml_file(&self) -> PathBuf {
        self.base_dir.join("keywords.yaml")
    }

    /// Default JSON keyword table location
    pub fn keywords_json_file(&self) -> PathBuf {
        self.base_dir.join("keywords.json")
    }

    /// Snapshot read when no path is given on the command line
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join("snapshot.json")
    }

    /// First keyword table file present in the base directory, YAML first
    pub fn existing_keywords_file(&self) -> Option<PathBuf> {
        [self.keywords_yaml_file(), self.keywords_json_file()]
            .into_iter()
            .find(|p| p.exists())
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetwiseError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            BudgetwiseError::Io(format!("Failed to create base directory: {}", e))
        })
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetwiseError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BudgetwiseError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budgetwise"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetwiseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetwiseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budgetwise"))
}
