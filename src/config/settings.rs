//! User settings for BudgetWise
//!
//! Settings live in `config.json`. The keyword table is loaded separately
//! from YAML or JSON and falls back to the built-in table.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::BudgetwisePaths;
use crate::error::BudgetwiseError;
use crate::models::CategoryKeywordTable;
use crate::storage::{read_json_required, read_yaml_required, write_json_atomic};

/// User settings for BudgetWise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default tracing filter directive, overridden by `BUDGETWISE_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Explicit keyword table path; relative paths resolve against the base
    /// directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    "budgetwise=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            log_filter: default_log_filter(),
            keyword_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetwisePaths) -> Result<Self, BudgetwiseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetwiseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetwiseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetwisePaths) -> Result<(), BudgetwiseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Which keyword table file applies, if any
    pub fn keyword_file_path(&self, paths: &BudgetwisePaths) -> Option<PathBuf> {
        match &self.keyword_file {
            Some(path) if path.is_absolute() => Some(path.clone()),
            Some(path) => Some(paths.base_dir().join(path)),
            None => paths.existing_keywords_file(),
        }
    }

    /// Load the keyword table, falling back to the built-in one
    ///
    /// An explicitly configured file that is missing or invalid is an error.
    /// Without configuration, `keywords.yaml` or `keywords.json` in the base
    /// directory is used when present.
    pub fn keyword_table(
        &self,
        paths: &BudgetwisePaths,
    ) -> Result<CategoryKeywordTable, BudgetwiseError> {
        match self.keyword_file_path(paths) {
            Some(path) => load_keyword_table(&path),
            None => {
                debug!("using built-in keyword table");
                Ok(CategoryKeywordTable::default())
            }
        }
    }
}

/// Read a keyword table from YAML or JSON, chosen by file extension
pub fn load_keyword_table(path: &Path) -> Result<CategoryKeywordTable, BudgetwiseError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let table: CategoryKeywordTable = match extension.as_deref() {
        Some("yaml") | Some("yml") => read_yaml_required(path)?,
        Some("json") => read_json_required(path)?,
        _ => {
            return Err(BudgetwiseError::Config(format!(
                "Unsupported keyword file format: {}",
                path.display()
            )))
        }
    };

    debug!(path = %path.display(), categories = table.len(), "loaded keyword table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn temp_paths() -> (TempDir, BudgetwisePaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.log_filter, "budgetwise=info");
        assert_eq!(settings.keyword_file, None);
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, paths) = temp_paths();

        let mut settings = Settings::default();
        settings.currency_symbol = "₹".into();
        settings.keyword_file = Some(PathBuf::from("rules.yaml"));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let (_temp_dir, paths) = temp_paths();
        fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.log_filter, "budgetwise=info");
    }

    #[test]
    fn test_invalid_settings_is_config_error() {
        let (_temp_dir, paths) = temp_paths();
        fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetwiseError::Config(_)));
    }

    #[test]
    fn test_keyword_table_falls_back_to_default() {
        let (_temp_dir, paths) = temp_paths();
        let table = Settings::default().keyword_table(&paths).unwrap();
        assert_eq!(table, CategoryKeywordTable::default());
    }

    #[test]
    fn test_keyword_table_from_yaml() {
        let (_temp_dir, paths) = temp_paths();
        fs::write(
            paths.keywords_yaml_file(),
            "- category: Pets\n  keywords: [Vet, kibble]\n- category: Garden\n  keywords: [seeds]\n",
        )
        .unwrap();

        let table = Settings::default().keyword_table(&paths).unwrap();
        let names: Vec<_> = table.categories().collect();
        assert_eq!(names, vec!["Pets", "Garden"]);
        assert_eq!(table.rules()[0].keywords, vec!["vet", "kibble"]);
    }

    #[test]
    fn test_configured_keyword_file_from_json() {
        let (_temp_dir, paths) = temp_paths();
        fs::write(
            paths.base_dir().join("rules.json"),
            r#"[{"category": "Coffee", "keywords": ["latte"]}]"#,
        )
        .unwrap();

        let settings = Settings {
            keyword_file: Some(PathBuf::from("rules.json")),
            ..Settings::default()
        };
        let table = settings.keyword_table(&paths).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_configured_keyword_file_missing_is_error() {
        let (_temp_dir, paths) = temp_paths();
        let settings = Settings {
            keyword_file: Some(PathBuf::from("missing.yaml")),
            ..Settings::default()
        };
        assert!(settings.keyword_table(&paths).is_err());
    }

    #[test]
    fn test_invalid_keyword_table_is_rejected() {
        let (_temp_dir, paths) = temp_paths();
        fs::write(
            paths.keywords_yaml_file(),
            "- category: Pets\n  keywords: [vet]\n- category: Pets\n  keywords: [dog]\n",
        )
        .unwrap();
        assert!(Settings::default().keyword_table(&paths).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let (_temp_dir, paths) = temp_paths();
        let path = paths.base_dir().join("rules.toml");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            load_keyword_table(&path),
            Err(BudgetwiseError::Config(_))
        ));
    }
}
