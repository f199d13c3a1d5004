use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{BibleRefsError, Result};
use crate::passage::default_bible_path;

/// Name of the configuration file stored inside the `.biblerefs` directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Name of the hidden directory used to store project settings and data.
pub const BIBLEREFS_DIR: &str = ".biblerefs";

/// Configuration for a biblerefs project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BibleRefsConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Bible data file; relative paths are taken from the project root.
    /// Unset means `.biblerefs/nvi.json`.
    pub bible_path: Option<String>,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for BibleRefsConfig {
    fn default() -> Self {
        Self {
            version: 1,
            bible_path: None,
            log_filter: "warn".to_string(),
        }
    }
}

/// Returns the path to the `.biblerefs` directory within the given project root.
pub fn get_biblerefs_dir(project_root: &Path) -> PathBuf {
    project_root.join(BIBLEREFS_DIR)
}

/// Returns the path to the configuration file (`config.json`) within the `.biblerefs` directory.
pub fn get_config_path(project_root: &Path) -> PathBuf {
    get_biblerefs_dir(project_root).join(CONFIG_FILENAME)
}

/// Resolves where the Bible data file lives for this project.
pub fn resolve_bible_path(project_root: &Path, config: &BibleRefsConfig) -> PathBuf {
    match &config.bible_path {
        Some(p) => {
            let path = PathBuf::from(p);
            if path.is_absolute() {
                path
            } else {
                project_root.join(path)
            }
        }
        None => default_bible_path(&get_biblerefs_dir(project_root)),
    }
}

/// Loads the configuration from disk.
///
/// If the configuration file does not exist, returns the default
/// configuration.
pub fn load_config(project_root: &Path) -> Result<BibleRefsConfig> {
    let config_path = get_config_path(project_root);

    if !config_path.exists() {
        return Ok(BibleRefsConfig::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| BibleRefsError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: BibleRefsConfig =
        serde_json::from_str(&contents).map_err(|e| BibleRefsError::Config {
            message: format!(
                "failed to parse config file '{}': {}",
                config_path.display(),
                e
            ),
        })?;

    Ok(config)
}

/// Writes the configuration as pretty JSON, creating `.biblerefs/` if needed.
///
/// The file is staged as `config.tmp` and renamed over `config.json`, so a
/// reader never sees a half-written file.
pub fn save_config(project_root: &Path, config: &BibleRefsConfig) -> Result<()> {
    let config_path = get_config_path(project_root);
    let config_error = |action: &str, e: &dyn std::fmt::Display| BibleRefsError::Config {
        message: format!("cannot {} {}: {}", action, config_path.display(), e),
    };

    fs::create_dir_all(get_biblerefs_dir(project_root))
        .map_err(|e| config_error("create directory for", &e))?;

    let json = serde_json::to_string_pretty(config).map_err(|e| config_error("encode", &e))?;

    let staged = config_path.with_extension("tmp");
    fs::write(&staged, json).map_err(|e| config_error("stage", &e))?;
    fs::rename(&staged, &config_path).map_err(|e| config_error("replace", &e))?;

    Ok(())
}
