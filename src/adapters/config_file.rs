//! Locate and load `adminfix.toml`.

use std::fs;
use std::path::Path;

use crate::domain::config::{self, CONFIG_FILE, ConfigError};
use crate::domain::{AppError, FixConfig};

/// Load configuration from an explicit path, or from `adminfix.toml` under `work_dir`.
///
/// An explicit path must exist; the implicit file is optional and falls back to defaults.
pub fn load_fix_config(work_dir: &Path, explicit: Option<&Path>) -> Result<FixConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::Missing(path.to_path_buf()).into());
            }
            path.to_path_buf()
        }
        None => {
            let implicit = work_dir.join(CONFIG_FILE);
            if !implicit.is_file() {
                tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, work_dir.display());
                return Ok(FixConfig::default());
            }
            implicit
        }
    };

    tracing::debug!("loading config from {}", path.display());
    let content = fs::read_to_string(&path).map_err(|e| AppError::file_access(&path, e))?;
    Ok(config::parse_config_content(&content)?)
}
