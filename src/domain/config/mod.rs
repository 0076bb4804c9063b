mod error;
pub mod parse;

use std::path::PathBuf;

use crate::domain::DeepSelectorRule;

pub use error::ConfigError;
pub use parse::parse_config_content;

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "adminfix.toml";
pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_SUFFIX: &str = ".vue";

/// Resolved settings for a fix or scan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixConfig {
    /// Source directory, relative to the working directory unless absolute.
    pub source_dir: PathBuf,
    /// File-name suffix selecting component files.
    pub suffix: String,
    pub rule: DeepSelectorRule,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            suffix: DEFAULT_SUFFIX.to_string(),
            rule: DeepSelectorRule::default(),
        }
    }
}

impl FixConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("fix.source_dir must not be empty".into()));
        }
        if self.suffix.is_empty() {
            return Err(ConfigError::Invalid("fix.suffix must not be empty".into()));
        }
        if self.suffix.contains('/') || self.suffix.contains('\\') {
            return Err(ConfigError::Invalid(format!(
                "fix.suffix '{}' must be a file-name suffix, not a path",
                self.suffix
            )));
        }
        self.rule.validate().map_err(ConfigError::Invalid)
    }
}
