//! Pure parse/validate for `adminfix.toml`.

use serde::Deserialize;

use super::{ConfigError, FixConfig};

/// Parse and validate fixer configuration from TOML content.
///
/// Missing keys fall back to the built-in defaults; unknown keys are rejected.
pub fn parse_config_content(content: &str) -> Result<FixConfig, ConfigError> {
    let dto: dto::ConfigDto = toml::from_str(content)?;
    let config = FixConfig::from(dto);
    config.validate()?;
    Ok(config)
}

mod dto {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::DeepSelectorRule;

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct ConfigDto {
        pub fix: Option<FixDto>,
        pub rule: Option<RuleDto>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct FixDto {
        pub source_dir: Option<PathBuf>,
        pub suffix: Option<String>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct RuleDto {
        pub style_tag: Option<String>,
        pub legacy_token: Option<String>,
        pub pattern: Option<String>,
        pub replacement: Option<String>,
    }

    impl From<ConfigDto> for FixConfig {
        fn from(dto: ConfigDto) -> Self {
            let defaults = FixConfig::default();
            let fix = dto.fix.unwrap_or_default();
            let rule = dto.rule.unwrap_or_default();
            let default_rule = defaults.rule;

            FixConfig {
                source_dir: fix.source_dir.unwrap_or(defaults.source_dir),
                suffix: fix.suffix.unwrap_or(defaults.suffix),
                rule: DeepSelectorRule {
                    style_tag: rule.style_tag.unwrap_or(default_rule.style_tag),
                    legacy_token: rule.legacy_token.unwrap_or(default_rule.legacy_token),
                    pattern: rule.pattern.unwrap_or(default_rule.pattern),
                    replacement: rule.replacement.unwrap_or(default_rule.replacement),
                },
            }
        }
    }
}
