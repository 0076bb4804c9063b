//! Deprecated SCSS deep-combinator rewrite.

pub const DEFAULT_STYLE_TAG: &str = r#"<style lang="scss">"#;
pub const DEFAULT_LEGACY_TOKEN: &str = "/deep/";
pub const DEFAULT_PATTERN: &str = "& /deep/";
pub const DEFAULT_REPLACEMENT: &str = "::v-deep";

/// Textual rewrite applied to component sources that still use `/deep/`.
///
/// The rewrite only fires when the text carries both `style_tag` and
/// `legacy_token`; every non-overlapping `pattern` is then replaced by
/// `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepSelectorRule {
    pub style_tag: String,
    pub legacy_token: String,
    pub pattern: String,
    pub replacement: String,
}

impl Default for DeepSelectorRule {
    fn default() -> Self {
        Self {
            style_tag: DEFAULT_STYLE_TAG.to_string(),
            legacy_token: DEFAULT_LEGACY_TOKEN.to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

impl DeepSelectorRule {
    /// Whether the text carries both markers.
    pub fn matches(&self, content: &str) -> bool {
        content.contains(&self.style_tag) && content.contains(&self.legacy_token)
    }

    /// Rewrite `content`, returning `None` when nothing would change.
    pub fn apply(&self, content: &str) -> Option<String> {
        if !self.matches(content) {
            return None;
        }
        let fixed = content.replace(&self.pattern, &self.replacement);
        if fixed == content { None } else { Some(fixed) }
    }

    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("style_tag", &self.style_tag),
            ("legacy_token", &self.legacy_token),
            ("pattern", &self.pattern),
            ("replacement", &self.replacement),
        ] {
            if value.is_empty() {
                return Err(format!("rule.{} must not be empty", field));
            }
        }

        // A replacement that reintroduces a marker would keep matching on every run.
        if self.replacement.contains(&self.pattern) {
            return Err(format!(
                "rule.replacement '{}' must not contain rule.pattern '{}'",
                self.replacement, self.pattern
            ));
        }
        if self.replacement.contains(&self.legacy_token) {
            return Err(format!(
                "rule.replacement '{}' must not contain rule.legacy_token '{}'",
                self.replacement, self.legacy_token
            ));
        }

        Ok(())
    }
}
