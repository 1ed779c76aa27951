//! Builder pattern for creating validation rules.

use crate::Rule;

/// Builder for creating a [`Rule`].
///
/// Starts from [`Rule::default`] and overrides individual settings.
///
/// # Example
///
/// ```rust
/// use somalid_core::RuleBuilder;
///
/// let rule = RuleBuilder::new()
///     .id_length(10)
///     .id_must_start("93")
///     .allow_separators(false)
///     .name_max_length(50)
///     .allow_non_latin_letters(false)
///     .require_future_expiry(false)
///     .build();
///
/// assert_eq!(rule.id_length, Some(10));
/// assert_eq!(rule.id_must_start.as_deref(), Some("93"));
/// ```
#[derive(Debug, Default)]
pub struct RuleBuilder {
    rule: Rule,
}

impl RuleBuilder {
    /// Creates a new builder seeded with the default rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the id to have exactly `length` digits.
    pub fn id_length(mut self, length: usize) -> Self {
        self.rule.id_length = Some(length);
        self
    }

    /// Accepts ids of any length.
    pub fn any_id_length(mut self) -> Self {
        self.rule.id_length = None;
        self
    }

    /// Requires the id digits to start with `prefix`.
    pub fn id_must_start(mut self, prefix: impl Into<String>) -> Self {
        self.rule.id_must_start = Some(prefix.into());
        self
    }

    /// Sets whether separators are stripped from the id before checking.
    pub fn allow_separators(mut self, allow: bool) -> Self {
        self.rule.id_allow_separators = allow;
        self
    }

    /// Sets the maximum name length.
    pub fn name_max_length(mut self, max: usize) -> Self {
        self.rule.name_max_length = max;
        self
    }

    /// Sets whether non-Latin letters are accepted in names.
    pub fn allow_non_latin_letters(mut self, allow: bool) -> Self {
        self.rule.allow_non_latin_letters = allow;
        self
    }

    /// Sets whether the expiry date must lie in the future.
    pub fn require_future_expiry(mut self, require: bool) -> Self {
        self.rule.require_future_expiry = require;
        self
    }

    /// Builds the rule.
    pub fn build(self) -> Rule {
        self.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults_match_rule_default() {
        assert_eq!(RuleBuilder::new().build(), Rule::default());
    }

    #[test]
    fn test_builder_overrides() {
        let rule = RuleBuilder::new()
            .any_id_length()
            .allow_separators(false)
            .allow_non_latin_letters(false)
            .build();

        assert_eq!(rule.id_length, None);
        assert!(!rule.id_allow_separators);
        assert!(!rule.allow_non_latin_letters);
        assert!(rule.require_future_expiry);
    }
}
