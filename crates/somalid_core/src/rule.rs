//! Validation rule configuration.

use serde::{Deserialize, Serialize};

/// Default exact id length.
pub const DEFAULT_ID_LENGTH: usize = 12;

/// Default maximum name length, in characters.
pub const DEFAULT_NAME_MAX_LENGTH: usize = 120;

/// Configuration controlling validation strictness.
///
/// A rule is passed by reference into every validation call and never
/// retained or mutated by the engine. Somali national ids have no published
/// issuer format, so [`Rule::default`] is
/// conservative: a 12-digit numeric id, separators tolerated, no required
/// prefix.
///
/// Every key is optional when loaded from a file; missing keys take the
/// default value.
///
/// # Example
///
/// ```rust
/// use somalid_core::Rule;
///
/// let rule = Rule::default();
/// assert_eq!(rule.id_length, Some(12));
/// assert!(rule.require_future_expiry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    /// Exact number of digits the id must have, if any
    pub id_length: Option<usize>,

    /// Prefix the id digits must start with, if any
    pub id_must_start: Option<String>,

    /// Strip spaces, dashes and other separators from the id before checking
    pub id_allow_separators: bool,

    /// Maximum name length in characters (after trimming)
    pub name_max_length: usize,

    /// Accept any Unicode letter (Arabic script included), not just Latin
    pub allow_non_latin_letters: bool,

    /// Reject records whose expiry date is not after the current moment
    pub require_future_expiry: bool,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            id_length: Some(DEFAULT_ID_LENGTH),
            id_must_start: None,
            id_allow_separators: true,
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
            allow_non_latin_letters: true,
            require_future_expiry: true,
        }
    }
}
