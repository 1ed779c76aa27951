//! Error types for identity record validation.
//!
//! Every failure raised by the validation engine is a [`ValidationError`]
//! carrying exactly one [`ErrorCode`] from a closed set and a non-empty
//! English message. Translations are resolved on demand from the message
//! catalogs in [`crate::locale`], unless the raise site attached a more
//! precise translation of its own.

use crate::locale::{Language, catalog_message};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Machine-readable failure codes.
///
/// Serialized as the upper snake case strings consumers match on
/// (`"INVALID_ID_NUMBER"`, `"MISSING_FIELD"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Id number is not numeric, has the wrong length or prefix
    InvalidIdNumber,
    /// Name is empty, too long or has disallowed characters
    InvalidName,
    /// Sex is not one of male/female/m/f
    InvalidSex,
    /// A date did not match any accepted format or is not a calendar date
    InvalidDate,
    /// Dates are individually valid but out of order (or expired)
    InconsistentDates,
    /// Input is not a structured record
    InvalidInput,
    /// A required record key is absent
    MissingField,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::InvalidIdNumber,
        ErrorCode::InvalidName,
        ErrorCode::InvalidSex,
        ErrorCode::InvalidDate,
        ErrorCode::InconsistentDates,
        ErrorCode::InvalidInput,
        ErrorCode::MissingField,
    ];

    /// Returns the wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidIdNumber => "INVALID_ID_NUMBER",
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::InvalidSex => "INVALID_SEX",
            ErrorCode::InvalidDate => "INVALID_DATE",
            ErrorCode::InconsistentDates => "INCONSISTENT_DATES",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::MissingField => "MISSING_FIELD",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

/// Returned when parsing a string that is not a known [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

/// A typed validation failure.
///
/// `Display` renders the English message. Other languages are available
/// through [`ValidationError::message_in`]; [`ValidationError::localize`]
/// materializes every translation and marks one language as active, which is
/// what the multilingual entry point hands back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    translations: BTreeMap<Language, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<Language>,
}

impl ValidationError {
    /// Creates a new error. An empty message is replaced by the English
    /// catalog text for `code`.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            catalog_message(code, Language::English).to_string()
        } else {
            message
        };

        Self {
            code,
            message,
            translations: BTreeMap::new(),
            language: None,
        }
    }

    /// Creates a new invalid id number error.
    pub fn invalid_id_number(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidIdNumber, message)
    }

    /// Creates a new invalid name error.
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidName, message)
    }

    /// Creates a new invalid sex error.
    pub fn invalid_sex(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidSex, message)
    }

    /// Creates a new invalid date error.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDate, message)
    }

    /// Creates a new inconsistent dates error.
    pub fn inconsistent_dates(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InconsistentDates, message)
    }

    /// Creates a new invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Creates a new missing field error naming the absent key.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("Missing required field: {field}"),
        )
    }

    /// Attaches a site-specific translation, overriding the catalog text.
    pub fn with_translation(mut self, language: Language, message: impl Into<String>) -> Self {
        if language != Language::English {
            self.translations.insert(language, message.into());
        }
        self
    }

    /// The failure code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The English message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The active language, if this error went through [`Self::localize`].
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Returns the message in `language`.
    pub fn message_in(&self, language: Language) -> String {
        if language == Language::English {
            return self.message.clone();
        }
        match self.translations.get(&language) {
            Some(text) => text.clone(),
            None => catalog_message(self.code, language).to_string(),
        }
    }

    /// Returns the message in the active language, English if none is set.
    pub fn localized_message(&self) -> String {
        self.message_in(self.language.unwrap_or(Language::English))
    }

    /// Returns the message in every supported language, English included.
    pub fn all_messages(&self) -> BTreeMap<Language, String> {
        Language::ALL
            .into_iter()
            .map(|language| (language, self.message_in(language)))
            .collect()
    }

    /// Fills in every non-English translation without changing the active
    /// language.
    pub fn with_all_translations(mut self) -> Self {
        for language in Language::ALL {
            if language == Language::English || self.translations.contains_key(&language) {
                continue;
            }
            let text = catalog_message(self.code, language).to_string();
            self.translations.insert(language, text);
        }
        self
    }

    /// Fills in every translation and makes `language` the active one.
    pub fn localize(self, language: Language) -> Self {
        let mut localized = self.with_all_translations();
        localized.language = Some(language);
        localized
    }
}
