//! Supported languages and the static message catalogs.
//!
//! The catalogs are pure lookup tables keyed by [`ErrorCode`] and
//! [`Language`]. They carry the generic wording for each code; raise sites
//! that know more (the expected id length, which date failed) attach their
//! own translations to the error instead.

use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language error messages can be rendered in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "so")]
    Somali,
    #[serde(rename = "ar")]
    Arabic,
}

/// `(code, name)` pairs for every supported language.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 3] =
    [("en", "English"), ("so", "Somali"), ("ar", "Arabic")];

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 3] = [Language::English, Language::Somali, Language::Arabic];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Somali => "so",
            Language::Arabic => "ar",
        }
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Somali => "Somali",
            Language::Arabic => "Arabic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a language code or name is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: {0} (expected one of en, so, ar)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Accepts the code (`"so"`) or the English name (`"Somali"`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| {
                lang.code().eq_ignore_ascii_case(wanted) || lang.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Returns the catalog message for `code` in `language`.
pub fn catalog_message(code: ErrorCode, language: Language) -> &'static str {
    match language {
        Language::English => english(code),
        Language::Somali => somali(code),
        Language::Arabic => arabic(code),
    }
}

/// String-keyed catalog lookup, e.g. `("INVALID_ID_NUMBER", "ar")`.
///
/// Returns `None` when either key is unknown.
pub fn lookup(code: &str, language: &str) -> Option<&'static str> {
    let code = code.parse::<ErrorCode>().ok()?;
    let language = language.parse::<Language>().ok()?;
    Some(catalog_message(code, language))
}

fn english(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidIdNumber => "ID number must be numeric",
        ErrorCode::InvalidName => "Name contains invalid characters or is too long",
        ErrorCode::InvalidSex => "Sex must be Male/Female",
        ErrorCode::InvalidDate => {
            "Date must be in a supported format (dd-mm-yyyy, dd/mm/yyyy, yyyy-mm-dd, dd.mm.yyyy)"
        }
        ErrorCode::InconsistentDates => "Dates are inconsistent",
        ErrorCode::InvalidInput => "Input must be a record object",
        ErrorCode::MissingField => "A required field is missing",
    }
}

fn somali(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidIdNumber => "Lambarka aqoonsiga waa inuu noqdaa tiro sax ah",
        ErrorCode::InvalidName => "Magaca wuxuu leeyahay xarfo aan la aqbali karin ama wuu dheer yahay",
        ErrorCode::InvalidSex => "Jinsiga waa inuu noqdaa Lab ama Dhedig",
        ErrorCode::InvalidDate => {
            "Taariikhda waa inay noqoto qaab la aqbali karo (dd-mm-yyyy, dd/mm/yyyy, yyyy-mm-dd, dd.mm.yyyy)"
        }
        ErrorCode::InconsistentDates => "Taariikhyada ma wada waafaqsana",
        ErrorCode::InvalidInput => "Xogta la geliyay waa inay noqotaa diiwaan sax ah",
        ErrorCode::MissingField => "Goob loo baahan yahay ayaa maqan",
    }
}

fn arabic(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidIdNumber => "رقم الهوية يجب أن يتكون من أرقام صحيحة",
        ErrorCode::InvalidName => "الاسم يحتوي على أحرف غير مقبولة أو أنه طويل جداً",
        ErrorCode::InvalidSex => "الجنس يجب أن يكون ذكر أو أنثى",
        ErrorCode::InvalidDate => {
            "التاريخ يجب أن يكون بصيغة مقبولة (dd-mm-yyyy, dd/mm/yyyy, yyyy-mm-dd, dd.mm.yyyy)"
        }
        ErrorCode::InconsistentDates => "التواريخ غير متسقة",
        ErrorCode::InvalidInput => "المدخلات يجب أن تكون سجلاً صالحاً",
        ErrorCode::MissingField => "حقل مطلوب مفقود",
    }
}
