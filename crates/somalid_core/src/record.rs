//! Record types flowing in and out of the validation engine.
//!
//! - [`RawRecord`]: untrusted text as supplied by the caller
//! - [`ValidatedRecord`]: the normalized result of a successful validation
//!
//! Serialized field names follow the public record layout (`idNumber`,
//! `dobDMY`, `dobISO`, ...) so JSON produced and consumed by other tools
//! lines up with these types.

use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record key names.
pub mod keys {
    pub const ID_NUMBER: &str = "idNumber";
    pub const NAME: &str = "name";
    pub const SEX: &str = "sex";
    pub const DATE_OF_BIRTH: &str = "dobDMY";
    pub const DATE_OF_ISSUE: &str = "issueDMY";
    pub const DATE_OF_EXPIRY: &str = "expiryDMY";
    pub const DOB_ISO: &str = "dobISO";
    pub const ISSUE_ISO: &str = "issueISO";
    pub const EXPIRY_ISO: &str = "expiryISO";

    /// Keys a structured record must expose, in validation order.
    pub const REQUIRED: [&str; 6] = [
        ID_NUMBER,
        NAME,
        SEX,
        DATE_OF_BIRTH,
        DATE_OF_ISSUE,
        DATE_OF_EXPIRY,
    ];
}

/// Untrusted identity record.
///
/// Each date may be in any accepted textual format (`dd-mm-yyyy`,
/// `dd/mm/yyyy`, `yyyy-mm-dd`, `dd.mm.yyyy`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "idNumber")]
    pub id_number: String,

    pub name: String,

    pub sex: String,

    #[serde(rename = "dobDMY")]
    pub date_of_birth: String,

    #[serde(rename = "issueDMY")]
    pub date_of_issue: String,

    #[serde(rename = "expiryDMY")]
    pub date_of_expiry: String,
}

impl RawRecord {
    /// Creates a record from its six fields, in layout order.
    pub fn new(
        id_number: impl Into<String>,
        name: impl Into<String>,
        sex: impl Into<String>,
        date_of_birth: impl Into<String>,
        date_of_issue: impl Into<String>,
        date_of_expiry: impl Into<String>,
    ) -> Self {
        Self {
            id_number: id_number.into(),
            name: name.into(),
            sex: sex.into(),
            date_of_birth: date_of_birth.into(),
            date_of_issue: date_of_issue.into(),
            date_of_expiry: date_of_expiry.into(),
        }
    }

    /// Borrows the three date strings.
    pub fn dates(&self) -> DateTriple<'_> {
        DateTriple {
            birth: &self.date_of_birth,
            issue: &self.date_of_issue,
            expiry: &self.date_of_expiry,
        }
    }
}

/// The three raw date strings of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTriple<'a> {
    pub birth: &'a str,
    pub issue: &'a str,
    pub expiry: &'a str,
}

/// Which of a record's dates a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Birth,
    Issue,
    Expiry,
}

impl DateField {
    /// Human-readable label of the field in `language`.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (DateField::Birth, Language::English) => "Date of Birth",
            (DateField::Issue, Language::English) => "Date of Issue",
            (DateField::Expiry, Language::English) => "Date of Expiry",
            (DateField::Birth, Language::Somali) => "Taariikhda dhalashada",
            (DateField::Issue, Language::Somali) => "Taariikhda bixinta",
            (DateField::Expiry, Language::Somali) => "Taariikhda dhicitaanka",
            (DateField::Birth, Language::Arabic) => "تاريخ الميلاد",
            (DateField::Issue, Language::Arabic) => "تاريخ الإصدار",
            (DateField::Expiry, Language::Arabic) => "تاريخ الانتهاء",
        }
    }

    /// Record key holding this date.
    pub fn key(&self) -> &'static str {
        match self {
            DateField::Birth => keys::DATE_OF_BIRTH,
            DateField::Issue => keys::DATE_OF_ISSUE,
            DateField::Expiry => keys::DATE_OF_EXPIRY,
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::English))
    }
}

/// Canonical sex label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ISO-8601 renderings (UTC midnight) of a record's three dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDates {
    #[serde(rename = "dobISO")]
    pub dob_iso: String,

    #[serde(rename = "issueISO")]
    pub issue_iso: String,

    #[serde(rename = "expiryISO")]
    pub expiry_iso: String,
}

/// A fully validated, normalized record.
///
/// Owned by the caller; the engine keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    /// Id digits with separators removed
    #[serde(rename = "idNumber")]
    pub id_number: String,

    /// Trimmed name with internal whitespace collapsed
    pub name: String,

    pub sex: Sex,

    #[serde(flatten)]
    pub dates: NormalizedDates,
}

impl ValidatedRecord {
    pub fn dob_iso(&self) -> &str {
        &self.dates.dob_iso
    }

    pub fn issue_iso(&self) -> &str {
        &self.dates.issue_iso
    }

    pub fn expiry_iso(&self) -> &str {
        &self.dates.expiry_iso
    }
}
