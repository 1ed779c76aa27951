//! Masking and redaction of identity data for logs and exports.
//!
//! Redaction is idempotent: redacting a record twice gives the same result as
//! redacting it once.

use regex::Regex;
use somalid_core::{InputRecord, InputValue, ValidatedRecord, keys};
use std::sync::LazyLock;

/// Character that replaces hidden id digits.
pub const MASK_CHAR: char = '*';

/// Replacement text for redacted fields.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Fields [`redact`] hides when no explicit list is given. The id is masked;
/// the others are replaced by [`REDACTION_MARKER`].
pub const DEFAULT_REDACTED_FIELDS: [&str; 8] = [
    keys::ID_NUMBER,
    keys::NAME,
    keys::DATE_OF_BIRTH,
    keys::DATE_OF_ISSUE,
    keys::DATE_OF_EXPIRY,
    keys::DOB_ISO,
    keys::ISSUE_ISO,
    keys::EXPIRY_ISO,
];

/// Shape [`redact`] leaves behind for an id: the default head and tail around
/// at least one mask character.
static MASKED_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}\*+[0-9]{3}$").expect("Invalid masked id regex"));

/// How many leading and trailing digits stay visible when masking an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskSpec {
    pub head: usize,
    pub tail: usize,
}

impl MaskSpec {
    pub fn new(head: usize, tail: usize) -> Self {
        Self { head, tail }
    }
}

impl Default for MaskSpec {
    fn default() -> Self {
        Self { head: 2, tail: 3 }
    }
}

/// Masks an id number, keeping `head` leading and `tail` trailing digits.
///
/// Non-digits are dropped first. When `head + tail` covers every digit there
/// is nothing to hide and the digits come back unchanged.
///
/// # Example
///
/// ```rust
/// use somalid_validator::{MaskSpec, mask_id};
///
/// assert_eq!(mask_id("934265782412", MaskSpec::default()), "93*******412");
/// assert_eq!(mask_id("934265782412", MaskSpec::new(3, 2)), "934*******12");
/// ```
pub fn mask_id(raw: &str, spec: MaskSpec) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    if spec.head.saturating_add(spec.tail) >= digits.len() {
        return digits.into_iter().collect();
    }

    let hidden = digits.len() - spec.head - spec.tail;
    let mut masked = String::with_capacity(digits.len());
    masked.extend(&digits[..spec.head]);
    masked.extend(std::iter::repeat_n(MASK_CHAR, hidden));
    masked.extend(&digits[digits.len() - spec.tail..]);
    masked
}

/// Redacts the given fields of a structured record.
///
/// The id field is masked with [`MaskSpec::default`], or replaced by
/// [`REDACTION_MARKER`] when it is a map or list; every other listed field
/// becomes the marker. Absent or empty fields, ids already in the masked
/// shape and fields already holding the marker are left alone.
/// Non-map inputs are returned unchanged.
pub fn redact(value: &InputValue, fields: &[&str]) -> InputValue {
    let Some(map) = value.as_map() else {
        return value.clone();
    };

    let mut out = map.clone();
    for &field in fields {
        let Some(current) = out.get(field) else {
            continue;
        };
        if current.is_empty() {
            continue;
        }
        if let Some(replacement) = redacted_value(field, current) {
            out.insert(field.to_string(), replacement);
        }
    }
    InputValue::Map(out)
}

fn redacted_value(field: &str, current: &InputValue) -> Option<InputValue> {
    if current.as_string() == Some(REDACTION_MARKER) {
        return None;
    }

    if field == keys::ID_NUMBER {
        let Some(text) = current.to_text() else {
            return Some(InputValue::from(REDACTION_MARKER));
        };
        if MASKED_ID.is_match(&text) {
            return None;
        }
        return Some(InputValue::String(mask_id(&text, MaskSpec::default())));
    }

    Some(InputValue::from(REDACTION_MARKER))
}

/// Redacts a structured record using [`DEFAULT_REDACTED_FIELDS`].
pub fn redact_default(value: &InputValue) -> InputValue {
    redact(value, &DEFAULT_REDACTED_FIELDS)
}

/// Produces a redacted view of a validated record, safe to log.
///
/// Sex is kept; every other field is hidden.
pub fn redact_record(record: &ValidatedRecord) -> InputValue {
    let fields = [
        (keys::ID_NUMBER, record.id_number.as_str()),
        (keys::NAME, record.name.as_str()),
        (keys::SEX, record.sex.as_str()),
        (keys::DOB_ISO, record.dob_iso()),
        (keys::ISSUE_ISO, record.issue_iso()),
        (keys::EXPIRY_ISO, record.expiry_iso()),
    ];
    let map: InputRecord = fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), InputValue::from(value)))
        .collect();

    redact_default(&InputValue::Map(map))
}
