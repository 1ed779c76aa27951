//! Per-field validation: id number, name and sex.
//!
//! Each check is a pure function of its input and the [`Rule`]; it returns
//! the normalized value or a [`ValidationError`] with the field's code.

use regex::Regex;
use somalid_core::{Language, Result, Rule, Sex, ValidationError};
use std::sync::LazyLock;

static LATIN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s'.-]+$").expect("Invalid latin name regex"));

static UNICODE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}\s'.-]+$").expect("Invalid unicode name regex"));

/// Validates an id number and returns its digits.
///
/// With `id_allow_separators`, every non-digit character is stripped first
/// (`"9342-6578 2412"` becomes `"934265782412"`). Then, in order: the result
/// must be a non-empty run of ASCII digits, have the configured length, and
/// start with the configured prefix.
///
/// # Example
///
/// ```rust
/// use somalid_core::Rule;
/// use somalid_validator::validate_id_number;
///
/// let digits = validate_id_number("9342 6578 2412", &Rule::default()).unwrap();
/// assert_eq!(digits, "934265782412");
/// ```
pub fn validate_id_number(raw: &str, rule: &Rule) -> Result<String> {
    let digits: String = if rule.id_allow_separators {
        raw.chars().filter(char::is_ascii_digit).collect()
    } else {
        raw.to_string()
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid_id_number("ID number must be numeric"));
    }

    if let Some(length) = rule.id_length {
        if digits.len() != length {
            return Err(
                ValidationError::invalid_id_number(format!("ID number must be exactly {length} digits"))
                    .with_translation(
                        Language::Somali,
                        format!("Lambarka aqoonsiga waa inuu noqdaa {length} tiro oo keliya"),
                    )
                    .with_translation(
                        Language::Arabic,
                        format!("رقم الهوية يجب أن يتكون من {length} أرقام بالضبط"),
                    ),
            );
        }
    }

    if let Some(prefix) = rule.id_must_start.as_deref() {
        if !digits.starts_with(prefix) {
            return Err(
                ValidationError::invalid_id_number(format!("ID number must start with {prefix}"))
                    .with_translation(
                        Language::Somali,
                        format!("Lambarka aqoonsiga waa inuu ku bilaabmo {prefix}"),
                    )
                    .with_translation(
                        Language::Arabic,
                        format!("رقم الهوية يجب أن يبدأ بـ {prefix}"),
                    ),
            );
        }
    }

    Ok(digits)
}

/// Validates a name and returns it trimmed, with runs of whitespace
/// collapsed to a single space.
///
/// Length is counted in characters after trimming. Letters are Latin only
/// unless `allow_non_latin_letters` is set, in which case any Unicode letter
/// or combining mark is accepted. Whitespace, apostrophes, periods and
/// hyphens are always allowed.
pub fn validate_name(raw: &str, rule: &Rule) -> Result<String> {
    let trimmed = raw.trim();
    let pattern = if rule.allow_non_latin_letters {
        &UNICODE_NAME
    } else {
        &LATIN_NAME
    };

    if trimmed.is_empty()
        || trimmed.chars().count() > rule.name_max_length
        || !pattern.is_match(trimmed)
    {
        return Err(ValidationError::invalid_name(
            "Name contains invalid characters or is too long",
        ));
    }

    Ok(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Validates sex, case-insensitively: `male`, `m`, `female` or `f`.
pub fn validate_sex(raw: &str) -> Result<Sex> {
    match raw.to_lowercase().as_str() {
        "male" | "m" => Ok(Sex::Male),
        "female" | "f" => Ok(Sex::Female),
        _ => Err(ValidationError::invalid_sex("Sex must be Male/Female")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use somalid_core::{ErrorCode, RuleBuilder};

    #[test]
    fn test_id_separators_are_stripped() {
        let rule = Rule::default();
        assert_eq!(validate_id_number("934265782412", &rule).unwrap(), "934265782412");
        assert_eq!(validate_id_number("9342-6578-2412", &rule).unwrap(), "934265782412");
        assert_eq!(validate_id_number(" 9342 6578 2412 ", &rule).unwrap(), "934265782412");
    }

    #[test]
    fn test_id_without_digits_is_not_numeric() {
        let err = validate_id_number("abc", &Rule::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidIdNumber);
        assert_eq!(err.message(), "ID number must be numeric");

        let err = validate_id_number("", &Rule::default()).unwrap_err();
        assert_eq!(err.message(), "ID number must be numeric");
    }

    #[test]
    fn test_id_with_separators_rejected_when_not_allowed() {
        let rule = RuleBuilder::new().allow_separators(false).build();
        let err = validate_id_number("9342-6578-2412", &rule).unwrap_err();
        assert_eq!(err.message(), "ID number must be numeric");
        assert_eq!(validate_id_number("934265782412", &rule).unwrap(), "934265782412");
    }

    #[test]
    fn test_id_length_message_is_translated() {
        let err = validate_id_number("12345", &Rule::default()).unwrap_err();
        assert_eq!(err.message(), "ID number must be exactly 12 digits");
        assert_eq!(
            err.message_in(Language::Somali),
            "Lambarka aqoonsiga waa inuu noqdaa 12 tiro oo keliya"
        );
        assert!(err.message_in(Language::Arabic).contains("رقم الهوية"));
    }

    #[test]
    fn test_any_length_when_unset() {
        let rule = RuleBuilder::new().any_id_length().build();
        assert_eq!(validate_id_number("1", &rule).unwrap(), "1");
    }

    #[test]
    fn test_id_prefix() {
        let rule = RuleBuilder::new().id_length(10).id_must_start("93").build();
        assert_eq!(validate_id_number("9312345678", &rule).unwrap(), "9312345678");

        let err = validate_id_number("8312345678", &rule).unwrap_err();
        assert_eq!(err.message(), "ID number must start with 93");
        assert_eq!(
            err.message_in(Language::Somali),
            "Lambarka aqoonsiga waa inuu ku bilaabmo 93"
        );
    }

    #[test]
    fn test_length_checked_before_prefix() {
        let rule = RuleBuilder::new().id_length(10).id_must_start("93").build();
        let err = validate_id_number("83", &rule).unwrap_err();
        assert_eq!(err.message(), "ID number must be exactly 10 digits");
    }

    #[test]
    fn test_name_is_normalized() {
        let rule = Rule::default();
        assert_eq!(
            validate_name("  Ahmed   Hassan\tMohamed ", &rule).unwrap(),
            "Ahmed Hassan Mohamed"
        );
        assert_eq!(validate_name("Cabdi O'Neil-Xasan Jr.", &rule).unwrap(), "Cabdi O'Neil-Xasan Jr.");
    }

    #[test]
    fn test_arabic_name_depends_on_rule() {
        let name = "أحمد حسن محمد";
        assert_eq!(validate_name(name, &Rule::default()).unwrap(), name);

        let latin_only = RuleBuilder::new().allow_non_latin_letters(false).build();
        let err = validate_name(name, &latin_only).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidName);
    }

    #[test]
    fn test_name_rejections() {
        let rule = Rule::default();
        for raw in ["", "   ", "Ahmed123", "Ahmed@Hassan", "Ahmed_Hassan"] {
            let err = validate_name(raw, &rule).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidName, "{raw:?}");
            assert_eq!(err.message(), "Name contains invalid characters or is too long");
        }
    }

    #[test]
    fn test_name_length_counts_characters() {
        let rule = RuleBuilder::new().name_max_length(5).build();
        assert!(validate_name("عائشة", &rule).is_ok());
        assert!(validate_name("Ahmed", &rule).is_ok());
        assert!(validate_name("Ahmeds", &rule).is_err());

        let long = "A".repeat(121);
        assert!(validate_name(&long, &Rule::default()).is_err());
    }

    #[test]
    fn test_sex_variants() {
        assert_eq!(validate_sex("Male").unwrap(), Sex::Male);
        assert_eq!(validate_sex("M").unwrap(), Sex::Male);
        assert_eq!(validate_sex("m").unwrap(), Sex::Male);
        assert_eq!(validate_sex("FEMALE").unwrap(), Sex::Female);
        assert_eq!(validate_sex("f").unwrap(), Sex::Female);
    }

    #[test]
    fn test_sex_rejections() {
        for raw in ["", "x", "man", "woman", " male"] {
            let err = validate_sex(raw).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidSex, "{raw:?}");
        }
    }
}
