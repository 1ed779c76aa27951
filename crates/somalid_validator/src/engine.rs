//! Main validation engine.
//!
//! [`IdValidator`] runs the per-field checks and the date consistency checks
//! over a whole record. It holds no mutable state of its own: the only shared
//! piece is the [`DateEngine`] parse cache, so one validator can serve any
//! number of threads.

use crate::dates::{DateEngine, format_iso};
use crate::fields::{validate_id_number, validate_name, validate_sex};
use crate::guard::lift_record;
use chrono::{DateTime, Utc};
use somalid_core::{
    DateField, DateTriple, InputValue, Language, NormalizedDates, RawRecord, Result, Rule,
    ValidatedRecord, ValidationError,
};
use std::sync::Arc;
use tracing::debug;

/// Validation engine for identity records.
///
/// # Example
///
/// ```rust
/// use somalid_core::{RawRecord, Rule, Sex};
/// use somalid_validator::IdValidator;
///
/// let validator = IdValidator::new();
/// let record = RawRecord::new(
///     "934265782412",
///     "Ahmed Hassan Mohamed",
///     "Male",
///     "15-03-1990",
///     "01-01-2020",
///     "01-01-2099",
/// );
///
/// let validated = validator.validate_record(&record, &Rule::default()).unwrap();
/// assert_eq!(validated.sex, Sex::Male);
/// assert_eq!(validated.dob_iso(), "1990-03-15T00:00:00.000Z");
/// ```
#[derive(Debug, Clone)]
pub struct IdValidator {
    dates: Arc<DateEngine>,
}

impl IdValidator {
    /// Creates a validator backed by the process-wide date engine.
    pub fn new() -> Self {
        Self {
            dates: DateEngine::shared(),
        }
    }

    /// Creates a validator backed by `dates`.
    pub fn with_date_engine(dates: Arc<DateEngine>) -> Self {
        Self { dates }
    }

    /// The date engine this validator parses with.
    pub fn date_engine(&self) -> &DateEngine {
        &self.dates
    }

    /// Validates a record against `rule`, checking expiry against the
    /// current time.
    ///
    /// Checks run in a fixed order and the first failure wins: id number,
    /// name, sex, then dates.
    pub fn validate_record(&self, record: &RawRecord, rule: &Rule) -> Result<ValidatedRecord> {
        self.validate_record_at(record, rule, Utc::now())
    }

    /// Validates a record with `now` as the reference instant for the
    /// future-expiry check.
    pub fn validate_record_at(
        &self,
        record: &RawRecord,
        rule: &Rule,
        now: DateTime<Utc>,
    ) -> Result<ValidatedRecord> {
        self.check_record(record, rule, now).inspect_err(|err| {
            debug!("Record rejected with {}: {}", err.code(), err);
        })
    }

    fn check_record(
        &self,
        record: &RawRecord,
        rule: &Rule,
        now: DateTime<Utc>,
    ) -> Result<ValidatedRecord> {
        let id_number = validate_id_number(&record.id_number, rule)?;
        let name = validate_name(&record.name, rule)?;
        let sex = validate_sex(&record.sex)?;
        let dates = self.validate_dates_at(record.dates(), rule, now)?;

        Ok(ValidatedRecord {
            id_number,
            name,
            sex,
            dates,
        })
    }

    /// Validates untrusted structured input.
    ///
    /// Shape problems are reported before any field check: a non-map input
    /// is `INVALID_INPUT` and an absent required key is `MISSING_FIELD`.
    /// Well-formed input is then validated exactly like
    /// [`Self::validate_record`].
    pub fn validate_record_guarded(&self, input: &InputValue, rule: &Rule) -> Result<ValidatedRecord> {
        self.validate_record_guarded_at(input, rule, Utc::now())
    }

    /// Guarded validation with an explicit reference instant.
    pub fn validate_record_guarded_at(
        &self,
        input: &InputValue,
        rule: &Rule,
        now: DateTime<Utc>,
    ) -> Result<ValidatedRecord> {
        let record = lift_record(input).inspect_err(|err| {
            debug!("Input rejected with {}: {}", err.code(), err);
        })?;
        self.validate_record_at(&record, rule, now)
    }

    /// Validates a record and localizes any failure into `language`.
    ///
    /// A returned error carries every translation and reports `language`
    /// from [`ValidationError::language`].
    pub fn validate_record_multilingual(
        &self,
        record: &RawRecord,
        rule: &Rule,
        language: Language,
    ) -> Result<ValidatedRecord> {
        self.validate_record(record, rule)
            .map_err(|err| err.localize(language))
    }

    /// Validates and normalizes a record's three dates against the current
    /// time.
    pub fn validate_dates(&self, dates: DateTriple<'_>, rule: &Rule) -> Result<NormalizedDates> {
        self.validate_dates_at(dates, rule, Utc::now())
    }

    /// Validates and normalizes a record's three dates.
    ///
    /// All three are parsed first, so a malformed date is always reported as
    /// `INVALID_DATE` even when an earlier pair is out of order. Ordering is
    /// strict: issue after birth, expiry after issue and, when the rule
    /// requires it, expiry after `now`.
    pub fn validate_dates_at(
        &self,
        dates: DateTriple<'_>,
        rule: &Rule,
        now: DateTime<Utc>,
    ) -> Result<NormalizedDates> {
        let birth = self.parse_field(DateField::Birth, dates.birth)?;
        let issue = self.parse_field(DateField::Issue, dates.issue)?;
        let expiry = self.parse_field(DateField::Expiry, dates.expiry)?;

        if issue <= birth {
            return Err(ValidationError::inconsistent_dates("Issue date must be after date of birth")
                .with_translation(
                    Language::Somali,
                    "Taariikhda bixinta waa inay ka dambayso taariikhda dhalashada",
                )
                .with_translation(Language::Arabic, "تاريخ الإصدار يجب أن يكون بعد تاريخ الميلاد"));
        }

        if expiry <= issue {
            return Err(ValidationError::inconsistent_dates("Expiry date must be after issue date")
                .with_translation(
                    Language::Somali,
                    "Taariikhda dhicitaanka waa inay ka dambayso taariikhda bixinta",
                )
                .with_translation(Language::Arabic, "تاريخ الانتهاء يجب أن يكون بعد تاريخ الإصدار"));
        }

        if rule.require_future_expiry && expiry <= now {
            return Err(ValidationError::inconsistent_dates("Expiry date must be in the future")
                .with_translation(
                    Language::Somali,
                    "Taariikhda dhicitaanka waa inay mustaqbalka ku tahay",
                )
                .with_translation(Language::Arabic, "تاريخ الانتهاء يجب أن يكون في المستقبل"));
        }

        Ok(NormalizedDates {
            dob_iso: format_iso(&birth),
            issue_iso: format_iso(&issue),
            expiry_iso: format_iso(&expiry),
        })
    }

    fn parse_field(&self, field: DateField, raw: &str) -> Result<DateTime<Utc>> {
        self.dates
            .parse(raw)
            .and_then(|parsed| parsed.to_utc_midnight())
            .ok_or_else(|| invalid_date(field))
    }
}

impl Default for IdValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_date(field: DateField) -> ValidationError {
    const FORMATS: &str = "dd-mm-yyyy, dd/mm/yyyy, yyyy-mm-dd, dd.mm.yyyy";

    ValidationError::invalid_date(format!(
        "{} must be a valid date ({FORMATS})",
        field.label(Language::English)
    ))
    .with_translation(
        Language::Somali,
        format!(
            "{} waa inay noqoto taariikh sax ah ({FORMATS})",
            field.label(Language::Somali)
        ),
    )
    .with_translation(
        Language::Arabic,
        format!(
            "{} يجب أن يكون تاريخاً صحيحاً ({FORMATS})",
            field.label(Language::Arabic)
        ),
    )
}

/// Validates a record with the default validator.
pub fn validate_record(record: &RawRecord, rule: &Rule) -> Result<ValidatedRecord> {
    IdValidator::new().validate_record(record, rule)
}

/// Validates untrusted structured input with the default validator.
pub fn validate_record_guarded(input: &InputValue, rule: &Rule) -> Result<ValidatedRecord> {
    IdValidator::new().validate_record_guarded(input, rule)
}

/// Validates a record with the default validator, localizing any failure.
pub fn validate_record_multilingual(
    record: &RawRecord,
    rule: &Rule,
    language: Language,
) -> Result<ValidatedRecord> {
    IdValidator::new().validate_record_multilingual(record, rule, language)
}

/// Validates a record's dates with the default validator.
pub fn validate_dates(dates: DateTriple<'_>, rule: &Rule) -> Result<NormalizedDates> {
    IdValidator::new().validate_dates(dates, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use somalid_core::{ErrorCode, RuleBuilder, Sex};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn sample() -> RawRecord {
        RawRecord::new(
            "934265782412",
            "Ahmed Hassan Mohamed",
            "Male",
            "15-03-1990",
            "01-01-2020",
            "01-01-2030",
        )
    }

    fn isolated() -> IdValidator {
        IdValidator::with_date_engine(Arc::new(DateEngine::new()))
    }

    #[test]
    fn test_sample_record_validates() {
        let validated = isolated()
            .validate_record_at(&sample(), &Rule::default(), fixed_now())
            .unwrap();

        assert_eq!(
            validated,
            ValidatedRecord {
                id_number: "934265782412".to_string(),
                name: "Ahmed Hassan Mohamed".to_string(),
                sex: Sex::Male,
                dates: NormalizedDates {
                    dob_iso: "1990-03-15T00:00:00.000Z".to_string(),
                    issue_iso: "2020-01-01T00:00:00.000Z".to_string(),
                    expiry_iso: "2030-01-01T00:00:00.000Z".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let mut record = sample();
        record.id_number = "12".to_string();
        record.sex = "x".to_string();
        let err = isolated()
            .validate_record_at(&record, &Rule::default(), fixed_now())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidIdNumber);
    }

    #[test]
    fn test_mixed_date_formats() {
        let record = RawRecord::new(
            "934265782412",
            "Ahmed Hassan",
            "m",
            "1990-03-15",
            "01/01/2020",
            "01.01.2030",
        );
        let validated = isolated()
            .validate_record_at(&record, &Rule::default(), fixed_now())
            .unwrap();
        assert_eq!(validated.issue_iso(), "2020-01-01T00:00:00.000Z");
        assert_eq!(validated.expiry_iso(), "2030-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_invalid_date_names_the_field() {
        let dates = DateTriple {
            birth: "15-03-1990",
            issue: "31-04-2020",
            expiry: "01-01-2030",
        };
        let err = isolated()
            .validate_dates_at(dates, &Rule::default(), fixed_now())
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidDate);
        assert!(err.message().starts_with("Date of Issue"));
        assert!(err.message_in(Language::Somali).starts_with("Taariikhda bixinta"));
        assert!(err.message_in(Language::Arabic).starts_with("تاريخ الإصدار"));
    }

    #[test]
    fn test_malformed_date_beats_ordering() {
        // Issue precedes birth, but expiry is malformed: parsing comes first.
        let dates = DateTriple {
            birth: "15-03-1990",
            issue: "01-01-1980",
            expiry: "not-a-date",
        };
        let err = isolated()
            .validate_dates_at(dates, &Rule::default(), fixed_now())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDate);
        assert!(err.message().starts_with("Date of Expiry"));
    }

    #[test]
    fn test_issue_must_follow_birth() {
        let dates = DateTriple {
            birth: "15-03-1990",
            issue: "15-03-1990",
            expiry: "01-01-2030",
        };
        let err = isolated()
            .validate_dates_at(dates, &Rule::default(), fixed_now())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InconsistentDates);
        assert_eq!(err.message(), "Issue date must be after date of birth");
        assert_eq!(
            err.message_in(Language::Somali),
            "Taariikhda bixinta waa inay ka dambayso taariikhda dhalashada"
        );
    }

    #[test]
    fn test_expiry_must_follow_issue() {
        let dates = DateTriple {
            birth: "15-03-1990",
            issue: "01-01-2020",
            expiry: "31-12-2019",
        };
        let err = isolated()
            .validate_dates_at(dates, &Rule::default(), fixed_now())
            .unwrap_err();
        assert_eq!(err.message(), "Expiry date must be after issue date");
    }

    #[test]
    fn test_future_expiry_policy() {
        let dates = DateTriple {
            birth: "15-03-1990",
            issue: "01-01-2010",
            expiry: "01-01-2020",
        };

        let err = isolated()
            .validate_dates_at(dates, &Rule::default(), fixed_now())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InconsistentDates);
        assert_eq!(err.message(), "Expiry date must be in the future");
        assert_eq!(
            err.message_in(Language::Somali),
            "Taariikhda dhicitaanka waa inay mustaqbalka ku tahay"
        );

        let lenient = RuleBuilder::new().require_future_expiry(false).build();
        let normalized = isolated().validate_dates_at(dates, &lenient, fixed_now()).unwrap();
        assert_eq!(normalized.expiry_iso, "2020-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_expiry_today_is_not_future() {
        let dates = DateTriple {
            birth: "15-03-1990",
            issue: "01-01-2020",
            expiry: "01-06-2025",
        };
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let err = isolated()
            .validate_dates_at(dates, &Rule::default(), now)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InconsistentDates);
    }

    #[test]
    fn test_guarded_entry_point() {
        let validator = isolated();
        let rule = Rule::default();

        let err = validator
            .validate_record_guarded_at(&InputValue::Null, &rule, fixed_now())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);

        let err = validator
            .validate_record_guarded_at(&InputValue::Map(Default::default()), &rule, fixed_now())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingField);

        let validated = validator
            .validate_record_guarded_at(&InputValue::from(&sample()), &rule, fixed_now())
            .unwrap();
        assert_eq!(validated.id_number, "934265782412");
    }

    #[test]
    fn test_multilingual_sets_active_language() {
        let mut record = sample();
        record.id_number = "12AB".to_string();

        let err = validate_record_multilingual(&record, &Rule::default(), Language::Arabic).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidIdNumber);
        assert_eq!(err.language(), Some(Language::Arabic));
        assert!(err.localized_message().contains("رقم الهوية"));
        assert_eq!(err.message(), "ID number must be exactly 12 digits");
    }

    #[test]
    fn test_multilingual_success_is_unchanged() {
        let rule = RuleBuilder::new().require_future_expiry(false).build();
        let plain = validate_record(&sample(), &rule).unwrap();
        let localized = validate_record_multilingual(&sample(), &rule, Language::Somali).unwrap();
        assert_eq!(plain, localized);
    }
}
