//! Batch validation.

use crate::engine::IdValidator;
use chrono::{DateTime, Utc};
use somalid_core::{BatchEntry, BatchResult, InputValue, Rule};
use tracing::info;

impl IdValidator {
    /// Validates each input independently, in order.
    ///
    /// A failing record never stops the batch. Each failure is recorded
    /// with every translation attached so the result can be serialized
    /// as-is.
    pub fn validate_batch(&self, records: &[InputValue], rule: &Rule) -> BatchResult {
        self.validate_batch_at(records, rule, Utc::now())
    }

    /// Batch validation with an explicit reference instant.
    pub fn validate_batch_at(
        &self,
        records: &[InputValue],
        rule: &Rule,
        now: DateTime<Utc>,
    ) -> BatchResult {
        let entries = records
            .iter()
            .enumerate()
            .map(
                |(index, input)| match self.validate_record_guarded_at(input, rule, now) {
                    Ok(record) => BatchEntry::valid(index, record),
                    Err(err) => BatchEntry::invalid(index, err.with_all_translations()),
                },
            )
            .collect();

        let result = BatchResult::from_entries(entries);
        info!(
            "Validated {} records: {} passed, {} failed ({})",
            result.summary.total,
            result.summary.successful,
            result.summary.failed,
            result.summary.success_rate
        );
        result
    }
}

/// Validates a batch with the default validator.
pub fn validate_batch(records: &[InputValue], rule: &Rule) -> BatchResult {
    IdValidator::new().validate_batch(records, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use somalid_core::{ErrorCode, Language};

    fn record(id: &str) -> InputValue {
        InputValue::from(json!({
            "idNumber": id,
            "name": "Faadumo Cali",
            "sex": "F",
            "dobDMY": "02-07-1985",
            "issueDMY": "10/10/2015",
            "expiryDMY": "2035-10-10"
        }))
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_one_bad_record_of_three() {
        let records = [record("934265782412"), record("123"), record("934265782413")];
        let result = IdValidator::new().validate_batch_at(&records, &Rule::default(), now());

        assert_eq!(result.summary.total, 3);
        assert_eq!(result.summary.successful, 2);
        assert_eq!(result.summary.failed, 1);
        assert_eq!(result.summary.success_rate, "66.67%");

        let indices: Vec<usize> = result.results.iter().map(|entry| entry.index).collect();
        assert_eq!(indices, [0, 1, 2]);

        let failed = &result.results[1];
        assert!(!failed.success);
        assert!(failed.data.is_none());
        let err = failed.error.as_ref().unwrap();
        assert_eq!(err.code(), ErrorCode::InvalidIdNumber);
        assert_eq!(err.all_messages().len(), Language::ALL.len());
    }

    #[test]
    fn test_shape_errors_do_not_stop_batch() {
        let records = [InputValue::Null, InputValue::Map(Default::default()), record("934265782412")];
        let result = IdValidator::new().validate_batch_at(&records, &Rule::default(), now());

        let codes: Vec<Option<ErrorCode>> = result
            .results
            .iter()
            .map(|entry| entry.error.as_ref().map(|err| err.code()))
            .collect();
        assert_eq!(
            codes,
            [Some(ErrorCode::InvalidInput), Some(ErrorCode::MissingField), None]
        );
        assert_eq!(result.summary.success_rate, "33.33%");
    }

    #[test]
    fn test_empty_batch() {
        let result = validate_batch(&[], &Rule::default());
        assert!(result.results.is_empty());
        assert_eq!(result.summary.success_rate, "0.00%");
        assert!(result.all_passed());
    }

    #[test]
    fn test_failed_entry_serializes_translations() {
        let result = IdValidator::new().validate_batch_at(&[record("x")], &Rule::default(), now());
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["results"][0]["error"]["code"], "INVALID_ID_NUMBER");
        assert!(value["results"][0]["error"]["translations"]["so"].is_string());
        assert_eq!(value["summary"]["successRate"], "0.00%");
    }
}
