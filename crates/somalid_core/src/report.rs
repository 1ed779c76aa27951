//! Batch validation results.

use crate::error::ValidationError;
use crate::record::ValidatedRecord;
use serde::Serialize;

/// Outcome of validating one record of a batch.
///
/// Exactly one of `data` and `error` is set, matching `success`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// Position of the record in the input sequence
    pub index: usize,

    /// Whether the record validated
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ValidatedRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl BatchEntry {
    /// Creates a successful entry.
    pub fn valid(index: usize, record: ValidatedRecord) -> Self {
        Self {
            index,
            success: true,
            data: Some(record),
            error: None,
        }
    }

    /// Creates a failed entry.
    pub fn invalid(index: usize, error: ValidationError) -> Self {
        Self {
            index,
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,

    /// Percentage with two decimals, e.g. `"66.67%"`. `"0.00%"` for an
    /// empty batch.
    pub success_rate: String,
}

impl BatchSummary {
    /// Computes the summary from the total and successful counts.
    pub fn from_counts(total: usize, successful: usize) -> Self {
        let successful = successful.min(total);
        // Hundredths of a percent, ties rounded up.
        let basis_points = if total == 0 {
            0
        } else {
            (successful as u128 * 20_000 + total as u128) / (2 * total as u128)
        };

        Self {
            total,
            successful,
            failed: total - successful,
            success_rate: format!("{}.{:02}%", basis_points / 100, basis_points % 100),
        }
    }
}

/// Result of a batch validation call, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub results: Vec<BatchEntry>,
    pub summary: BatchSummary,
}

impl BatchResult {
    /// Builds the result and its summary from per-record entries.
    pub fn from_entries(results: Vec<BatchEntry>) -> Self {
        let successful = results.iter().filter(|entry| entry.success).count();
        let summary = BatchSummary::from_counts(results.len(), successful);
        Self { results, summary }
    }

    /// Returns true when every record validated.
    pub fn all_passed(&self) -> bool {
        self.summary.failed == 0
    }

    /// Iterates over the failed entries.
    pub fn failures(&self) -> impl Iterator<Item = &BatchEntry> {
        self.results.iter().filter(|entry| !entry.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_rate_two_decimals() {
        let summary = BatchSummary::from_counts(3, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.success_rate, "66.67%");

        assert_eq!(BatchSummary::from_counts(4, 4).success_rate, "100.00%");
        assert_eq!(BatchSummary::from_counts(8, 1).success_rate, "12.50%");
        assert_eq!(BatchSummary::from_counts(3, 1).success_rate, "33.33%");
    }

    #[test]
    fn test_success_rate_ties_round_up() {
        assert_eq!(BatchSummary::from_counts(800, 1).success_rate, "0.13%");
        assert_eq!(BatchSummary::from_counts(800, 799).success_rate, "99.88%");
        assert_eq!(BatchSummary::from_counts(1600, 1).success_rate, "0.06%");
        assert_eq!(BatchSummary::from_counts(7, 7).success_rate, "100.00%");
    }

    #[test]
    fn test_empty_batch_rate() {
        let summary = BatchSummary::from_counts(0, 0);
        assert_eq!(
            summary,
            BatchSummary {
                total: 0,
                successful: 0,
                failed: 0,
                success_rate: "0.00%".to_string(),
            }
        );
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let value = serde_json::to_value(BatchSummary::from_counts(2, 1)).unwrap();
        assert_eq!(value["successRate"], "50.00%");
    }

    #[test]
    fn test_result_from_entries() {
        let result = BatchResult::from_entries(vec![
            BatchEntry::invalid(0, ValidationError::invalid_sex("Sex must be Male/Female")),
        ]);
        assert!(!result.all_passed());
        assert_eq!(result.failures().count(), 1);
        assert_eq!(result.summary.success_rate, "0.00%");
    }
}
