use anyhow::{Context, Result};
use somalid_parser::parse_records_file;
use somalid_validator::IdValidator;
use std::path::Path;
use tracing::info;

use crate::commands::load_rule;
use crate::output;

pub fn execute(records_path: &str, rule_path: Option<&str>, format: &str, redact: bool) -> Result<()> {
    info!("Validating records file: {}", records_path);

    let rule = load_rule(rule_path)?;
    let records = parse_records_file(Path::new(records_path))
        .with_context(|| format!("Failed to parse records file: {}", records_path))?;

    if format != "json" {
        output::print_info(&format!("Loaded {} records", records.len()));
    }

    let result = IdValidator::new().validate_batch(&records, &rule);
    output::print_batch_result(&result, format, redact)?;

    if !result.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}
