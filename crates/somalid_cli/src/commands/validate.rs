use anyhow::{Context, Result};
use somalid_core::{Language, RawRecord};
use somalid_validator::IdValidator;
use tracing::info;

use crate::commands::load_rule;
use crate::output;

pub fn execute(record: RawRecord, rule_path: Option<&str>, lang: &str, format: &str) -> Result<()> {
    let language: Language = lang
        .parse()
        .with_context(|| format!("Invalid --lang value: {}", lang))?;
    let rule = load_rule(rule_path)?;

    info!("Validating record (language: {})", language.name());

    let validator = IdValidator::new();
    match validator.validate_record_multilingual(&record, &rule, language) {
        Ok(valid) => output::print_record(&valid, format),
        Err(err) => {
            output::print_validation_error(&err, format)?;
            std::process::exit(1);
        }
    }
}
