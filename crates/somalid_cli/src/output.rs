use anyhow::Result;
use colored::*;
use serde_json::{Value, json};
use somalid_core::{BatchResult, Language, Rule, ValidatedRecord, ValidationError};
use somalid_validator::{MaskSpec, REDACTION_MARKER, mask_id, redact_record};

pub fn print_record(record: &ValidatedRecord, format: &str) -> Result<()> {
    match format {
        "json" => print_json(&json!({
            "valid": true,
            "record": masked_record_json(record),
        })),
        _ => {
            print_text_record(record);
            Ok(())
        }
    }
}

fn print_text_record(record: &ValidatedRecord) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  ID VALIDATION".bold());
    println!("{}", "═".repeat(60));
    println!(
        "\n{} {}",
        "✓".green().bold(),
        "Record is VALID".green().bold()
    );

    println!("\n{}", "Record:".bold());
    println!("  ID number:      {}", mask_id(&record.id_number, MaskSpec::default()));
    println!("  Name:           {}", record.name);
    println!("  Sex:            {}", record.sex);
    println!("  Date of birth:  {}", record.dob_iso());
    println!("  Date of issue:  {}", record.issue_iso());
    println!("  Date of expiry: {}", record.expiry_iso());
    println!("{}", "═".repeat(60));
}

pub fn print_validation_error(error: &ValidationError, format: &str) -> Result<()> {
    match format {
        "json" => print_json(&json!({
            "valid": false,
            "error": error,
            "localizedMessage": error.localized_message(),
        })),
        _ => {
            print_text_error(error);
            Ok(())
        }
    }
}

fn print_text_error(error: &ValidationError) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  ID VALIDATION".bold());
    println!("{}", "═".repeat(60));
    println!(
        "\n{} {}",
        "✗".red().bold(),
        "Record is INVALID".red().bold()
    );

    println!("\n{}", "Error:".red().bold());
    println!("  Code:    {}", error.code().as_str().red());
    println!("  Message: {}", error.localized_message().red());

    println!("\n{}", "Translations:".bold());
    for (language, message) in error.all_messages() {
        println!("  {:<8} {}", format!("{}:", language.name()), message);
    }
    println!("{}", "═".repeat(60));
}

pub fn print_batch_result(result: &BatchResult, format: &str, redact: bool) -> Result<()> {
    match format {
        "json" => print_json(&batch_json(result, redact)?),
        _ => {
            print_text_batch(result, redact);
            Ok(())
        }
    }
}

fn print_text_batch(result: &BatchResult, redact: bool) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  BATCH VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if result.all_passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "All records PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Some records FAILED".red().bold()
        );
    }

    println!("\n{}", "Records:".bold());
    for entry in &result.results {
        match (&entry.data, &entry.error) {
            (Some(record), _) => {
                let name = if redact {
                    REDACTION_MARKER
                } else {
                    record.name.as_str()
                };
                println!(
                    "  {} #{} {} {}",
                    "✓".green(),
                    entry.index,
                    mask_id(&record.id_number, MaskSpec::default()),
                    name
                );
            }
            (None, Some(error)) => {
                println!(
                    "  {} #{} {}: {}",
                    "✗".red(),
                    entry.index,
                    error.code().as_str().red(),
                    error.message()
                );
                println!("       so: {}", error.message_in(Language::Somali));
                println!("       ar: {}", error.message_in(Language::Arabic));
            }
            (None, None) => {}
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total:        {}", result.summary.total);
    println!("  Successful:   {}", result.summary.successful);
    println!("  Failed:       {}", result.summary.failed);
    println!("  Success rate: {}", result.summary.success_rate);
    println!("{}", "═".repeat(60));
}

fn batch_json(result: &BatchResult, redact: bool) -> Result<Value> {
    let mut output = serde_json::to_value(result)?;

    let entries = output["results"].as_array_mut().into_iter().flatten();
    for (entry, outcome) in entries.zip(&result.results) {
        if let Some(record) = &outcome.data {
            entry["data"] = if redact {
                Value::from(redact_record(record))
            } else {
                masked_record_json(record)
            };
        }
    }

    Ok(output)
}

/// The record as JSON with its id masked.
fn masked_record_json(record: &ValidatedRecord) -> Value {
    json!({
        "idNumber": mask_id(&record.id_number, MaskSpec::default()),
        "name": record.name,
        "sex": record.sex,
        "dobISO": record.dob_iso(),
        "issueISO": record.issue_iso(),
        "expiryISO": record.expiry_iso(),
    })
}

pub fn print_rule(rule: &Rule, format: &str) -> Result<()> {
    match format {
        "json" => print_json(&serde_json::to_value(rule)?),
        _ => {
            print_text_rule(rule);
            Ok(())
        }
    }
}

fn print_text_rule(rule: &Rule) {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    println!("\nEffective Rule:");
    println!(
        "  ID length:          {}",
        rule.id_length
            .map_or_else(|| "any".to_string(), |length| length.to_string())
    );
    println!(
        "  ID prefix:          {}",
        rule.id_must_start.as_deref().unwrap_or("none")
    );
    println!("  Separators allowed: {}", yes_no(rule.id_allow_separators));
    println!("  Name max length:    {}", rule.name_max_length);
    println!("  Non-Latin letters:  {}", yes_no(rule.allow_non_latin_letters));
    println!(
        "  Future expiry:      {}",
        if rule.require_future_expiry {
            "required"
        } else {
            "not required"
        }
    );
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
