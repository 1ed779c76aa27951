//! Loaders for validation rules and record sets.
//!
//! Rules are read from YAML or TOML; record sets from JSON or YAML. The
//! format of a file is chosen from its extension.
//!
//! # Example
//!
//! ```rust
//! use somalid_parser::parse_rule_yaml;
//!
//! let yaml = r#"
//! id_length: 10
//! id_must_start: "93"
//! id_allow_separators: false
//! allow_non_latin_letters: false
//! require_future_expiry: false
//! "#;
//!
//! let rule = parse_rule_yaml(yaml).expect("Failed to parse rule");
//! assert_eq!(rule.id_length, Some(10));
//! assert_eq!(rule.name_max_length, 120);
//! ```

use somalid_core::{InputValue, Rule};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading rules or records.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Format not supported for this kind of document
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// The document parsed but is not a list of records
    #[error("Expected a list of records, found {0}")]
    NotARecordList(String),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Detect the file format from a path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `FileFormat::Yaml`
/// * `.toml` → `FileFormat::Toml`
/// * `.json` → `FileFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<FileFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "toml" => Ok(FileFormat::Toml),
        "json" => Ok(FileFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a rule from a YAML string. Missing keys take their defaults.
pub fn parse_rule_yaml(content: &str) -> Result<Rule> {
    // An empty document deserializes as null, which means "all defaults".
    if content.trim().is_empty() {
        return Ok(Rule::default());
    }
    let rule: Rule = serde_yaml_ng::from_str(content)?;
    Ok(rule)
}

/// Parse a rule from a TOML string. Missing keys take their defaults.
///
/// ```rust
/// use somalid_parser::parse_rule_toml;
///
/// let rule = parse_rule_toml("id_must_start = \"93\"").unwrap();
/// assert_eq!(rule.id_must_start.as_deref(), Some("93"));
/// assert_eq!(rule.id_length, Some(12));
/// ```
pub fn parse_rule_toml(content: &str) -> Result<Rule> {
    let rule: Rule =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(rule)
}

/// Parse a rule from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use somalid_parser::parse_rule_file;
/// use std::path::Path;
///
/// let rule = parse_rule_file(Path::new("rules/strict.yml")).unwrap();
/// println!("Expected id length: {:?}", rule.id_length);
/// ```
pub fn parse_rule_file(path: &Path) -> Result<Rule> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        FileFormat::Yaml => parse_rule_yaml(&content),
        FileFormat::Toml => parse_rule_toml(&content),
        FileFormat::Json => Err(ParserError::UnsupportedFormat(
            "json (rules are YAML or TOML)".to_string(),
        )),
    }
}

/// Parse a record set from JSON.
///
/// The document is either an array of records or an object with a
/// `records` array. Individual records are not checked here; the guarded
/// validator reports malformed ones.
///
/// ```rust
/// use somalid_parser::parse_records_json;
///
/// let records = parse_records_json(r#"[{"idNumber": "934265782412"}, null]"#).unwrap();
/// assert_eq!(records.len(), 2);
/// ```
pub fn parse_records_json(content: &str) -> Result<Vec<InputValue>> {
    let document: serde_json::Value = serde_json::from_str(content)?;
    into_records(document)
}

/// Parse a record set from YAML, in the same shapes as
/// [`parse_records_json`].
pub fn parse_records_yaml(content: &str) -> Result<Vec<InputValue>> {
    let document: serde_json::Value = serde_yaml_ng::from_str(content)?;
    into_records(document)
}

/// Parse a record set from a file with automatic format detection.
pub fn parse_records_file(path: &Path) -> Result<Vec<InputValue>> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        FileFormat::Json => parse_records_json(&content),
        FileFormat::Yaml => parse_records_yaml(&content),
        FileFormat::Toml => Err(ParserError::UnsupportedFormat(
            "toml (record sets are JSON or YAML)".to_string(),
        )),
    }
}

fn into_records(document: serde_json::Value) -> Result<Vec<InputValue>> {
    use serde_json::Value;

    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("records") {
            Some(Value::Array(items)) => items,
            Some(other) => return Err(ParserError::NotARecordList(json_type(&other).to_string())),
            None => return Err(ParserError::NotARecordList("object without 'records'".to_string())),
        },
        other => return Err(ParserError::NotARecordList(json_type(&other).to_string())),
    };

    Ok(items.into_iter().map(InputValue::from).collect())
}

fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
