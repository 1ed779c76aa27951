pub mod batch;
pub mod check;
pub mod mask;
pub mod validate;

use anyhow::{Context, Result};
use somalid_core::Rule;
use somalid_parser::parse_rule_file;
use std::path::Path;
use tracing::info;

/// Loads the rule at `path`, or the default rule when no path is given.
pub fn load_rule(path: Option<&str>) -> Result<Rule> {
    let Some(path) = path else {
        return Ok(Rule::default());
    };

    info!("Loading rule file: {}", path);
    parse_rule_file(Path::new(path)).with_context(|| format!("Failed to parse rule file: {}", path))
}
