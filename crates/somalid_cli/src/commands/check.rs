use anyhow::Result;
use tracing::info;

use crate::commands::load_rule;
use crate::output;

pub fn execute(rule_path: &str, format: &str) -> Result<()> {
    info!("Checking rule file: {}", rule_path);

    let rule = load_rule(Some(rule_path))?;

    if format != "json" {
        output::print_success("Rule file is valid");
    }
    output::print_rule(&rule, format)
}
