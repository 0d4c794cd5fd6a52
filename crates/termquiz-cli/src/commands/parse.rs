//! The `termquiz parse` command.

use std::path::PathBuf;

use anyhow::Result;

use termquiz_core::parser::parse_terms;

pub fn execute(input: PathBuf, format: String) -> Result<()> {
    let text = super::read_input(&input)?;
    let terms = parse_terms(&text);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&terms)?);
        }
        "text" => {
            if terms.is_empty() {
                println!("No parsable terms found.");
                return Ok(());
            }
            for t in &terms {
                println!("  {}: {}", t.term, t.description);
            }
            println!("Parsed {} term(s).", terms.len());
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
