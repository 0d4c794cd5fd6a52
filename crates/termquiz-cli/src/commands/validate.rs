//! The `termquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use termquiz_core::parser::{self, ValidationWarning};

pub fn execute(deck_path: PathBuf) -> Result<()> {
    let records = parser::load_records(&deck_path)?;

    let mut total_warnings = 0;

    for record in &records {
        println!(
            "Deck: {} ({}, {}, {} terms)",
            record.id,
            record.hub,
            record.date,
            record.term_count()
        );

        let warnings = parser::validate_record(record);
        for w in &warnings {
            println!("{}", warning_line(w));
        }
        total_warnings += warnings.len();
    }

    if records.is_empty() {
        println!("No decks found.");
    } else if total_warnings == 0 {
        println!("All decks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn warning_line(w: &ValidationWarning) -> String {
    match w.info_index {
        Some(idx) => format!("  [info {idx}] WARNING: {}", w.message),
        None => format!("  WARNING: {}", w.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_lines_share_indentation() {
        let indexed = warning_line(&ValidationWarning {
            info_index: Some(1),
            message: "no terms defined".into(),
        });
        let deck_level = warning_line(&ValidationWarning {
            info_index: None,
            message: "empty id".into(),
        });
        assert_eq!(indexed, "  [info 1] WARNING: no terms defined");
        assert_eq!(deck_level, "  WARNING: empty id");
    }
}
