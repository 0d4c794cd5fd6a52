//! The `termquiz add-terms` command.

use std::path::PathBuf;

use anyhow::Result;

use termquiz_core::parser::{parse_record, parse_terms, write_record};

pub fn execute(deck_path: PathBuf, input: PathBuf, info_index: usize) -> Result<()> {
    let mut record = parse_record(&deck_path)?;
    let text = super::read_input(&input)?;

    let parsed = parse_terms(&text);
    if parsed.is_empty() {
        println!("No parsable terms found.");
        return Ok(());
    }

    let info_count = record.infos.len();
    let Some(info) = record.infos.get_mut(info_index) else {
        anyhow::bail!(
            "info item {info_index} does not exist in {} ({info_count} info items)",
            deck_path.display()
        );
    };

    let added = info.merge_terms(parsed);
    let title = info.title.clone();
    write_record(&deck_path, &record)?;

    tracing::debug!(deck = %record.id, added, "merged terms");
    println!(
        "Added {added} term(s) to '{title}' in {}",
        deck_path.display()
    );

    Ok(())
}
