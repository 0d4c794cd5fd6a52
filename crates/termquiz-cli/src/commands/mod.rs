pub mod add_terms;
pub mod init;
pub mod learn;
pub mod parse;
pub mod quiz;
pub mod stats;
pub mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use termquiz_core::history::QuizHistory;
use termquiz_core::statistics::{compute_progress, newly_unlocked, Achievement};

/// Read bulk text from a file, or from stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display()))
    }
}

/// Print achievements `history` has that were not in `before`.
pub(crate) fn announce_unlocks(before: &[Achievement], history: &QuizHistory) {
    let after = compute_progress(history).achievements;
    for achievement in newly_unlocked(before, &after) {
        println!(
            "Achievement unlocked: {achievement} ({})",
            achievement.description()
        );
    }
}
