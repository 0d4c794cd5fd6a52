//! The `termquiz learn` command.

use std::path::PathBuf;

use anyhow::Result;

use termquiz_core::config::load_config_from;
use termquiz_core::history::{LearnedInfo, QuizHistory};
use termquiz_core::parser::parse_record;
use termquiz_core::statistics::compute_progress;

pub fn execute(
    deck_path: PathBuf,
    info_index: usize,
    history: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let history_path = history.unwrap_or(config.history_path);

    let record = parse_record(&deck_path)?;
    let Some(info) = record.infos.get(info_index) else {
        anyhow::bail!(
            "info item {info_index} does not exist in {} ({} info items)",
            deck_path.display(),
            record.infos.len()
        );
    };

    let mut history = QuizHistory::load_json(&history_path)?;
    let before = compute_progress(&history).achievements;

    if !history.mark_learned(LearnedInfo::new(&record, info_index)) {
        println!("'{}' is already marked as learned.", info.title);
        return Ok(());
    }
    history.save_json(&history_path)?;
    tracing::debug!(deck = %record.id, info_index, "marked learned");

    let progress = compute_progress(&history);
    println!(
        "Learned '{}' ({} {}, info {info_index}).",
        info.title, record.hub, record.date
    );
    println!(
        "{} of {} info item(s) learned in {}.",
        history.learned_indices(&record.id).len(),
        record.infos.len(),
        record.id
    );
    println!(
        "Total learned: {}, streak: {} day(s).",
        progress.total_learned, progress.streak_days
    );
    super::announce_unlocks(&before, &history);

    Ok(())
}
