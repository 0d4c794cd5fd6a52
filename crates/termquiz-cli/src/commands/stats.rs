//! The `termquiz stats` command.

use std::path::PathBuf;

use anyhow::Result;

use termquiz_core::config::load_config_from;
use termquiz_core::history::QuizHistory;
use termquiz_core::statistics::{compute_stats, HistoryStats, ProgressStats};

pub fn execute(history: Option<PathBuf>, format: String, config: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let history_path = history.unwrap_or(config.history_path);

    let history = QuizHistory::load_json(&history_path)?;
    let stats = compute_stats(&history);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        "text" => {
            if stats.total_attempts == 0 {
                println!("No quiz attempts recorded in {}.", history_path.display());
            } else {
                print_table(&stats);
                println!("{} attempt(s) in total.", stats.total_attempts);
            }
            if stats.total_attempts > 0 || stats.progress.total_learned > 0 {
                println!();
                print!("{}", progress_summary(&stats.progress));
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}

fn print_table(stats: &HistoryStats) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Hub",
        "Attempts",
        "Correct",
        "Overall %",
        "Average %",
        "Best %",
        "Last attempt",
    ]);

    for (hub, s) in &stats.per_hub {
        let last = s
            .last_attempt
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(hub),
            Cell::new(s.attempts),
            Cell::new(format!("{}/{}", s.total_correct, s.total_questions)),
            Cell::new(format!("{}%", s.overall_percentage())),
            Cell::new(format!("{:.1}%", s.average_percentage)),
            Cell::new(format!("{}%", s.best_percentage)),
            Cell::new(last),
        ]);
    }

    println!("{table}");
}

fn progress_summary(progress: &ProgressStats) -> String {
    let mut out = format!("Learned: {} info item(s)", progress.total_learned);
    if !progress.learned_per_hub.is_empty() {
        let per_hub: Vec<String> = progress
            .learned_per_hub
            .iter()
            .map(|(hub, n)| format!("{hub} {n}"))
            .collect();
        out.push_str(&format!(" ({})", per_hub.join(", ")));
    }
    out.push('\n');

    match progress.last_learned_date {
        Some(last) => out.push_str(&format!(
            "Streak: {} day(s), longest {} (last learned {last})\n",
            progress.streak_days, progress.longest_streak
        )),
        None => out.push_str("Streak: 0 day(s)\n"),
    }
    if let Some(pct) = progress.latest_quiz_percentage {
        out.push_str(&format!("Latest quiz: {pct}%\n"));
    }

    if progress.achievements.is_empty() {
        out.push_str("Achievements: none yet\n");
    } else {
        let ids: Vec<&str> = progress.achievements.iter().map(|a| a.id()).collect();
        out.push_str(&format!("Achievements: {}\n", ids.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use termquiz_core::model::Hub;
    use termquiz_core::statistics::Achievement;

    #[test]
    fn summary_without_learning() {
        let progress = ProgressStats {
            latest_quiz_percentage: Some(75),
            ..Default::default()
        };
        assert_eq!(
            progress_summary(&progress),
            "Learned: 0 info item(s)\nStreak: 0 day(s)\nLatest quiz: 75%\nAchievements: none yet\n"
        );
    }

    #[test]
    fn summary_with_progress() {
        let progress = ProgressStats {
            total_learned: 12,
            learned_per_hub: [(Hub::Ai, 5), (Hub::Finance, 7)].into_iter().collect(),
            streak_days: 3,
            longest_streak: 4,
            last_learned_date: NaiveDate::from_ymd_opt(2025, 1, 21),
            latest_quiz_percentage: None,
            achievements: vec![Achievement::First10, Achievement::QuizMaster],
        };
        let text = progress_summary(&progress);
        assert!(text.contains("Learned: 12 info item(s) (ai 5, finance 7)"));
        assert!(text.contains("Streak: 3 day(s), longest 4 (last learned 2025-01-21)"));
        assert!(!text.contains("Latest quiz"));
        assert!(text.contains("Achievements: first_10, quiz_master"));
    }
}
