//! Score percentages, per-hub quiz statistics, learning streaks and
//! achievements.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::history::QuizHistory;
use crate::model::Hub;

/// Percentage of correct answers, rounded to the nearest integer.
///
/// Returns 0 when `total` is 0.
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as u32
}

/// Aggregate statistics across all recorded attempts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryStats {
    /// Per-hub statistics.
    pub per_hub: BTreeMap<Hub, HubStats>,
    /// Number of attempts across all hubs.
    pub total_attempts: usize,
    /// Learning progress and achievements.
    pub progress: ProgressStats,
}

/// Statistics for a single hub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubStats {
    /// Hub these stats describe.
    pub hub: Hub,
    /// Number of finished quizzes.
    pub attempts: usize,
    /// Correct answers summed over all attempts.
    pub total_correct: u32,
    /// Questions summed over all attempts.
    pub total_questions: u32,
    /// Mean of the per-attempt percentages.
    pub average_percentage: f64,
    /// Best single-attempt percentage.
    pub best_percentage: u32,
    /// When the most recent attempt finished.
    pub last_attempt: Option<DateTime<Utc>>,
}

impl HubStats {
    fn new(hub: Hub) -> Self {
        Self {
            hub,
            attempts: 0,
            total_correct: 0,
            total_questions: 0,
            average_percentage: 0.0,
            best_percentage: 0,
            last_attempt: None,
        }
    }

    /// Percentage of all questions answered correctly in this hub.
    pub fn overall_percentage(&self) -> u32 {
        percentage(self.total_correct, self.total_questions)
    }
}

/// Compute aggregate statistics from the quiz history.
pub fn compute_stats(history: &QuizHistory) -> HistoryStats {
    let mut per_hub: BTreeMap<Hub, HubStats> = BTreeMap::new();
    let mut percentage_sums: BTreeMap<Hub, u64> = BTreeMap::new();

    for attempt in &history.attempts {
        let stats = per_hub
            .entry(attempt.hub)
            .or_insert_with(|| HubStats::new(attempt.hub));
        let pct = attempt.percentage();

        stats.attempts += 1;
        stats.total_correct += attempt.score;
        stats.total_questions += attempt.total;
        stats.best_percentage = stats.best_percentage.max(pct);
        stats.last_attempt = match stats.last_attempt {
            Some(last) if last >= attempt.completed_at => Some(last),
            _ => Some(attempt.completed_at),
        };
        *percentage_sums.entry(attempt.hub).or_default() += pct as u64;
    }

    for (hub, stats) in per_hub.iter_mut() {
        let sum = percentage_sums.get(hub).copied().unwrap_or(0);
        stats.average_percentage = sum as f64 / stats.attempts.max(1) as f64;
    }

    HistoryStats {
        per_hub,
        total_attempts: history.attempts.len(),
        progress: compute_progress(history),
    }
}

/// Learned items needed for [`Achievement::First10`].
pub const FIRST_10_LEARNED: usize = 10;
/// Learned items needed for [`Achievement::First50`].
pub const FIRST_50_LEARNED: usize = 50;
/// Consecutive learning days needed for [`Achievement::WeekStreak`].
pub const WEEK_STREAK_DAYS: u32 = 7;
/// Quiz percentage needed for [`Achievement::QuizMaster`].
pub const QUIZ_MASTER_PERCENTAGE: u32 = 80;

/// Milestones unlocked by learning and quizzing.
///
/// Unlocks are never revoked: each condition is checked against the
/// best value ever reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Achievement {
    #[serde(rename = "first_10")]
    First10,
    #[serde(rename = "first_50")]
    First50,
    #[serde(rename = "week_streak")]
    WeekStreak,
    #[serde(rename = "quiz_master")]
    QuizMaster,
}

impl Achievement {
    pub fn id(&self) -> &'static str {
        match self {
            Achievement::First10 => "first_10",
            Achievement::First50 => "first_50",
            Achievement::WeekStreak => "week_streak",
            Achievement::QuizMaster => "quiz_master",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::First10 => "learned 10 info items",
            Achievement::First50 => "learned 50 info items",
            Achievement::WeekStreak => "learned on 7 days in a row",
            Achievement::QuizMaster => "scored 80% or more in a quiz",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Learning progress across all hubs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressStats {
    /// Info items marked as learned.
    pub total_learned: usize,
    pub learned_per_hub: BTreeMap<Hub, usize>,
    /// Consecutive learning days ending at `last_learned_date`.
    pub streak_days: u32,
    /// Longest run of consecutive learning days ever.
    pub longest_streak: u32,
    pub last_learned_date: Option<NaiveDate>,
    /// Percentage of the most recently finished quiz.
    pub latest_quiz_percentage: Option<u32>,
    pub achievements: Vec<Achievement>,
}

/// Compute learning progress and unlocked achievements.
pub fn compute_progress(history: &QuizHistory) -> ProgressStats {
    let mut learned_per_hub: BTreeMap<Hub, usize> = BTreeMap::new();
    for entry in &history.learned {
        *learned_per_hub.entry(entry.hub).or_default() += 1;
    }

    let days: BTreeSet<NaiveDate> = history.learned.iter().map(|l| l.learned_on()).collect();
    let streak_days = streak_days(&days);
    let longest_streak = longest_streak(&days);

    let latest_quiz_percentage = history
        .attempts
        .iter()
        .max_by_key(|a| a.completed_at)
        .map(|a| a.percentage());
    let best_quiz_percentage = history.attempts.iter().map(|a| a.percentage()).max();

    let achievements = achievements(history.learned.len(), longest_streak, best_quiz_percentage);

    ProgressStats {
        total_learned: history.learned.len(),
        learned_per_hub,
        streak_days,
        longest_streak,
        last_learned_date: days.iter().next_back().copied(),
        latest_quiz_percentage,
        achievements,
    }
}

/// Consecutive days ending at the most recent day in `days`.
pub fn streak_days(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut streak = 0;
    let mut day = days.iter().next_back().copied();
    while let Some(d) = day.filter(|d| days.contains(d)) {
        streak += 1;
        day = d.pred_opt();
    }
    streak
}

/// Longest run of consecutive days in `days`.
pub fn longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for &day in days {
        run = match prev.and_then(|p| p.succ_opt()) {
            Some(next) if next == day => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}

/// Achievements earned for the given totals.
pub fn achievements(
    total_learned: usize,
    longest_streak: u32,
    best_quiz_percentage: Option<u32>,
) -> Vec<Achievement> {
    let mut earned = Vec::new();
    if total_learned >= FIRST_10_LEARNED {
        earned.push(Achievement::First10);
    }
    if total_learned >= FIRST_50_LEARNED {
        earned.push(Achievement::First50);
    }
    if longest_streak >= WEEK_STREAK_DAYS {
        earned.push(Achievement::WeekStreak);
    }
    if best_quiz_percentage.is_some_and(|p| p >= QUIZ_MASTER_PERCENTAGE) {
        earned.push(Achievement::QuizMaster);
    }
    earned
}

/// Achievements in `after` that are missing from `before`.
pub fn newly_unlocked(before: &[Achievement], after: &[Achievement]) -> Vec<Achievement> {
    after
        .iter()
        .filter(|a| !before.contains(a))
        .copied()
        .collect()
}
