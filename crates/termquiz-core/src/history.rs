//! Quiz and learning history with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Hub, InfoRecord};
use crate::session::QuizScore;
use crate::statistics::percentage;

/// A finished quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    /// Unique attempt identifier.
    pub id: Uuid,
    /// Hub the quiz was drawn from.
    pub hub: Hub,
    /// Deck (or comma-joined decks) the pool came from.
    pub deck_id: String,
    /// Correct answers.
    pub score: u32,
    /// Questions answered.
    pub total: u32,
    /// When the quiz was finished.
    pub completed_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(hub: Hub, deck_id: impl Into<String>, score: QuizScore) -> Self {
        Self {
            id: Uuid::new_v4(),
            hub,
            deck_id: deck_id.into(),
            score: score.score,
            total: score.total,
            completed_at: Utc::now(),
        }
    }

    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total)
    }
}

/// An info item the user has marked as learned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedInfo {
    pub hub: Hub,
    pub deck_id: String,
    /// Publication date of the deck.
    pub date: NaiveDate,
    /// Index of the item within the deck's `infos`.
    pub info_index: usize,
    pub learned_at: DateTime<Utc>,
}

impl LearnedInfo {
    pub fn new(record: &InfoRecord, info_index: usize) -> Self {
        Self {
            hub: record.hub,
            deck_id: record.id.clone(),
            date: record.date,
            info_index,
            learned_at: Utc::now(),
        }
    }

    /// Calendar day (UTC) the item was learned on.
    pub fn learned_on(&self) -> NaiveDate {
        self.learned_at.date_naive()
    }
}

/// Every recorded attempt and learned item, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizHistory {
    #[serde(default)]
    pub attempts: Vec<QuizAttempt>,
    #[serde(default)]
    pub learned: Vec<LearnedInfo>,
}

impl QuizHistory {
    /// Load history from a JSON file; a missing file is an empty history.
    pub fn load_json(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no history at {}, starting fresh", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read history from {}", path.display()))?;
        let history: QuizHistory = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse history JSON: {}", path.display()))?;
        Ok(history)
    }

    /// Save history as JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize history")?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write history to {}", path.display()))?;
        Ok(())
    }

    pub fn record(&mut self, attempt: QuizAttempt) {
        self.attempts.push(attempt);
    }

    /// Mark an info item as learned.
    ///
    /// Returns `false` if that item of that deck was already learned.
    pub fn mark_learned(&mut self, entry: LearnedInfo) -> bool {
        if self.is_learned(&entry.deck_id, entry.info_index) {
            return false;
        }
        self.learned.push(entry);
        true
    }

    pub fn is_learned(&self, deck_id: &str, info_index: usize) -> bool {
        self.learned
            .iter()
            .any(|l| l.deck_id == deck_id && l.info_index == info_index)
    }

    /// Learned info indices of one deck, ascending.
    pub fn learned_indices(&self, deck_id: &str) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .learned
            .iter()
            .filter(|l| l.deck_id == deck_id)
            .map(|l| l.info_index)
            .collect();
        indices.sort_unstable();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InfoRecord {
        InfoRecord {
            id: "finance-2025-01-20".into(),
            hub: Hub::Finance,
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            infos: vec![],
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = QuizHistory::load_json(&dir.path().join("none.json")).unwrap();
        assert!(history.attempts.is_empty());
        assert!(history.learned.is_empty());
    }

    #[test]
    fn record_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/history.json");

        let mut history = QuizHistory::default();
        history.record(QuizAttempt::new(Hub::Ai, "ai-1", QuizScore { score: 7, total: 10 }));
        history.record(QuizAttempt::new(
            Hub::Finance,
            "fin-1",
            QuizScore { score: 2, total: 4 },
        ));
        history.mark_learned(LearnedInfo::new(&record(), 1));
        history.save_json(&path).unwrap();

        let loaded = QuizHistory::load_json(&path).unwrap();
        assert_eq!(loaded.attempts.len(), 2);
        assert_eq!(loaded.attempts[0].deck_id, "ai-1");
        assert_eq!(loaded.attempts[0].percentage(), 70);
        assert_eq!(loaded.attempts[1].hub, Hub::Finance);
        assert_eq!(loaded.learned, history.learned);
    }

    #[test]
    fn learned_items_are_not_duplicated() {
        let mut history = QuizHistory::default();
        assert!(history.mark_learned(LearnedInfo::new(&record(), 2)));
        assert!(history.mark_learned(LearnedInfo::new(&record(), 0)));
        assert!(!history.mark_learned(LearnedInfo::new(&record(), 2)));

        assert_eq!(history.learned.len(), 2);
        assert!(history.is_learned("finance-2025-01-20", 0));
        assert!(!history.is_learned("finance-2025-01-20", 1));
        assert_eq!(history.learned_indices("finance-2025-01-20"), vec![0, 2]);
        assert!(history.learned_indices("other").is_empty());
    }

    #[test]
    fn history_without_learned_field_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, r#"{ "attempts": [] }"#).unwrap();
        let history = QuizHistory::load_json(&path).unwrap();
        assert!(history.learned.is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(QuizHistory::load_json(&path).is_err());
    }
}
