//! Multiple-choice quiz generation.
//!
//! Questions ask for the definition of a term; the wrong options are the
//! definitions of other terms in the same pool.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::TermItem;

/// Number of questions asked when the caller does not choose.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Maximum number of wrong options per question.
pub const DISTRACTOR_COUNT: usize = 3;

/// A single generated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// The term being asked about.
    pub term: String,
    /// Candidate definitions. At most `DISTRACTOR_COUNT + 1` entries; fewer
    /// when the pool is too small.
    pub options: Vec<String>,
    /// Index in `options` holding the correct definition.
    pub correct_index: usize,
}

impl QuizQuestion {
    /// Whether `selected` (0-based) is the correct option.
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }

    /// The correct definition.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// Generate up to `count` questions from `pool`.
///
/// The result has exactly `min(count, pool.len())` questions and is empty
/// for an empty pool. Question order, distractor choice, and option order
/// are all drawn from `rng`, so a seeded generator gives a reproducible quiz.
pub fn generate_quiz<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[TermItem],
    count: usize,
) -> Vec<QuizQuestion> {
    if pool.is_empty() || count == 0 {
        tracing::debug!(pool = pool.len(), count, "no questions to generate");
        return Vec::new();
    }

    let mut shuffled: Vec<&TermItem> = pool.iter().collect();
    shuffled.shuffle(rng);
    shuffled.truncate(count.min(pool.len()));

    let questions: Vec<QuizQuestion> = shuffled
        .into_iter()
        .map(|item| build_question(rng, pool, item))
        .collect();

    tracing::debug!(
        pool = pool.len(),
        questions = questions.len(),
        "generated quiz"
    );
    questions
}

/// Generate a quiz using the thread-local random generator.
pub fn generate_quiz_default(pool: &[TermItem], count: usize) -> Vec<QuizQuestion> {
    generate_quiz(&mut rand::thread_rng(), pool, count)
}

fn build_question<R: Rng + ?Sized>(rng: &mut R, pool: &[TermItem], item: &TermItem) -> QuizQuestion {
    let mut distractors = distractor_candidates(pool, item);
    distractors.shuffle(rng);
    distractors.truncate(DISTRACTOR_COUNT);

    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(item.description.clone());
    options.extend(distractors.into_iter().map(str::to_string));
    options.shuffle(rng);

    // The correct definition is present exactly once, so this always matches.
    let correct_index = options
        .iter()
        .position(|o| *o == item.description)
        .unwrap_or_default();

    QuizQuestion {
        term: item.term.clone(),
        options,
        correct_index,
    }
}

/// Definitions of other terms, without repeats and without the correct one.
fn distractor_candidates<'a>(pool: &'a [TermItem], item: &TermItem) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    pool.iter()
        .filter(|other| other.term != item.term)
        .map(|other| other.description.as_str())
        .filter(|description| *description != item.description)
        .filter(|description| seen.insert(*description))
        .collect()
}
