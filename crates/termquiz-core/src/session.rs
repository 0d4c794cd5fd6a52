//! Quiz session state and scoring.
//!
//! A session walks through generated questions in order, records one
//! answer per question, and keeps the running score.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::quiz::QuizQuestion;
use crate::statistics::percentage;

/// The score a finished (or abandoned) session reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    /// Correct answers.
    pub score: u32,
    /// Questions answered.
    pub total: u32,
}

impl QuizScore {
    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total)
    }
}

/// What happened when an answer was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the selected option was correct.
    pub correct: bool,
    /// Index of the correct option, for feedback.
    pub correct_index: usize,
    /// Whether that was the last question.
    pub finished: bool,
}

/// An in-progress quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<usize>,
    correct: u32,
}

impl QuizSession {
    /// Start a session over the given questions.
    ///
    /// An empty question list is reported as
    /// [`QuizError::NoQuestionsAvailable`] rather than as an empty quiz.
    pub fn start(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestionsAvailable);
        }
        Ok(Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            correct: 0,
        })
    }

    /// The question awaiting an answer, or `None` once finished.
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.answers.len())
    }

    /// 0-based index of the current question.
    pub fn position(&self) -> usize {
        self.answers.len()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; sessions cannot be started without questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Submit an answer (0-based option index) for the current question.
    pub fn answer(&mut self, selected: usize) -> Result<AnswerOutcome, QuizError> {
        let question = self.current().ok_or(QuizError::SessionFinished)?;
        if selected >= question.option_count() {
            return Err(QuizError::OptionOutOfRange {
                selected,
                available: question.option_count(),
            });
        }

        let correct = question.is_correct(selected);
        let correct_index = question.correct_index;
        if correct {
            self.correct += 1;
        }
        self.answers.push(selected);

        Ok(AnswerOutcome {
            correct,
            correct_index,
            finished: self.is_finished(),
        })
    }

    /// Correct answers so far.
    pub fn score(&self) -> u32 {
        self.correct
    }

    /// Selected option (0-based) for each answered question, in order.
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    /// Questions answered so far.
    pub fn answered(&self) -> u32 {
        self.answers.len() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    /// Percentage correct over the questions answered so far.
    pub fn percentage(&self) -> u32 {
        percentage(self.correct, self.answered())
    }

    pub fn to_score(&self) -> QuizScore {
        QuizScore {
            score: self.correct,
            total: self.answered(),
        }
    }

    /// Clear all answers and start again with the same questions.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.correct = 0;
    }
}
