//! Quiz session error types.
//!
//! Parsing and generation never fail; these errors cover the caller-side
//! conditions a quiz session has to report explicitly.

use thiserror::Error;

/// Errors that can occur while running a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The term pool was empty, so no questions could be generated.
    #[error("no questions available")]
    NoQuestionsAvailable,

    /// The selected option does not exist on the current question.
    #[error("option {selected} is out of range ({available} options)")]
    OptionOutOfRange { selected: usize, available: usize },

    /// Every question has already been answered.
    #[error("quiz session is already finished")]
    SessionFinished,
}

impl QuizError {
    /// Returns `true` if the caller can recover by choosing another option.
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuizError::OptionOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            QuizError::NoQuestionsAvailable.to_string(),
            "no questions available"
        );
        assert_eq!(
            QuizError::OptionOutOfRange {
                selected: 5,
                available: 4
            }
            .to_string(),
            "option 5 is out of range (4 options)"
        );
    }

    #[test]
    fn only_out_of_range_is_retryable() {
        assert!(QuizError::OptionOutOfRange {
            selected: 9,
            available: 2
        }
        .is_retryable());
        assert!(!QuizError::SessionFinished.is_retryable());
        assert!(!QuizError::NoQuestionsAvailable.is_retryable());
    }
}
