//! Career module error types

use thiserror::Error;

use super::quiz::{QuizAction, QuizPhase};

/// Errors raised by the career scorer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CareerError {
    /// The fixture has no opportunity to attach to a recommendation
    #[error("Fixture has no opportunities to recommend")]
    NoOpportunities,
}

/// Result type for scoring operations
pub type CareerResult<T> = Result<T, CareerError>;

/// Errors raised by the quiz state machine
///
/// A rejected call never changes the quiz state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// The action is not allowed in the current phase
    #[error("Cannot {action} while in {phase}")]
    InvalidTransition { action: QuizAction, phase: QuizPhase },

    /// `next` was called without a selected option
    #[error("Select an option before continuing")]
    NoSelection,

    /// The option does not belong to the current question
    #[error("Option '{option_id}' is not an answer to question '{question_id}'")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },

    /// `previous` was called on the first question
    #[error("Already at the first question")]
    AtFirstQuestion,

    /// The fixture has no questions to ask
    #[error("No quiz questions available")]
    NoQuestions,

    /// Scoring the finished quiz failed
    #[error("Scoring failed: {0}")]
    Scoring(#[from] CareerError),
}
