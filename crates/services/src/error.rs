//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

use quiz_core::model::{QuestionError, QuizSetError, SessionSummaryError};

/// Why an in-session transition was refused.
///
/// These are learner-guidance conditions, not faults: the session is left
/// untouched and the host shows the message instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BlockReason {
    /// `advance` before the current question is resolved.
    AnswerRequired,
    /// `select_option` with an index the current question does not have.
    OptionOutOfRange { index: usize, len: usize },
    /// `retreat` while back-navigation is disabled.
    RetreatDisabled,
    /// Any in-question event after the results screen was reached.
    SessionComplete,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::AnswerRequired => f.write_str("Select an answer before continuing."),
            BlockReason::OptionOutOfRange { index, len } => {
                write!(f, "Option {} does not exist; choose 1 to {len}.", index + 1)
            }
            BlockReason::RetreatDisabled => f.write_str("Going back is disabled for this quiz."),
            BlockReason::SessionComplete => {
                f.write_str("The quiz is finished. Restart to try again.")
            }
        }
    }
}

/// Errors emitted by the quiz session controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("invalid quiz input: {0}")]
    InvalidInput(#[from] QuizSetError),
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
    #[error("{0}")]
    Blocked(BlockReason),
}

impl SessionError {
    /// Returns the block reason for recoverable, in-session refusals.
    #[must_use]
    pub fn block_reason(&self) -> Option<BlockReason> {
        match self {
            SessionError::Blocked(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Errors emitted while loading quiz content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("quiz content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("question {index} has no correct answer index")]
    MissingCorrectIndex { index: usize },
    #[error(transparent)]
    QuizSet(#[from] QuizSetError),
}
