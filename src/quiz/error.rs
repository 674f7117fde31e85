//! Error types for quiz attempts

use thiserror::Error;

use crate::api::error::ApiError;

/// Errors surfaced by the quiz session state machine
#[derive(Debug, Error)]
pub enum QuizError {
    /// The start collaborator returned an empty question list
    #[error("no questions available for this quiz")]
    NoQuestionsAvailable,

    /// The user tried to move forward without answering
    #[error("answer the current question before moving on")]
    AnswerRequired,

    /// Starting the quiz failed; a whole new start flow is required
    #[error("failed to start quiz: {0}")]
    StartFailed(#[source] ApiError),

    /// Submitting the attempt failed; answers are kept and submit may be retried
    #[error("failed to submit attempt: {0}")]
    SubmissionFailed(#[source] ApiError),
}

impl QuizError {
    /// Check if the current attempt can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuizError::AnswerRequired | QuizError::SubmissionFailed(_))
    }
}
