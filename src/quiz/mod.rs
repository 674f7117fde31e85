//! Quiz attempt core
//!
//! The session state machine, the per-attempt answer store, the domain
//! model, and the local grader for practice attempts.

pub mod answers;
pub mod error;
pub mod grading;
pub mod model;
pub mod session;

// Re-export commonly used types
pub use answers::{AnswerRecord, AnswerStore};
pub use error::QuizError;
pub use model::{AttemptResult, Mood, Question, QuizMode, QuizSelection, SubmissionPayload};
pub use session::{Advance, Phase, QuizSession, SubmitAttempt};
