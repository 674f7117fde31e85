//! Quiz attempt state machine
//!
//! Coordinates question traversal, answer recording, elapsed-time
//! accounting and submission for one attempt. All user actions go through
//! `&mut self`, so they are strictly serialized, and the phase tag makes
//! illegal combinations (answering while submitting, submitting twice)
//! unrepresentable.

use std::time::Instant;

use crate::api::error::ApiError;

use super::answers::{AnswerRecord, AnswerStore};
use super::error::QuizError;
use super::model::{AttemptResult, Question, QuizMode, SubmissionPayload};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Questions not yet supplied
    Loading,
    /// Taking the quiz
    InProgress,
    /// Submission request in flight
    Submitting,
    /// Graded; the session is frozen
    Completed(AttemptResult),
    /// Submission failed; answers are intact and submit may be retried
    Failed { message: String },
}

/// Outcome of a forward navigation
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved to the question at this index
    Moved(usize),
    /// The last question was active; the attempt was submitted and graded
    Submitted(AttemptResult),
}

/// The submission collaborator seam
///
/// Implemented by the HTTP client for real attempts and by the local
/// grader for practice mode.
pub trait SubmitAttempt {
    /// Deliver a completed attempt for grading
    async fn submit_attempt(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<AttemptResult, ApiError>;
}

/// State for one quiz attempt
pub struct QuizSession<S> {
    /// Submission collaborator
    service: S,
    /// Submission dialect for this attempt
    mode: QuizMode,
    /// Identity value included verbatim in the payload
    user_id: String,
    phase: Phase,
    /// Fixed for the lifetime of the session once `begin` succeeds
    questions: Vec<Question>,
    /// Index of the question currently displayed
    current: usize,
    answers: AnswerStore,
    /// Set exactly once, when the question list arrives
    started_at: Option<Instant>,
    attempt_id: Option<String>,
}

impl<S: SubmitAttempt> QuizSession<S> {
    /// Create a session awaiting its question list
    pub fn new(service: S, mode: QuizMode, user_id: impl Into<String>) -> Self {
        Self {
            service,
            mode,
            user_id: user_id.into(),
            phase: Phase::Loading,
            questions: Vec::new(),
            current: 0,
            answers: AnswerStore::new(),
            started_at: None,
            attempt_id: None,
        }
    }

    /// Supply the fetched question list and start the attempt clock.
    ///
    /// The first successful call pins `started_at`; repeat calls are no-ops,
    /// so duplicate screen effects cannot reset the clock or the position.
    pub fn begin(
        &mut self,
        questions: Vec<Question>,
        attempt_id: impl Into<String>,
    ) -> Result<(), QuizError> {
        if !matches!(self.phase, Phase::Loading) {
            return Ok(());
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestionsAvailable);
        }

        self.questions = questions;
        self.attempt_id = Some(attempt_id.into());
        self.current = 0;
        self.answers.reset();
        self.started_at = Some(Instant::now());
        self.phase = Phase::InProgress;
        tracing::debug!(questions = self.questions.len(), "quiz attempt started");
        Ok(())
    }

    /// Record the user's selection for the current question.
    ///
    /// Returns `false` without touching state when the question already has
    /// an answer (selections lock once feedback is shown), when the key
    /// names no option of the current question, or when the session is not
    /// accepting input.
    pub fn select_option(&mut self, key: &str) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(question) = self.questions.get(self.current) else {
            return false;
        };
        if self.answers.contains(&question.id) || !question.has_option(key) {
            return false;
        }

        self.answers.save(&question.id, key);
        true
    }

    /// Move to the next question, or submit when the last one is active.
    ///
    /// The forward gate: the current question must be answered first.
    /// Returns `Ok(None)` when the session is not accepting input.
    pub async fn go_next(&mut self) -> Result<Option<Advance>, QuizError> {
        if !self.is_active() {
            return Ok(None);
        }
        let Some(question) = self.questions.get(self.current) else {
            return Ok(None);
        };
        if !self.answers.contains(&question.id) {
            return Err(QuizError::AnswerRequired);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            return Ok(Some(Advance::Moved(self.current)));
        }

        match self.submit().await? {
            Some(result) => Ok(Some(Advance::Submitted(result))),
            None => Ok(None),
        }
    }

    /// Move back one question. Backward review is never gated.
    ///
    /// Returns the new index, or `None` at the first question or when the
    /// session is not accepting input.
    pub fn go_previous(&mut self) -> Option<usize> {
        if !self.is_active() || self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Submit the attempt for grading.
    ///
    /// Returns `Ok(None)` when there is nothing to submit: the session is
    /// still loading, already graded, or a submission is in flight. On
    /// failure the session moves to `Failed` with answers and the attempt
    /// clock untouched, so a retry sends an equivalent payload with a
    /// larger `time_taken_seconds`.
    pub async fn submit(&mut self) -> Result<Option<AttemptResult>, QuizError> {
        if !self.is_active() {
            return Ok(None);
        }

        let payload = self.submission_payload();
        self.phase = Phase::Submitting;
        tracing::debug!(
            attempt_id = %payload.attempt_id,
            answers = payload.answers.len(),
            time_taken_seconds = payload.time_taken_seconds,
            "submitting attempt"
        );

        match self.service.submit_attempt(&payload).await {
            Ok(result) => {
                self.phase = Phase::Completed(result.clone());
                Ok(Some(result))
            }
            Err(err) => {
                tracing::warn!(error = %err, "attempt submission failed");
                self.phase = Phase::Failed { message: err.to_string() };
                Err(QuizError::SubmissionFailed(err))
            }
        }
    }

    /// Assemble the payload a submit collaborator receives
    pub fn submission_payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            user_id: self.user_id.clone(),
            attempt_id: self.attempt_id.clone().unwrap_or_default(),
            mode: self.mode,
            time_taken_seconds: self.elapsed_seconds(),
            answers: self.answers.records().to_vec(),
        }
    }

    /// Whole seconds since the question list arrived
    pub fn elapsed_seconds(&self) -> u64 {
        self.started_at.map(|t| t.elapsed().as_secs()).unwrap_or(0)
    }

    /// Whether the session accepts user actions
    fn is_active(&self) -> bool {
        matches!(self.phase, Phase::InProgress | Phase::Failed { .. })
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Index of the question currently displayed
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question currently displayed
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Previously recorded answer for the current question, if any
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        self.current_question().and_then(|q| self.answers.get(&q.id))
    }

    /// Whether the current question is locked with an answer
    pub fn is_current_answered(&self) -> bool {
        self.current_answer().is_some()
    }

    /// All questions of the attempt
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in the attempt
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the question list has not arrived yet
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Recorded answers so far
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Number of answered questions
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Server-issued attempt identifier
    pub fn attempt_id(&self) -> Option<&str> {
        self.attempt_id.as_deref()
    }
}
