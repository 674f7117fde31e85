//! Wire models for the question bank API
//!
//! The submit dialects differ only in field names; each request struct is a
//! thin adapter over the shared `SubmissionPayload`.

use serde::{Deserialize, Serialize};

use crate::quiz::answers::AnswerRecord;
use crate::quiz::model::{AttemptResult, Mood, Question, SubmissionPayload};

/// Response to any start-quiz request
#[derive(Debug, Clone, Deserialize)]
pub struct StartQuizResponse {
    /// Whether the bank accepted the request
    pub success: bool,
    /// Question list; older endpoints use `data`, newer ones `questions`
    #[serde(default, alias = "data")]
    pub questions: Vec<Question>,
    /// Server-issued attempt identifier
    #[serde(default)]
    pub attempt_id: Option<String>,
    /// Failure reason when `success` is false
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for a topic-list start request
#[derive(Debug, Clone, Serialize)]
pub struct StartTopicsRequest<'a> {
    pub topic_ids: &'a [String],
}

/// Body for a subject start request
#[derive(Debug, Clone, Serialize)]
pub struct StartSubjectRequest {
    pub mood: Mood,
}

/// Response to any submit request
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    /// Whether the attempt was accepted and graded
    pub success: bool,
    /// Failure reason when `success` is false
    #[serde(default)]
    pub message: Option<String>,
    /// Grading result fields
    #[serde(flatten)]
    pub result: AttemptResult,
}

/// Submit body for chapter and topic quizzes
#[derive(Debug, Clone, Serialize)]
pub struct SubmitQuizRequest<'a> {
    pub user_id: &'a str,
    pub attempt_id: &'a str,
    pub time_taken: u64,
    pub answers: &'a [AnswerRecord],
}

impl<'a> SubmitQuizRequest<'a> {
    /// Adapt the shared payload to this dialect
    pub fn from_payload(payload: &'a SubmissionPayload) -> Self {
        Self {
            user_id: &payload.user_id,
            attempt_id: &payload.attempt_id,
            time_taken: payload.time_taken_seconds,
            answers: &payload.answers,
        }
    }
}

/// Submit body for subject and AMC quizzes, which call the answer list
/// `responses` and spell out the time unit
#[derive(Debug, Clone, Serialize)]
pub struct SubmitSubjectRequest<'a> {
    pub user_id: &'a str,
    pub attempt_id: &'a str,
    pub time_taken_seconds: u64,
    pub responses: &'a [AnswerRecord],
}

impl<'a> SubmitSubjectRequest<'a> {
    /// Adapt the shared payload to this dialect
    pub fn from_payload(payload: &'a SubmissionPayload) -> Self {
        Self {
            user_id: &payload.user_id,
            attempt_id: &payload.attempt_id,
            time_taken_seconds: payload.time_taken_seconds,
            responses: &payload.answers,
        }
    }
}

/// Submit body for mock tests, which carry the attempt id under a
/// mock-specific name
#[derive(Debug, Clone, Serialize)]
pub struct SubmitMockTestRequest<'a> {
    pub user_id: &'a str,
    pub mock_attempt_id: &'a str,
    pub time_taken: u64,
    pub answers: &'a [AnswerRecord],
}

impl<'a> SubmitMockTestRequest<'a> {
    /// Adapt the shared payload to this dialect
    pub fn from_payload(payload: &'a SubmissionPayload) -> Self {
        Self {
            user_id: &payload.user_id,
            mock_attempt_id: &payload.attempt_id,
            time_taken: payload.time_taken_seconds,
            answers: &payload.answers,
        }
    }
}
