//! Local grading for practice attempts
//!
//! Practice mode has no server; this collaborator scores a submitted
//! attempt against the question list's own answer keys.

use crate::api::error::ApiError;

use super::model::{AttemptResult, Question, SubmissionPayload};
use super::session::SubmitAttempt;

/// Grades attempts locally from the questions' `correct_answer` keys
pub struct LocalGrader {
    questions: Vec<Question>,
}

impl LocalGrader {
    /// Create a grader for the given question list
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    fn correct_count(&self, payload: &SubmissionPayload) -> u32 {
        payload
            .answers
            .iter()
            .filter(|record| {
                self.questions.iter().any(|q| {
                    q.id == record.question_id
                        && q.correct_answer.as_deref() == Some(record.selected_key.as_str())
                })
            })
            .count() as u32
    }
}

impl SubmitAttempt for LocalGrader {
    async fn submit_attempt(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<AttemptResult, ApiError> {
        let correct = self.correct_count(payload);
        let total = self.questions.len() as u32;
        let score = if total == 0 {
            0.0
        } else {
            f64::from(correct) * 100.0 / f64::from(total)
        };

        Ok(AttemptResult {
            score: Some(score),
            total_questions: Some(total),
            correct_count: Some(correct),
            extra: Default::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::quiz::answers::AnswerRecord;
    use crate::quiz::model::{QuestionOption, QuizMode};

    use super::*;

    fn question(id: &str, correct: Option<&str>) -> Question {
        Question {
            id: id.into(),
            text: "?".into(),
            options: vec![
                QuestionOption { key: "a".into(), content: "A".into() },
                QuestionOption { key: "b".into(), content: "B".into() },
            ],
            correct_answer: correct.map(Into::into),
            explanation: None,
        }
    }

    fn payload(answers: Vec<(&str, &str)>) -> SubmissionPayload {
        SubmissionPayload {
            user_id: "local".into(),
            attempt_id: "practice-1".into(),
            mode: QuizMode::Chapter,
            time_taken_seconds: 10,
            answers: answers
                .into_iter()
                .map(|(q, k)| AnswerRecord { question_id: q.into(), selected_key: k.into() })
                .collect(),
        }
    }

    #[tokio::test]
    async fn scores_correct_answers() {
        let grader = LocalGrader::new(vec![
            question("q1", Some("a")),
            question("q2", Some("b")),
            question("q3", Some("a")),
        ]);

        let result =
            grader.submit_attempt(&payload(vec![("q1", "a"), ("q2", "a"), ("q3", "a")])).await.unwrap();

        assert_eq!(result.correct_count, Some(2));
        assert_eq!(result.total_questions, Some(3));
        assert_eq!(result.score, Some(2.0 * 100.0 / 3.0));
    }

    #[tokio::test]
    async fn unanswered_questions_count_against_the_score() {
        let grader = LocalGrader::new(vec![question("q1", Some("a")), question("q2", Some("b"))]);

        let result = grader.submit_attempt(&payload(vec![("q1", "a")])).await.unwrap();

        assert_eq!(result.correct_count, Some(1));
        assert_eq!(result.total_questions, Some(2));
    }

    #[tokio::test]
    async fn questions_without_answer_keys_never_score() {
        let grader = LocalGrader::new(vec![question("q1", None)]);

        let result = grader.submit_attempt(&payload(vec![("q1", "a")])).await.unwrap();

        assert_eq!(result.correct_count, Some(0));
    }
}
