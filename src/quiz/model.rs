//! Domain model for quiz attempts
//!
//! Questions and their option sets are owned by the question bank and are
//! read-only here. The submission payload is the single internal shape all
//! quiz modes share; per-endpoint field naming lives in `api::models`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::answers::AnswerRecord;

/// One answer choice of a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Short identifier, unique within the question (e.g. "a")
    pub key: String,
    /// Display text
    pub content: String,
}

/// A question as served by the question bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Opaque identifier, unique within one quiz
    pub id: String,
    /// Question stem
    #[serde(alias = "question")]
    pub text: String,
    /// Ordered answer choices
    pub options: Vec<QuestionOption>,
    /// Key of the correct option; withheld by some modes until grading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    /// Rationale shown after the question is answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// Look up an option by key
    pub fn option(&self, key: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.key == key)
    }

    /// Whether `key` names one of this question's options
    pub fn has_option(&self, key: &str) -> bool {
        self.option(key).is_some()
    }

    /// Whether `key` is the correct answer, or `None` when the bank
    /// withheld the answer key for this mode
    pub fn is_correct(&self, key: &str) -> Option<bool> {
        self.correct_answer.as_deref().map(|correct| correct == key)
    }
}

/// Difficulty selector for subject quizzes
///
/// The wire values are fixed by the question bank; `as_str` returns them
/// verbatim and serde uses the same spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    /// Relaxed warm-up questions
    #[serde(rename = "Funny/Easy")]
    Easy,
    #[default]
    #[serde(rename = "Moderate")]
    Moderate,
    /// Exam-level difficulty
    #[serde(rename = "Competitive")]
    Competitive,
}

impl Mood {
    /// The wire value the question bank expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Funny/Easy",
            Self::Moderate => "Moderate",
            Self::Competitive => "Competitive",
        }
    }

    /// Parse a mood from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "funny" | "funny/easy" => Some(Self::Easy),
            "moderate" | "medium" => Some(Self::Moderate),
            "competitive" | "hard" => Some(Self::Competitive),
            _ => None,
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| format!("Unknown mood: {}. Options: easy, moderate, competitive", s))
    }
}

/// What the user asked to be quizzed on
#[derive(Debug, Clone, PartialEq)]
pub enum QuizSelection {
    /// All questions of one chapter
    Chapter { chapter_id: String },
    /// A hand-picked list of topics
    Topics { topic_ids: Vec<String> },
    /// A subject-wide quiz filtered by mood; `amc` selects the AMC
    /// submission endpoint and is the only signal that does so
    Subject { subject_id: String, mood: Mood, amc: bool },
    /// A timed mock test paper
    MockTest { test_id: String },
}

impl QuizSelection {
    /// The submission dialect this selection grades through
    pub fn mode(&self) -> QuizMode {
        match self {
            Self::Chapter { .. } => QuizMode::Chapter,
            Self::Topics { .. } => QuizMode::Topic,
            Self::Subject { amc: true, .. } => QuizMode::Amc,
            Self::Subject { .. } => QuizMode::Subject,
            Self::MockTest { .. } => QuizMode::MockTest,
        }
    }
}

/// Submission dialect; selects the submit endpoint and its field names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    Chapter,
    Topic,
    Subject,
    Amc,
    MockTest,
}

/// Everything a submit collaborator needs to grade an attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    /// Identity value, included verbatim
    pub user_id: String,
    /// Server-issued attempt identifier
    pub attempt_id: String,
    /// Submission dialect for this attempt
    pub mode: QuizMode,
    /// Whole seconds from first question to submission
    pub time_taken_seconds: u64,
    /// Every recorded answer, in first-write order
    pub answers: Vec<AnswerRecord>,
}

/// Grading result for a submitted attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttemptResult {
    /// Percentage score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Questions in the attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u32>,
    /// Correctly answered questions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_count: Option<u32>,
    /// Any further result fields the server returned, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Load a practice question file (a JSON array of questions)
pub fn load_question_file(path: &Path) -> Result<Vec<Question>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read question file {:?}", path))?;
    let questions: Vec<Question> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse question file {:?}", path))?;
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_parse() {
        assert_eq!(Mood::parse("easy"), Some(Mood::Easy));
        assert_eq!(Mood::parse("Funny/Easy"), Some(Mood::Easy));
        assert_eq!(Mood::parse("MEDIUM"), Some(Mood::Moderate));
        assert_eq!(Mood::parse("hard"), Some(Mood::Competitive));
        assert_eq!(Mood::parse("unknown"), None);
    }

    #[test]
    fn mood_serializes_to_wire_value() {
        let json = serde_json::to_string(&Mood::Easy).unwrap();
        assert_eq!(json, r#""Funny/Easy""#);
    }

    #[test]
    fn selection_mode_honours_amc_flag() {
        let plain = QuizSelection::Subject {
            subject_id: "anatomy".into(),
            mood: Mood::Moderate,
            amc: false,
        };
        let amc = QuizSelection::Subject {
            subject_id: "anatomy".into(),
            mood: Mood::Moderate,
            amc: true,
        };

        assert_eq!(plain.mode(), QuizMode::Subject);
        assert_eq!(amc.mode(), QuizMode::Amc);
    }

    #[test]
    fn question_option_lookup() {
        let question = Question {
            id: "q1".into(),
            text: "First-line treatment?".into(),
            options: vec![
                QuestionOption { key: "a".into(), content: "Rest".into() },
                QuestionOption { key: "b".into(), content: "Surgery".into() },
            ],
            correct_answer: Some("a".into()),
            explanation: None,
        };

        assert!(question.has_option("b"));
        assert!(!question.has_option("z"));
        assert_eq!(question.is_correct("a"), Some(true));
        assert_eq!(question.is_correct("b"), Some(false));
    }

    #[test]
    fn withheld_answer_key_is_none() {
        let question = Question {
            id: "q1".into(),
            text: "?".into(),
            options: vec![QuestionOption { key: "a".into(), content: "Yes".into() }],
            correct_answer: None,
            explanation: None,
        };

        assert_eq!(question.is_correct("a"), None);
    }

    #[test]
    fn question_accepts_question_field_alias() {
        let json = r#"{
            "id": "q1",
            "question": "Which nerve?",
            "options": [{"key": "a", "content": "Ulnar"}]
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.text, "Which nerve?");
        assert!(question.correct_answer.is_none());
    }

    #[test]
    fn question_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        std::fs::write(
            &path,
            r#"[
                {
                    "id": "q1",
                    "text": "Commonest cause?",
                    "options": [
                        {"key": "a", "content": "Viral"},
                        {"key": "b", "content": "Bacterial"}
                    ],
                    "correct_answer": "a",
                    "explanation": "Most cases are viral."
                }
            ]"#,
        )
        .unwrap();

        let questions = load_question_file(&path).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 2);
    }

    #[test]
    fn question_file_missing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(load_question_file(&missing).is_err());
    }
}
