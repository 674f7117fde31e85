//! Answer recording for a single quiz attempt
//!
//! Keeps the user's option selections keyed by question id. The store is
//! owned by one `QuizSession` and discarded with it, so answers from one
//! attempt can never leak into the next.

use serde::{Deserialize, Serialize};

/// One recorded selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Question this selection belongs to
    pub question_id: String,
    /// Option key the user chose
    pub selected_key: String,
}

/// Upsert map of question id to selected option
///
/// Lookup is always by key. Records keep their first-write position, so a
/// resubmitted payload lists answers in a stable order.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    records: Vec<AnswerRecord>,
}

impl AnswerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, replacing any earlier one for the same question.
    ///
    /// `question_id` must be non-empty; the session only passes ids taken
    /// from fetched questions.
    pub fn save(&mut self, question_id: &str, selected_key: &str) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.question_id == question_id) {
            existing.selected_key = selected_key.to_string();
        } else {
            self.records.push(AnswerRecord {
                question_id: question_id.to_string(),
                selected_key: selected_key.to_string(),
            });
        }
    }

    /// Look up the recorded selection for a question
    pub fn get(&self, question_id: &str) -> Option<&AnswerRecord> {
        self.records.iter().find(|r| r.question_id == question_id)
    }

    /// Whether a question has a recorded selection
    pub fn contains(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    /// Drop all records (reusing the store for a brand-new attempt)
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// All records in first-write order
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    /// Number of answered questions
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been answered yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn upsert_replaces_earlier_selection() {
        let mut store = AnswerStore::new();
        store.save("q1", "a");
        store.save("q1", "c");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("q1").map(|r| r.selected_key.as_str()), Some("c"));
    }

    #[test]
    fn save_is_idempotent() {
        let mut store = AnswerStore::new();
        store.save("q1", "b");
        store.save("q1", "b");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("q1").map(|r| r.selected_key.as_str()), Some("b"));
    }

    #[test]
    fn missing_question_returns_none() {
        let store = AnswerStore::new();
        assert!(store.get("q9").is_none());
        assert!(!store.contains("q9"));
    }

    #[test]
    fn reset_clears_records() {
        let mut store = AnswerStore::new();
        store.save("q1", "a");
        store.save("q2", "b");
        store.reset();

        assert!(store.is_empty());
        assert!(store.get("q1").is_none());
    }

    #[test]
    fn records_keep_first_write_order() {
        let mut store = AnswerStore::new();
        store.save("q2", "a");
        store.save("q1", "b");
        store.save("q2", "d");

        let ids: Vec<&str> = store.records().iter().map(|r| r.question_id.as_str()).collect();
        assert_eq!(ids, vec!["q2", "q1"]);
    }

    proptest! {
        /// Any sequence of saves leaves at most one record per question,
        /// holding the last written key.
        #[test]
        fn upsert_invariant(saves in prop::collection::vec((0u8..6, "[a-d]"), 0..50)) {
            let mut store = AnswerStore::new();
            let mut last: HashMap<String, String> = HashMap::new();

            for (id, key) in &saves {
                let id = format!("q{id}");
                store.save(&id, key);
                last.insert(id, key.clone());
            }

            prop_assert_eq!(store.len(), last.len());
            for (id, key) in &last {
                prop_assert_eq!(store.get(id).map(|r| r.selected_key.as_str()), Some(key.as_str()));
            }
        }
    }
}
