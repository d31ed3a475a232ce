//! Answer sets and the collector that edits them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sparse mapping from question id to free-text answer.
///
/// An absent key means the question is unanswered. Keys are not checked
/// against the catalog. Serializes as a plain JSON object, which is also the
/// stored format of a profile's `answers` column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites the answer for `question_id`.
    pub fn set(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries whose value is non-blank, with the value trimmed.
    pub fn answered(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .map(|(k, v)| (k, v.trim()))
            .filter(|(_, v)| !v.is_empty())
    }
}

impl From<BTreeMap<String, String>> for AnswerSet {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Holds the answers being edited on the form and tracks unsaved changes.
#[derive(Debug, Clone, Default)]
pub struct AnswerCollector {
    answers: AnswerSet,
    dirty: bool,
}

impl AnswerCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites one answer. Unknown ids are accepted as-is.
    pub fn set(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.answers.set(question_id, value);
        self.dirty = true;
    }

    /// Resets to an empty answer set.
    pub fn clear(&mut self) {
        self.answers.clear();
        self.dirty = true;
    }

    /// Replaces every answer with `snapshot`, e.g. when switching profiles.
    /// The loaded state counts as saved.
    pub fn load(&mut self, snapshot: AnswerSet) {
        self.answers = snapshot;
        self.dirty = false;
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Copy of the current answers, for saving or generating.
    pub fn snapshot(&self) -> AnswerSet {
        self.answers.clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
