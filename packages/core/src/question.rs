//! Timed questions placed on the seek bar

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

/// Identifiers of questions the viewer has already answered
pub type AnsweredSet = HashSet<String>;

/// A question that pops up at a point in the video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Seconds from the start of the media
    pub timestamp: f64,
    /// Stable identifier, used to look the question up in the answered set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Text shown when playback reaches the question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Question {
    /// Create a question with an explicit identifier
    pub fn new(timestamp: f64, id: impl Into<String>) -> Self {
        Self {
            timestamp,
            id: Some(id.into()),
            prompt: None,
        }
    }

    /// Create a question without an identifier
    pub fn anonymous(timestamp: f64) -> Self {
        Self {
            timestamp,
            id: None,
            prompt: None,
        }
    }

    /// Attach a prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Identifier of this question at `index` in its sequence.
    ///
    /// Questions without an id fall back to `question-<index>`, which ties
    /// their identity to the order of the sequence.
    pub fn key(&self, index: usize) -> Cow<'_, str> {
        match &self.id {
            Some(id) => Cow::Borrowed(id.as_str()),
            None => Cow::Owned(fallback_id(index)),
        }
    }

    /// Whether this question is in the answered set
    pub fn is_answered(&self, index: usize, answered: &AnsweredSet) -> bool {
        answered.contains(self.key(index).as_ref())
    }
}

/// Positional identifier for a question without an explicit id
pub fn fallback_id(index: usize) -> String {
    format!("question-{}", index)
}
