//! Question sessions stored as JSON
//!
//! A session describes one video: its title, its length and the questions
//! attached to it. Questions without an id get a positional id pinned when
//! the session is loaded, so later filtering or sorting keeps each
//! question's answered state.

use crate::question::{fallback_id, Question};
use crate::{CueError, CueResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// A video and its questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub title: String,
    /// Length in seconds; 0 when not known up front
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Session {
    /// Parse a session from JSON text
    pub fn from_json(contents: &str) -> CueResult<Self> {
        let mut session: Session = serde_json::from_str(contents)?;
        session.pin_ids();
        session.check_unique_ids()?;
        Ok(session)
    }

    /// Read a session file
    pub fn load_from_file(path: &Path) -> CueResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let session = Self::from_json(&contents)?;
        info!(
            "Loaded session '{}' with {} questions from {:?}",
            session.title,
            session.questions.len(),
            path
        );
        Ok(session)
    }

    /// Read a session file without blocking the UI thread
    pub async fn load_from_file_async(path: &Path) -> CueResult<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_json(&contents)
    }

    /// Write the session as pretty JSON
    pub fn save_to_file(&self, path: &Path) -> CueResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Give every anonymous question its positional id
    fn pin_ids(&mut self) {
        for (index, question) in self.questions.iter_mut().enumerate() {
            if question.id.is_none() {
                let id = fallback_id(index);
                debug!("Question at {:.1}s has no id, pinned as {}", question.timestamp, id);
                question.id = Some(id);
            }
        }
    }

    fn check_unique_ids(&self) -> CueResult<()> {
        let mut seen = HashSet::new();
        for id in self.questions.iter().filter_map(|q| q.id.as_deref()) {
            if !seen.insert(id) {
                return Err(CueError::InvalidSession(format!(
                    "duplicate question id '{}'",
                    id
                )));
            }
        }
        Ok(())
    }

    /// Built-in session used when no file is given
    pub fn sample() -> Self {
        Self {
            title: "Intro to Ownership".to_string(),
            duration: 180.0,
            questions: vec![
                Question::new(20.0, "borrow-basics")
                    .with_prompt("Can a value have two mutable borrows at once?"),
                Question::new(75.0, "move-semantics")
                    .with_prompt("What happens to a String after it is moved?"),
                Question::new(130.0, "lifetimes")
                    .with_prompt("Why does the compiler need lifetime annotations here?"),
                Question::new(165.0, "recap").with_prompt("Which rule surprised you the most?"),
            ],
        }
    }
}
