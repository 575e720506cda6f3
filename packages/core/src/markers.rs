//! Question markers on the track

use crate::position::marker_percentage;
use crate::question::{AnsweredSet, Question};

/// Visual classification of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    /// The question has been answered
    Answered,
    /// Playback went past the question without an answer
    Skipped,
    /// The question is still ahead
    Pending,
}

/// A marker ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Identifier the marker was classified under
    pub id: String,
    /// Question time in seconds
    pub timestamp: f64,
    /// Position along the track in `[0.5, 99.5]`
    pub percent: f64,
    pub state: MarkerState,
}

/// Classify a question. Answered wins over the timestamp comparison.
pub fn classify(timestamp: f64, current_time: f64, answered: bool) -> MarkerState {
    if answered {
        MarkerState::Answered
    } else if timestamp < current_time {
        MarkerState::Skipped
    } else {
        MarkerState::Pending
    }
}

/// Markers for every question, in input order
pub fn compute_markers(
    questions: &[Question],
    answered: &AnsweredSet,
    current_time: f64,
    duration: f64,
) -> Vec<Marker> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let id = question.key(index).into_owned();
            let state = classify(
                question.timestamp,
                current_time,
                answered.contains(id.as_str()),
            );
            Marker {
                id,
                timestamp: question.timestamp,
                percent: marker_percentage(question.timestamp, duration),
                state,
            }
        })
        .collect()
}
