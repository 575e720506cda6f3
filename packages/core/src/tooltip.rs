//! Hover tooltip content

use crate::position::has_duration;
use crate::question::Question;

/// What the tooltip shows for the current hover position
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Formatted hover time, or the loading placeholder
    pub label: String,
    /// Questions between the playhead and the hover time
    pub questions_ahead: usize,
    /// Pointer x the tooltip is anchored to
    pub anchor_x: f32,
}

impl Tooltip {
    /// Secondary line, only present when questions lie ahead
    pub fn ahead_line(&self) -> Option<String> {
        match self.questions_ahead {
            0 => None,
            1 => Some("1 question ahead".to_string()),
            n => Some(format!("{} questions ahead", n)),
        }
    }
}

/// Count questions in `(from, to]`. Empty when `to <= from`.
pub fn questions_ahead(questions: &[Question], from: f64, to: f64) -> usize {
    questions
        .iter()
        .filter(|q| q.timestamp > from && q.timestamp <= to)
        .count()
}

/// Build the tooltip for a hover position, if any
pub fn tooltip(
    hover_time: Option<f64>,
    anchor_x: f32,
    current_time: f64,
    duration: f64,
    questions: &[Question],
    format_timestamp: fn(f64) -> String,
    loading_label: &str,
) -> Option<Tooltip> {
    let hover_time = hover_time?;
    let label = if has_duration(duration) {
        format_timestamp(hover_time)
    } else {
        loading_label.to_string()
    };

    Some(Tooltip {
        label,
        questions_ahead: questions_ahead(questions, current_time, hover_time),
        anchor_x,
    })
}
