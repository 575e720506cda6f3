//! Everything the renderer needs for one frame of the seek bar

use crate::format::format_timestamp;
use crate::interaction::InteractionState;
use crate::markers::{compute_markers, Marker};
use crate::position::{has_duration, progress_percentage, time_at, TrackGeometry};
use crate::question::{AnsweredSet, Question};
use crate::tooltip::{tooltip, Tooltip};

/// Inputs supplied by the owner of the seek bar
#[derive(Debug, Clone, Copy)]
pub struct ProgressProps<'a> {
    pub current_time: f64,
    pub duration: f64,
    pub questions: &'a [Question],
    pub answered: &'a AnsweredSet,
    pub format_timestamp: fn(f64) -> String,
    pub loading_label: &'a str,
    /// Track the pointer was measured against; lets the hover time follow a
    /// duration that arrived after the pointer stopped
    pub track: Option<TrackGeometry>,
}

impl<'a> ProgressProps<'a> {
    pub fn new(
        current_time: f64,
        duration: f64,
        questions: &'a [Question],
        answered: &'a AnsweredSet,
    ) -> Self {
        Self {
            current_time,
            duration,
            questions,
            answered,
            format_timestamp,
            loading_label: "Loading...",
            track: None,
        }
    }

    pub fn with_track(mut self, track: TrackGeometry) -> Self {
        self.track = Some(track);
        self
    }

    /// Hover time to show, re-read from the pointer x when the track is known
    fn hover_time(&self, state: &InteractionState) -> Option<f64> {
        let stored = state.hover_time?;
        Some(
            self.track
                .and_then(|track| time_at(state.hover_pixel_x, track, self.duration))
                .unwrap_or(stored),
        )
    }
}

/// Derived values, recomputed from props and interaction state
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    /// Played share of the track in `[0, 100]`
    pub progress_percent: f64,
    /// Duration is not known yet
    pub loading: bool,
    pub markers: Vec<Marker>,
    pub tooltip: Option<Tooltip>,
}

impl ProgressView {
    pub fn derive(props: &ProgressProps<'_>, state: &InteractionState) -> Self {
        Self {
            progress_percent: progress_percentage(props.current_time, props.duration),
            loading: !has_duration(props.duration),
            markers: compute_markers(
                props.questions,
                props.answered,
                props.current_time,
                props.duration,
            ),
            tooltip: tooltip(
                props.hover_time(state),
                state.hover_pixel_x,
                props.current_time,
                props.duration,
                props.questions,
                props.format_timestamp,
                props.loading_label,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::PointerEvent;
    use crate::markers::MarkerState;

    #[test]
    fn test_derive_without_hover() {
        let questions = vec![Question::new(30.0, "a")];
        let answered = AnsweredSet::new();
        let props = ProgressProps::new(15.0, 60.0, &questions, &answered);

        let view = ProgressView::derive(&props, &InteractionState::new());

        assert_eq!(view.progress_percent, 25.0);
        assert!(!view.loading);
        assert_eq!(view.markers[0].state, MarkerState::Pending);
        assert!(view.tooltip.is_none());
    }

    #[test]
    fn test_derive_uses_custom_formatter() {
        fn seconds(t: f64) -> String {
            format!("{:.0}s", t)
        }

        let answered = AnsweredSet::new();
        let props = ProgressProps {
            format_timestamp: seconds,
            ..ProgressProps::new(0.0, 60.0, &[], &answered)
        };
        let state = InteractionState {
            hover_time: Some(42.0),
            ..Default::default()
        };

        let view = ProgressView::derive(&props, &state);
        assert_eq!(view.tooltip.unwrap().label, "42s");
    }

    #[test]
    fn test_hover_time_follows_late_duration() {
        let track = TrackGeometry::new(0.0, 400.0);
        let mut state = InteractionState::new();
        state.handle(PointerEvent::Moved { x: 300.0 }, track, 0.0);
        assert_eq!(state.hover_time, Some(0.0));

        let answered = AnsweredSet::new();
        let props = ProgressProps::new(0.0, 120.0, &[], &answered).with_track(track);
        let view = ProgressView::derive(&props, &state);
        assert_eq!(view.tooltip.unwrap().label, "01:30");

        // Without a track the stored time is used as is
        let props = ProgressProps::new(0.0, 120.0, &[], &answered);
        let view = ProgressView::derive(&props, &state);
        assert_eq!(view.tooltip.unwrap().label, "00:00");
    }

    #[test]
    fn test_no_tooltip_after_leaving_even_with_track() {
        let track = TrackGeometry::new(0.0, 400.0);
        let state = InteractionState {
            hover_pixel_x: 200.0,
            ..Default::default()
        };
        let answered = AnsweredSet::new();
        let props = ProgressProps::new(0.0, 120.0, &[], &answered).with_track(track);

        assert!(ProgressView::derive(&props, &state).tooltip.is_none());
    }

    #[test]
    fn test_derive_loading() {
        let answered = AnsweredSet::new();
        let props = ProgressProps::new(0.0, 0.0, &[], &answered);

        let view = ProgressView::derive(&props, &InteractionState::new());
        assert!(view.loading);
        assert_eq!(view.progress_percent, 0.0);
    }
}
