//! Pointer and touch interaction with the seek bar
//!
//! The widget keeps one [`InteractionState`] for as long as it is mounted and
//! feeds it [`PointerEvent`]s. Each event may produce a seek target; the
//! caller turns that into its own seek message.

use crate::position::{time_at, TrackGeometry};
use tracing::{debug, warn};

/// Input events the seek bar reacts to, with x in track coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Mouse button went down over the track; seeks at once, so a plain
    /// click is a press followed by a release
    Pressed { x: f32 },
    /// Pointer moved over the track
    Moved { x: f32 },
    /// Mouse button went up
    Released,
    /// Pointer left the track
    Left,
    /// A finger touched the track
    TouchStarted { x: f32 },
    /// A finger moved across the track
    TouchMoved { x: f32 },
    /// The finger was lifted
    TouchEnded,
    /// The touch was interrupted by the system
    TouchCancelled,
}

/// What the user is currently doing with the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Pointer is elsewhere
    #[default]
    Idle,
    /// Pointer is over the track, nothing pressed
    Hovering,
    /// Pointer is held down and scrubbing
    Dragging,
}

/// Ephemeral drag/hover state owned by one seek bar instance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    /// Whether a press is in progress
    pub is_dragging: bool,
    /// Time under the pointer, `None` when the pointer is off the track
    pub hover_time: Option<f64>,
    /// Last pointer x over the track
    pub hover_pixel_x: f32,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase derived from the flags
    pub fn phase(&self) -> Phase {
        if self.is_dragging {
            Phase::Dragging
        } else if self.hover_time.is_some() {
            Phase::Hovering
        } else {
            Phase::Idle
        }
    }

    /// Apply an event and return the time to seek to, if any
    pub fn handle(
        &mut self,
        event: PointerEvent,
        track: TrackGeometry,
        duration: f64,
    ) -> Option<f64> {
        match event {
            PointerEvent::Pressed { x } | PointerEvent::TouchStarted { x } => {
                self.hover_at(x, track, duration);
                let time = seek_target(x, track, duration)?;
                debug!("Drag started at {:.2}s", time);
                self.is_dragging = true;
                Some(time)
            }
            PointerEvent::Moved { x } | PointerEvent::TouchMoved { x } => {
                self.hover_at(x, track, duration);
                if self.is_dragging {
                    seek_target(x, track, duration)
                } else {
                    None
                }
            }
            PointerEvent::Released => {
                self.is_dragging = false;
                None
            }
            PointerEvent::Left | PointerEvent::TouchEnded | PointerEvent::TouchCancelled => {
                self.is_dragging = false;
                self.hover_time = None;
                None
            }
        }
    }

    /// Update hover feedback; uses 0 while the duration is unknown
    fn hover_at(&mut self, x: f32, track: TrackGeometry, duration: f64) {
        self.hover_pixel_x = x;
        self.hover_time = Some(time_at(x, track, duration).unwrap_or(0.0));
    }
}

fn seek_target(x: f32, track: TrackGeometry, duration: f64) -> Option<f64> {
    let time = time_at(x, track, duration);
    if time.is_none() {
        warn!("Seek refused: duration not available (duration: {})", duration);
    }
    time
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: f64 = 100.0;

    fn track() -> TrackGeometry {
        TrackGeometry::new(0.0, 400.0)
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = InteractionState::new();
        assert!(!state.is_dragging);
        assert!(state.hover_time.is_none());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_press_starts_drag_and_seeks() {
        let mut state = InteractionState::new();
        let seek = state.handle(PointerEvent::Pressed { x: 100.0 }, track(), DURATION);

        assert_eq!(seek, Some(25.0));
        assert_eq!(state.phase(), Phase::Dragging);
        assert_eq!(state.hover_time, Some(25.0));
    }

    #[test]
    fn test_drag_move_seeks_continuously() {
        let mut state = InteractionState::new();
        state.handle(PointerEvent::Pressed { x: 100.0 }, track(), DURATION);

        let first = state.handle(PointerEvent::Moved { x: 200.0 }, track(), DURATION);
        let second = state.handle(PointerEvent::Moved { x: 600.0 }, track(), DURATION);

        assert_eq!(first, Some(50.0));
        assert_eq!(second, Some(DURATION));
    }

    #[test]
    fn test_hover_move_does_not_seek() {
        let mut state = InteractionState::new();
        let seek = state.handle(PointerEvent::Moved { x: 300.0 }, track(), DURATION);

        assert!(seek.is_none());
        assert_eq!(state.phase(), Phase::Hovering);
        assert_eq!(state.hover_time, Some(75.0));
        assert_eq!(state.hover_pixel_x, 300.0);
    }

    #[test]
    fn test_release_ends_drag_keeps_hover() {
        let mut state = InteractionState::new();
        state.handle(PointerEvent::Pressed { x: 100.0 }, track(), DURATION);
        let seek = state.handle(PointerEvent::Released, track(), DURATION);

        assert!(seek.is_none());
        assert_eq!(state.phase(), Phase::Hovering);
    }

    #[test]
    fn test_leave_while_dragging_resets_everything() {
        let mut state = InteractionState::new();
        state.handle(PointerEvent::Pressed { x: 100.0 }, track(), DURATION);
        state.handle(PointerEvent::Left, track(), DURATION);

        assert!(!state.is_dragging);
        assert!(state.hover_time.is_none());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_click_seeks_once_and_ends_drag() {
        let mut state = InteractionState::new();
        let pressed = state.handle(PointerEvent::Pressed { x: 40.0 }, track(), DURATION);
        let released = state.handle(PointerEvent::Released, track(), DURATION);

        assert_eq!(pressed, Some(10.0));
        assert!(released.is_none());
        assert!(!state.is_dragging);
    }

    #[test]
    fn test_touch_mirrors_mouse_and_releases() {
        let mut state = InteractionState::new();
        let start = state.handle(PointerEvent::TouchStarted { x: 200.0 }, track(), DURATION);
        let moved = state.handle(PointerEvent::TouchMoved { x: 300.0 }, track(), DURATION);

        assert_eq!(start, Some(50.0));
        assert_eq!(moved, Some(75.0));

        state.handle(PointerEvent::TouchEnded, track(), DURATION);
        assert_eq!(state.phase(), Phase::Idle);

        // A later move must not keep scrubbing
        let after = state.handle(PointerEvent::TouchMoved { x: 100.0 }, track(), DURATION);
        assert!(after.is_none());
    }

    #[test]
    fn test_touch_cancel_releases_drag() {
        let mut state = InteractionState::new();
        state.handle(PointerEvent::TouchStarted { x: 200.0 }, track(), DURATION);
        state.handle(PointerEvent::TouchCancelled, track(), DURATION);

        assert!(!state.is_dragging);
    }

    #[test]
    fn test_no_seek_without_duration() {
        let mut state = InteractionState::new();
        let events = [
            PointerEvent::Pressed { x: 100.0 },
            PointerEvent::Moved { x: 150.0 },
            PointerEvent::TouchStarted { x: 80.0 },
            PointerEvent::TouchMoved { x: 90.0 },
            PointerEvent::Released,
        ];

        for event in events {
            assert!(state.handle(event, track(), 0.0).is_none());
        }
        assert!(!state.is_dragging);
    }

    #[test]
    fn test_hover_without_duration_uses_placeholder() {
        let mut state = InteractionState::new();
        state.handle(PointerEvent::Moved { x: 250.0 }, track(), 0.0);

        assert_eq!(state.hover_time, Some(0.0));
        assert_eq!(state.hover_pixel_x, 250.0);
    }
}
