//! Seek bar with question markers
//!
//! Draws the playback track, the played share, one marker per question and a
//! hover tooltip. Clicking or dragging on the track produces seek messages;
//! hover and drag state live in the canvas tree state and disappear with the
//! widget.

use cuepoint_core::config::{Palette, ProgressBarConfig, Rgba};
use cuepoint_core::{
    format_timestamp, AnsweredSet, InteractionState, MarkerState, PointerEvent, ProgressProps,
    ProgressView, Question, Tooltip, TrackGeometry,
};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Program, Text};
use iced::{mouse, touch, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

/// Vertical space reserved above the track for the tooltip
const TOOLTIP_AREA: f32 = 40.0;

/// Seek bar widget
pub struct ProgressBar<'a, Message> {
    current_time: f64,
    duration: f64,
    on_seek: Box<dyn Fn(f64) -> Message + 'a>,
    questions: Arc<[Question]>,
    answered: Arc<AnsweredSet>,
    format_timestamp: fn(f64) -> String,
    palette: Option<Palette>,
    config: ProgressBarConfig,
}

impl<'a, Message> ProgressBar<'a, Message> {
    /// Create a seek bar for the given playback position
    pub fn new(current_time: f64, duration: f64, on_seek: impl Fn(f64) -> Message + 'a) -> Self {
        Self {
            current_time,
            duration,
            on_seek: Box::new(on_seek),
            questions: no_questions(),
            answered: nothing_answered(),
            format_timestamp,
            palette: None,
            config: ProgressBarConfig::default(),
        }
    }

    /// Questions to mark on the track
    pub fn questions(mut self, questions: Arc<[Question]>) -> Self {
        self.questions = questions;
        self
    }

    /// Identifiers of answered questions
    pub fn answered(mut self, answered: Arc<AnsweredSet>) -> Self {
        self.answered = answered;
        self
    }

    /// Formatter for the tooltip time
    pub fn format_timestamp(mut self, format: fn(f64) -> String) -> Self {
        self.format_timestamp = format;
        self
    }

    /// Override the configured colors
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Geometry and labels
    pub fn config(mut self, config: &ProgressBarConfig) -> Self {
        self.config = config.clone();
        self
    }

    fn active_palette(&self) -> Palette {
        self.palette.unwrap_or(self.config.palette)
    }

    fn props(&self) -> ProgressProps<'_> {
        ProgressProps {
            current_time: self.current_time,
            duration: self.duration,
            questions: &self.questions,
            answered: &self.answered,
            format_timestamp: self.format_timestamp,
            loading_label: &self.config.loading_label,
            track: None,
        }
    }

    fn render_key(&self) -> RenderKey {
        RenderKey {
            current_time: self.current_time,
            duration: self.duration,
            questions: Arc::as_ptr(&self.questions) as *const Question as usize,
            answered: Arc::as_ptr(&self.answered) as usize,
            palette: self.active_palette(),
        }
    }

    /// Track extent inside the widget bounds
    fn track(&self, bounds: Rectangle) -> TrackGeometry {
        let padding = self.config.track_padding;
        TrackGeometry::new(padding, (bounds.width - 2.0 * padding).max(0.0))
    }

    fn track_center_y(&self, bounds: Rectangle) -> f32 {
        TOOLTIP_AREA + (bounds.height - TOOLTIP_AREA) / 2.0
    }

    /// Band around the track that reacts to the pointer, in window coordinates.
    /// Spans the full width so x stays relative to the widget.
    fn hit_zone(&self, bounds: Rectangle) -> Rectangle {
        let half = self
            .config
            .track_height
            .max(self.config.marker_radius * 2.0);
        Rectangle {
            x: bounds.x,
            y: bounds.y + self.track_center_y(bounds) - half,
            width: bounds.width,
            height: half * 2.0,
        }
    }
}

// Shared so bars built without questions keep a stable render key
fn no_questions() -> Arc<[Question]> {
    static EMPTY: OnceLock<Arc<[Question]>> = OnceLock::new();
    EMPTY.get_or_init(|| Arc::from(Vec::new())).clone()
}

fn nothing_answered() -> Arc<AnsweredSet> {
    static EMPTY: OnceLock<Arc<AnsweredSet>> = OnceLock::new();
    EMPTY.get_or_init(|| Arc::new(AnsweredSet::new())).clone()
}

impl<'a, Message: 'a> From<ProgressBar<'a, Message>> for Element<'a, Message> {
    fn from(progress_bar: ProgressBar<'a, Message>) -> Self {
        let height = progress_bar.config.height;
        Canvas::new(progress_bar)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into()
    }
}

/// Props that affect the static layer. Containers compare by pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RenderKey {
    current_time: f64,
    duration: f64,
    questions: usize,
    answered: usize,
    palette: Palette,
}

/// Per-instance widget state
#[derive(Default)]
pub struct ProgressBarState {
    interaction: InteractionState,
    static_layer: Cache,
    rendered: RefCell<Option<(RenderKey, Size)>>,
}

impl ProgressBarState {
    /// Current hover/drag state
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Clear the cached track if props or size changed since the last draw.
    /// Returns whether the cache was cleared.
    fn invalidate_if_stale(&self, key: RenderKey, size: Size) -> bool {
        let mut rendered = self.rendered.borrow_mut();
        if *rendered == Some((key, size)) {
            return false;
        }
        self.static_layer.clear();
        *rendered = Some((key, size));
        true
    }
}

/// Translate a canvas event into a seek bar event, with x relative to the
/// left edge of `hit_zone`. Events outside the zone count as off the track.
pub fn pointer_event(
    event: &canvas::Event,
    hit_zone: Rectangle,
    cursor: mouse::Cursor,
    interaction: &InteractionState,
) -> Option<PointerEvent> {
    let engaged = interaction.is_dragging || interaction.hover_time.is_some();

    match event {
        canvas::Event::Mouse(mouse_event) => match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => cursor
                .position_in(hit_zone)
                .map(|position| PointerEvent::Pressed { x: position.x }),
            mouse::Event::ButtonReleased(mouse::Button::Left) if interaction.is_dragging => {
                Some(PointerEvent::Released)
            }
            mouse::Event::CursorMoved { .. } => match cursor.position_in(hit_zone) {
                Some(position) => Some(PointerEvent::Moved { x: position.x }),
                None if engaged => Some(PointerEvent::Left),
                None => None,
            },
            mouse::Event::CursorLeft if engaged => Some(PointerEvent::Left),
            _ => None,
        },
        canvas::Event::Touch(touch_event) => match touch_event {
            touch::Event::FingerPressed { position, .. } => {
                if hit_zone.contains(*position) {
                    Some(PointerEvent::TouchStarted {
                        x: position.x - hit_zone.x,
                    })
                } else {
                    None
                }
            }
            touch::Event::FingerMoved { position, .. } if interaction.is_dragging => {
                Some(PointerEvent::TouchMoved {
                    x: position.x - hit_zone.x,
                })
            }
            touch::Event::FingerLifted { .. } if engaged => Some(PointerEvent::TouchEnded),
            touch::Event::FingerLost { .. } if engaged => Some(PointerEvent::TouchCancelled),
            _ => None,
        },
        _ => None,
    }
}

impl<'a, Message> Program<Message> for ProgressBar<'a, Message> {
    type State = ProgressBarState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let track = self.track(bounds);
        let view = ProgressView::derive(&self.props().with_track(track), &state.interaction);
        let palette = self.active_palette();
        let center_y = self.track_center_y(bounds);

        state.invalidate_if_stale(self.render_key(), bounds.size());
        let static_layer = state.static_layer.draw(renderer, bounds.size(), |frame| {
            self.draw_track(frame, &view, &palette, track, center_y);
            self.draw_markers(frame, &view, &palette, track, center_y);
        });

        let mut overlay = Frame::new(renderer, bounds.size());
        if let Some(tooltip) = &view.tooltip {
            self.draw_tooltip(&mut overlay, tooltip, &palette, bounds, track, center_y);
        }

        vec![static_layer, overlay.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let hit_zone = self.hit_zone(bounds);
        let Some(pointer) = pointer_event(&event, hit_zone, cursor, &state.interaction) else {
            return (canvas::event::Status::Ignored, None);
        };

        let track = self.track(bounds);
        let seek = state.interaction.handle(pointer, track, self.duration);

        (
            canvas::event::Status::Captured,
            seek.map(|time| (self.on_seek)(time)),
        )
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.interaction.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(self.hit_zone(bounds)) && self.duration > 0.0 {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> ProgressBar<'a, Message> {
    fn draw_track(
        &self,
        frame: &mut Frame,
        view: &ProgressView,
        palette: &Palette,
        track: TrackGeometry,
        center_y: f32,
    ) {
        let height = self.config.track_height;
        let top = center_y - height / 2.0;

        if view.loading {
            frame.fill_rectangle(
                Point::new(track.left, top),
                Size::new(track.width, height),
                color(palette.loading),
            );
            return;
        }

        frame.fill_rectangle(
            Point::new(track.left, top),
            Size::new(track.width, height),
            color(palette.track),
        );

        let played = track.x_at_percent(view.progress_percent) - track.left;
        frame.fill_rectangle(
            Point::new(track.left, top),
            Size::new(played, height),
            color(palette.progress),
        );

        // Playhead
        let playhead = Path::circle(
            Point::new(track.left + played, center_y),
            height * 0.9,
        );
        frame.fill(&playhead, color(palette.progress));
    }

    fn draw_markers(
        &self,
        frame: &mut Frame,
        view: &ProgressView,
        palette: &Palette,
        track: TrackGeometry,
        center_y: f32,
    ) {
        // Positions are meaningless until the duration is known
        if view.loading {
            return;
        }

        for marker in &view.markers {
            let fill = match marker.state {
                MarkerState::Answered => palette.answered,
                MarkerState::Skipped => palette.skipped,
                MarkerState::Pending => palette.pending,
            };
            let center = Point::new(track.x_at_percent(marker.percent), center_y);

            frame.fill(
                &Path::circle(center, self.config.marker_radius + 1.5),
                Color::WHITE,
            );
            frame.fill(
                &Path::circle(center, self.config.marker_radius),
                color(fill),
            );
        }
    }

    fn draw_tooltip(
        &self,
        frame: &mut Frame,
        tooltip: &Tooltip,
        palette: &Palette,
        bounds: Rectangle,
        track: TrackGeometry,
        center_y: f32,
    ) {
        let detail = tooltip.ahead_line();
        let width = if detail.is_some() { 128.0 } else { 64.0 };
        let height = if detail.is_some() { 34.0 } else { 20.0 };

        // Keep the box inside the widget
        let anchor = tooltip
            .anchor_x
            .clamp(track.left, track.left + track.width);
        let left = (anchor - width / 2.0).clamp(0.0, (bounds.width - width).max(0.0));
        let top = (center_y - self.config.track_height / 2.0 - height - 6.0).max(0.0);

        frame.fill_rectangle(
            Point::new(left, top),
            Size::new(width, height),
            color(palette.tooltip_background),
        );

        frame.fill_text(Text {
            content: tooltip.label.clone(),
            position: Point::new(left + width / 2.0, top + 3.0),
            color: color(palette.tooltip_text),
            size: iced::Pixels(12.0),
            horizontal_alignment: iced::alignment::Horizontal::Center,
            ..Text::default()
        });

        if let Some(detail) = detail {
            frame.fill_text(Text {
                content: detail,
                position: Point::new(left + width / 2.0, top + 18.0),
                color: color(palette.tooltip_detail),
                size: iced::Pixels(11.0),
                horizontal_alignment: iced::alignment::Horizontal::Center,
                ..Text::default()
            });
        }

        // Hover guide on the track
        frame.fill_rectangle(
            Point::new(anchor - 0.5, center_y - self.config.track_height),
            Size::new(1.0, self.config.track_height * 2.0),
            color(palette.tooltip_text),
        );
    }
}

/// Convert a config color to an iced color
pub fn color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}
