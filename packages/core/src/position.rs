//! Mapping between pointer coordinates, playback time and track percentages

/// Lowest percentage a marker is drawn at, keeps it inside the rounded track end
pub const MARKER_MIN_PERCENT: f64 = 0.5;

/// Highest percentage a marker is drawn at
pub const MARKER_MAX_PERCENT: f64 = 99.5;

/// Horizontal extent of the track, in the same space as pointer x positions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    /// Left edge of the track
    pub left: f32,
    /// Width of the track
    pub width: f32,
}

impl TrackGeometry {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Fraction of the track covered up to `x`, not clamped
    fn fraction_at(&self, x: f32) -> f64 {
        if self.width <= 0.0 {
            return 0.0;
        }
        f64::from(x - self.left) / f64::from(self.width)
    }

    /// Pixel x for a percentage of the track
    pub fn x_at_percent(&self, percent: f64) -> f32 {
        self.left + (percent / 100.0) as f32 * self.width.max(0.0)
    }
}

/// Whether the duration is known yet
pub fn has_duration(duration: f64) -> bool {
    duration > 0.0
}

/// Time under the pointer, clamped to `[0, duration]`.
///
/// Returns `None` while the duration is unavailable.
pub fn time_at(x: f32, track: TrackGeometry, duration: f64) -> Option<f64> {
    if !has_duration(duration) {
        return None;
    }
    let raw = track.fraction_at(x) * duration;
    Some(raw.clamp(0.0, duration))
}

/// Share of the media already played, in `[0, 100]`
pub fn progress_percentage(current_time: f64, duration: f64) -> f64 {
    if !has_duration(duration) {
        return 0.0;
    }
    (current_time / duration * 100.0).clamp(0.0, 100.0)
}

/// Where a marker for `timestamp` sits on the track
pub fn marker_percentage(timestamp: f64, duration: f64) -> f64 {
    if !has_duration(duration) {
        return MARKER_MIN_PERCENT;
    }
    (timestamp / duration * 100.0).clamp(MARKER_MIN_PERCENT, MARKER_MAX_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> TrackGeometry {
        TrackGeometry::new(0.0, 200.0)
    }

    #[test]
    fn test_time_at_maps_linearly() {
        assert_eq!(time_at(50.0, track(), 120.0), Some(30.0));
        assert_eq!(time_at(200.0, track(), 120.0), Some(120.0));
    }

    #[test]
    fn test_time_at_respects_track_offset() {
        let track = TrackGeometry::new(20.0, 100.0);
        assert_eq!(time_at(70.0, track, 60.0), Some(30.0));
    }

    #[test]
    fn test_time_at_clamps_outside_track() {
        assert_eq!(time_at(-40.0, track(), 120.0), Some(0.0));
        assert_eq!(time_at(500.0, track(), 120.0), Some(120.0));
    }

    #[test]
    fn test_time_at_without_duration() {
        assert_eq!(time_at(50.0, track(), 0.0), None);
        assert_eq!(time_at(50.0, track(), -1.0), None);
    }

    #[test]
    fn test_time_at_zero_width_track() {
        let track = TrackGeometry::new(10.0, 0.0);
        assert_eq!(time_at(60.0, track, 120.0), Some(0.0));
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage(30.0, 120.0), 25.0);
        assert_eq!(progress_percentage(0.0, 120.0), 0.0);
        assert_eq!(progress_percentage(120.0, 120.0), 100.0);
        assert_eq!(progress_percentage(30.0, 0.0), 0.0);
    }

    #[test]
    fn test_marker_percentage_clamps_to_visible_range() {
        assert_eq!(marker_percentage(60.0, 120.0), 50.0);
        assert_eq!(marker_percentage(0.0, 120.0), MARKER_MIN_PERCENT);
        assert_eq!(marker_percentage(-10.0, 120.0), MARKER_MIN_PERCENT);
        assert_eq!(marker_percentage(120.0, 120.0), MARKER_MAX_PERCENT);
        assert_eq!(marker_percentage(500.0, 120.0), MARKER_MAX_PERCENT);
    }

    #[test]
    fn test_x_at_percent() {
        let track = TrackGeometry::new(10.0, 200.0);
        assert_eq!(track.x_at_percent(0.0), 10.0);
        assert_eq!(track.x_at_percent(50.0), 110.0);
        assert_eq!(track.x_at_percent(100.0), 210.0);
    }
}
