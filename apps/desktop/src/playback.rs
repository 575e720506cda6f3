//! Simulated playback clock standing in for a real video player

use cuepoint_core::{AnsweredSet, Question};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info};

/// Playback position advanced by wall-clock ticks
#[derive(Debug, Clone, Default)]
pub struct PlaybackClock {
    position: f64,
    duration: f64,
    playing: bool,
    last_tick: Option<Instant>,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Set the media length once it is known
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration.max(0.0);
        self.position = self.position.min(self.duration);
    }

    /// Start playing. Has no effect until the duration is known or at the end.
    pub fn play(&mut self) {
        if self.duration <= 0.0 || self.position >= self.duration {
            return;
        }
        self.playing = true;
        // The next tick only records its time
        self.last_tick = None;
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.last_tick = None;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to `time`, clamped to the media
    pub fn seek(&mut self, time: f64) -> f64 {
        self.position = time.clamp(0.0, self.duration.max(0.0));
        debug!("Seeked to {:.2}s", self.position);
        self.position
    }

    /// Advance to `now`; returns the `(from, to)` range played since the last tick
    pub fn advance(&mut self, now: Instant) -> Option<(f64, f64)> {
        if !self.playing {
            return None;
        }

        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        let from = self.position;
        self.position = (self.position + elapsed).min(self.duration);

        if self.position >= self.duration {
            info!("Playback reached the end");
            self.pause();
        }

        Some((from, self.position))
    }
}

/// First question played through in `(from, to]` that still needs a prompt
pub fn crossed_question(
    questions: &[Question],
    answered: &AnsweredSet,
    prompted: &HashSet<String>,
    from: f64,
    to: f64,
) -> Option<usize> {
    questions
        .iter()
        .enumerate()
        .filter(|(_, q)| q.timestamp > from && q.timestamp <= to)
        .filter(|(index, q)| {
            let key = q.key(*index);
            !answered.contains(key.as_ref()) && !prompted.contains(key.as_ref())
        })
        .min_by(|(_, a), (_, b)| a.timestamp.total_cmp(&b.timestamp))
        .map(|(index, _)| index)
}
