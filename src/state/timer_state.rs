//! Timer state structure and management

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::format::{format_elapsed, DecimalSeparator, ELAPSED_PLACEHOLDER};

/// Phase of the stopwatch, derived from the timer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Stopped,
    Running,
    Paused,
}

/// Label of the single contextual action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonLabel {
    Start,
    Pause,
    Resume,
}

impl ButtonLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonLabel::Start => "Start",
            ButtonLabel::Pause => "Pause",
            ButtonLabel::Resume => "Resume",
        }
    }
}

/// Transition performed by a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Start,
    Pause,
    Resume,
    Stop,
}

/// Timer state for tracking elapsed time across start, pause, resume and stop
#[derive(Debug, Clone, Default)]
pub struct TimerState {
    /// Start of the current running segment; `None` when fully stopped
    pub start_instant: Option<Instant>,
    /// Moment the timer was paused; only set while paused
    pub pause_instant: Option<Instant>,
    /// Sum of running segments completed before the current one
    pub accumulated: Duration,
    pub is_paused: bool,
}

impl TimerState {
    /// Create a new stopped timer state
    pub fn new() -> Self {
        Self {
            start_instant: None,
            pause_instant: None,
            accumulated: Duration::ZERO,
            is_paused: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.start_instant, self.is_paused) {
            (None, _) => Phase::Stopped,
            (Some(_), true) => Phase::Paused,
            (Some(_), false) => Phase::Running,
        }
    }

    /// Label shown on the action button for the current phase
    pub fn button_label(&self) -> ButtonLabel {
        match self.phase() {
            Phase::Stopped => ButtonLabel::Start,
            Phase::Paused => ButtonLabel::Resume,
            Phase::Running => ButtonLabel::Pause,
        }
    }

    /// Begin timing. Ignored unless the timer is stopped.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.start_instant.is_some() {
            return false;
        }
        self.start_instant = Some(now);
        self.is_paused = false;
        true
    }

    /// Freeze the elapsed time. Ignored unless the timer is running.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.phase() != Phase::Running {
            return false;
        }
        self.pause_instant = Some(now);
        self.is_paused = true;
        true
    }

    /// Continue timing after a pause. Ignored unless the timer is paused.
    ///
    /// The finished segment is folded into `accumulated` and a new segment
    /// starts at `now`, so the paused interval never counts.
    pub fn resume(&mut self, now: Instant) -> bool {
        let (Some(start), Some(paused_at)) = (self.start_instant, self.pause_instant) else {
            return false;
        };
        if !self.is_paused {
            return false;
        }
        self.accumulated += paused_at.saturating_duration_since(start);
        self.start_instant = Some(now);
        self.pause_instant = None;
        self.is_paused = false;
        true
    }

    /// Reset every field. Valid from any phase.
    pub fn stop(&mut self) -> bool {
        let changed = self.phase() != Phase::Stopped;
        *self = Self::new();
        changed
    }

    /// Perform whatever the action button currently offers
    pub fn press_action(&mut self, now: Instant) -> Option<Transition> {
        let transition = match self.button_label() {
            ButtonLabel::Start => Transition::Start,
            ButtonLabel::Pause => Transition::Pause,
            ButtonLabel::Resume => Transition::Resume,
        };
        self.apply(transition, now).then_some(transition)
    }

    /// Pause when running, resume when paused; nothing when stopped
    pub fn pause_or_resume(&mut self, now: Instant) -> Option<Transition> {
        match self.phase() {
            Phase::Stopped => None,
            Phase::Running | Phase::Paused => self.press_action(now),
        }
    }

    /// Apply a transition, returning whether the state changed
    pub fn apply(&mut self, transition: Transition, now: Instant) -> bool {
        match transition {
            Transition::Start => self.start(now),
            Transition::Pause => self.pause(now),
            Transition::Resume => self.resume(now),
            Transition::Stop => self.stop(),
        }
    }

    /// Total running time since the last stop, excluding paused intervals
    pub fn elapsed(&self, now: Instant) -> Duration {
        let Some(start) = self.start_instant else {
            return Duration::ZERO;
        };

        let segment = match (self.is_paused, self.pause_instant) {
            (true, Some(paused_at)) => paused_at.saturating_duration_since(start),
            _ => now.saturating_duration_since(start),
        };

        segment + self.accumulated
    }

    pub fn elapsed_seconds(&self, now: Instant) -> f64 {
        self.elapsed(now).as_secs_f64()
    }

    /// Capture a serializable view of the timer at `now`
    pub fn snapshot(&self, now: Instant, separator: DecimalSeparator) -> TimerSnapshot {
        let elapsed_seconds = self.elapsed_seconds(now);
        TimerSnapshot {
            phase: self.phase(),
            label: self.button_label().as_str().to_string(),
            elapsed_seconds,
            elapsed: format_elapsed(elapsed_seconds, separator)
                .unwrap_or_else(|_| ELAPSED_PLACEHOLDER.to_string()),
        }
    }
}

/// Point-in-time view of the timer for clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub label: String,
    pub elapsed_seconds: f64,
    pub elapsed: String,
}
