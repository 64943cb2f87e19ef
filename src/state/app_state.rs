//! Main application state management

use std::{
    fmt::Display,
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{DisplayState, Phase, RefreshMode, RefreshRates, TimerSnapshot, TimerState, Transition};
use crate::format::{format_clock, format_elapsed, ClockStyle, DecimalSeparator, ELAPSED_PLACEHOLDER};

/// Current monotonic instant on tokio's clock
pub fn monotonic_now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// How the two clocks are rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplaySettings {
    pub separator: DecimalSeparator,
    pub clock_style: ClockStyle,
    pub rates: RefreshRates,
}

/// One rendered screen: the wall clock, the elapsed counter and the button
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub clock: String,
    pub elapsed: String,
    pub elapsed_seconds: f64,
    pub label: String,
    pub phase: Phase,
    pub mode: RefreshMode,
    pub tick: u64,
}

/// Result of a user action on the timer
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    /// Transition that took effect, `None` if the action was ignored
    pub transition: Option<Transition>,
    pub timer: TimerSnapshot,
}

/// Main application state that owns the stopwatch and its display
#[derive(Debug)]
pub struct AppState {
    /// The single stopwatch instance
    pub timer_state: Arc<Mutex<TimerState>>,
    /// Visibility and frame counter
    pub display_state: Arc<Mutex<DisplayState>>,
    pub settings: DisplaySettings,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for refresh mode changes
    pub mode_tx: watch::Sender<RefreshMode>,
    /// Channel carrying the most recently rendered frame
    pub frame_tx: watch::Sender<Frame>,
    /// Keep the receivers alive to prevent channel closure
    pub _mode_rx: watch::Receiver<RefreshMode>,
    pub _frame_rx: watch::Receiver<Frame>,
}

impl AppState {
    /// Create a new AppState with a stopped timer
    pub fn new(port: u16, host: String, settings: DisplaySettings, mode: RefreshMode) -> Self {
        let initial_frame = Frame {
            clock: format_clock(&Local::now(), settings.clock_style),
            elapsed: format_elapsed(0.0, settings.separator)
                .unwrap_or_else(|_| ELAPSED_PLACEHOLDER.to_string()),
            elapsed_seconds: 0.0,
            label: TimerState::new().button_label().as_str().to_string(),
            phase: Phase::Stopped,
            mode,
            tick: 0,
        };
        let (mode_tx, mode_rx) = watch::channel(mode);
        let (frame_tx, frame_rx) = watch::channel(initial_frame);

        Self {
            timer_state: Arc::new(Mutex::new(TimerState::new())),
            display_state: Arc::new(Mutex::new(DisplayState::new(mode))),
            settings,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            mode_tx,
            frame_tx,
            _mode_rx: mode_rx,
            _frame_rx: frame_rx,
        }
    }

    /// Apply an update to the timer at `now` and record the action
    pub fn update_timer<F>(&self, action: &str, now: Instant, updater: F) -> Result<ActionOutcome, String>
    where
        F: FnOnce(&mut TimerState) -> Option<Transition>,
    {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let transition = updater(&mut *timer);
        let snapshot = timer.snapshot(now, self.settings.separator);
        drop(timer); // Release the lock early

        match transition {
            Some(transition) => {
                info!("Timer {:?} via {} (elapsed {})", transition, action, snapshot.elapsed);
                self.record_action(action);
            }
            None => debug!("Ignored {} while {:?}", action, snapshot.phase),
        }

        Ok(ActionOutcome { transition, timer: snapshot })
    }

    /// Start the stopwatch
    pub fn on_start(&self) -> Result<ActionOutcome, String> {
        self.on_start_at(monotonic_now())
    }

    pub fn on_start_at(&self, now: Instant) -> Result<ActionOutcome, String> {
        self.update_timer("start", now, |timer| timer.start(now).then_some(Transition::Start))
    }

    /// Pause a running stopwatch or resume a paused one
    pub fn on_pause_or_resume(&self) -> Result<ActionOutcome, String> {
        self.on_pause_or_resume_at(monotonic_now())
    }

    pub fn on_pause_or_resume_at(&self, now: Instant) -> Result<ActionOutcome, String> {
        self.update_timer("pause-or-resume", now, |timer| timer.pause_or_resume(now))
    }

    /// Press the contextual action button (Start, Pause or Resume)
    pub fn on_action(&self) -> Result<ActionOutcome, String> {
        self.on_action_at(monotonic_now())
    }

    pub fn on_action_at(&self, now: Instant) -> Result<ActionOutcome, String> {
        self.update_timer("action", now, |timer| timer.press_action(now))
    }

    /// Reset the stopwatch to zero
    pub fn on_stop(&self) -> Result<ActionOutcome, String> {
        self.on_stop_at(monotonic_now())
    }

    pub fn on_stop_at(&self, now: Instant) -> Result<ActionOutcome, String> {
        self.update_timer("stop", now, |timer| timer.stop().then_some(Transition::Stop))
    }

    /// Elapsed running time in seconds at `now`
    pub fn elapsed_seconds(&self, now: Instant) -> Result<f64, String> {
        self.timer_state.lock()
            .map(|timer| timer.elapsed_seconds(now))
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Get current timer snapshot
    pub fn get_timer_snapshot(&self, now: Instant) -> Result<TimerSnapshot, String> {
        self.timer_state.lock()
            .map(|timer| timer.snapshot(now, self.settings.separator))
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Get current display state
    pub fn get_display_state(&self) -> Result<DisplayState, String> {
        self.display_state.lock()
            .map(|state| state.clone())
            .map_err(|e| format!("Failed to lock display state: {}", e))
    }

    /// Render both clocks for a tick at `now` / `wall`
    pub fn render_frame<Tz>(&self, now: Instant, wall: &DateTime<Tz>) -> Result<Frame, String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let (elapsed_seconds, phase, label) = {
            let timer = self.timer_state.lock()
                .map_err(|e| format!("Failed to lock timer state: {}", e))?;
            (timer.elapsed_seconds(now), timer.phase(), timer.button_label())
        };

        let (mode, tick) = {
            let mut display = self.display_state.lock()
                .map_err(|e| format!("Failed to lock display state: {}", e))?;
            display.ticks += 1;
            (display.mode, display.ticks)
        };

        let elapsed = match format_elapsed(elapsed_seconds, self.settings.separator) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to format elapsed time: {}", e);
                ELAPSED_PLACEHOLDER.to_string()
            }
        };

        Ok(Frame {
            clock: format_clock(wall, self.settings.clock_style),
            elapsed,
            elapsed_seconds,
            label: label.as_str().to_string(),
            phase,
            mode,
            tick,
        })
    }

    /// Publish a rendered frame to subscribers
    pub fn publish_frame(&self, frame: Frame) {
        if let Err(e) = self.frame_tx.send(frame) {
            warn!("Failed to publish frame: {}", e);
        }
    }

    /// Subscribe to rendered frames
    pub fn subscribe_frames(&self) -> watch::Receiver<Frame> {
        self.frame_tx.subscribe()
    }

    /// Most recently published frame
    pub fn latest_frame(&self) -> Frame {
        self.frame_tx.borrow().clone()
    }

    /// Switch between active and background refresh
    pub fn set_mode(&self, mode: RefreshMode) -> Result<DisplayState, String> {
        let mut display = self.display_state.lock()
            .map_err(|e| format!("Failed to lock display state: {}", e))?;

        let changed = display.mode != mode;
        display.mode = mode;
        let new_state = display.clone();
        drop(display);

        if changed {
            info!("Display mode set to {} ({:?} per tick)", mode.as_str(), self.settings.rates.period(mode));
            self.record_action(mode.as_str());
            if let Err(e) = self.mode_tx.send(mode) {
                warn!("Failed to send mode change: {}", e);
            }
        }

        Ok(new_state)
    }

    /// Subscribe to refresh mode changes
    pub fn subscribe_mode(&self) -> watch::Receiver<RefreshMode> {
        self.mode_tx.subscribe()
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;
        
        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
