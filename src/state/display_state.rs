//! Display visibility and refresh cadence

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Whether the display is in front of the user or backgrounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
    Active,
    Background,
}

impl RefreshMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshMode::Active => "active",
            RefreshMode::Background => "background",
        }
    }
}

/// Redraw frequencies for each refresh mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshRates {
    pub active_hz: u32,
    pub background_hz: u32,
}

impl RefreshRates {
    pub fn new(active_hz: u32, background_hz: u32) -> Self {
        Self {
            active_hz: active_hz.max(1),
            background_hz: background_hz.max(1),
        }
    }

    /// Interval between ticks in the given mode
    pub fn period(&self, mode: RefreshMode) -> Duration {
        let hz = match mode {
            RefreshMode::Active => self.active_hz,
            RefreshMode::Background => self.background_hz,
        };
        Duration::from_secs_f64(1.0 / f64::from(hz))
    }
}

impl Default for RefreshRates {
    fn default() -> Self {
        Self::new(120, 1)
    }
}

/// Display state tracked by the refresh driver
#[derive(Debug, Clone)]
pub struct DisplayState {
    pub mode: RefreshMode,
    /// Number of frames rendered since launch
    pub ticks: u64,
}

impl DisplayState {
    pub fn new(mode: RefreshMode) -> Self {
        Self { mode, ticks: 0 }
    }

    pub fn is_visible(&self) -> bool {
        self.mode == RefreshMode::Active
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(RefreshMode::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates_match_display_cadence() {
        let rates = RefreshRates::default();
        assert_eq!(rates.period(RefreshMode::Background), Duration::from_secs(1));
        let active = rates.period(RefreshMode::Active);
        assert!(active > Duration::from_micros(8_300) && active < Duration::from_micros(8_400));
    }

    #[test]
    fn zero_rates_are_clamped() {
        let rates = RefreshRates::new(0, 0);
        assert_eq!(rates.period(RefreshMode::Active), Duration::from_secs(1));
        assert_eq!(rates.period(RefreshMode::Background), Duration::from_secs(1));
    }

    #[test]
    fn visibility_follows_mode() {
        assert!(DisplayState::default().is_visible());
        assert!(!DisplayState::new(RefreshMode::Background).is_visible());
    }
}
