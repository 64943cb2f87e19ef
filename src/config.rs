//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    format::{ClockStyle, DecimalSeparator},
    state::{DisplaySettings, RefreshMode, RefreshRates},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "stopwatch-clock")]
#[command(about = "A stopwatch display with a live wall clock and millisecond elapsed counter")]
#[command(version)]
pub struct Config {
    /// Port to bind the control server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Decimal separator between seconds and milliseconds ('.' or ',')
    #[arg(long, default_value = ".")]
    pub separator: DecimalSeparator,

    /// Show the wall clock with a 12-hour cycle and AM/PM
    #[arg(long)]
    pub twelve_hour: bool,

    /// Redraws per second while the display is visible
    #[arg(long, default_value = "120", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub active_hz: u32,

    /// Redraws per second while the display is in the background
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub background_hz: u32,

    /// Start with the display in background mode
    #[arg(long)]
    pub start_hidden: bool,

    /// Do not draw the clocks on the terminal
    #[arg(long)]
    pub headless: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            separator: self.separator,
            clock_style: if self.twelve_hour { ClockStyle::TwelveHour } else { ClockStyle::TwentyFourHour },
            rates: RefreshRates::new(self.active_hz, self.background_hz),
        }
    }

    pub fn initial_mode(&self) -> RefreshMode {
        if self.start_hidden { RefreshMode::Background } else { RefreshMode::Active }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["stopwatch-clock"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.initial_mode(), RefreshMode::Active);

        let settings = config.display_settings();
        assert_eq!(settings.separator, DecimalSeparator::Dot);
        assert_eq!(settings.clock_style, ClockStyle::TwentyFourHour);
        assert_eq!(settings.rates, RefreshRates::new(120, 1));
    }

    #[test]
    fn display_flags() {
        let config = Config::try_parse_from([
            "stopwatch-clock",
            "--separator", ",",
            "--twelve-hour",
            "--active-hz", "60",
            "--start-hidden",
            "-v",
        ])
        .unwrap();

        let settings = config.display_settings();
        assert_eq!(settings.separator, DecimalSeparator::Comma);
        assert_eq!(settings.clock_style, ClockStyle::TwelveHour);
        assert_eq!(settings.rates.active_hz, 60);
        assert_eq!(config.initial_mode(), RefreshMode::Background);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_zero_rate_and_unknown_separator() {
        assert!(Config::try_parse_from(["stopwatch-clock", "--active-hz", "0"]).is_err());
        assert!(Config::try_parse_from(["stopwatch-clock", "--separator", ";"]).is_err());
    }
}
