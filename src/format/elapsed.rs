//! Elapsed-time formatter producing `M:SS.mmm`

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::FormatError;

/// Shown in place of the elapsed counter when formatting fails
pub const ELAPSED_PLACEHOLDER: &str = "--:--.---";

/// Decimal separator placed between seconds and milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    #[default]
    Dot,
    Comma,
}

impl DecimalSeparator {
    pub fn as_char(&self) -> char {
        match self {
            DecimalSeparator::Dot => '.',
            DecimalSeparator::Comma => ',',
        }
    }
}

impl fmt::Display for DecimalSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for DecimalSeparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "." | "dot" => Ok(DecimalSeparator::Dot),
            "," | "comma" => Ok(DecimalSeparator::Comma),
            other => Err(format!("unknown decimal separator '{}', expected '.' or ','", other)),
        }
    }
}

/// Format a duration in seconds as minutes, zero-padded seconds and
/// zero-padded milliseconds, e.g. `1:05.500`.
///
/// Minutes are not wrapped into hours, so an hour and five seconds reads
/// `60:05.000`. Milliseconds are truncated, never rounded up into the next
/// second.
pub fn format_elapsed(seconds: f64, separator: DecimalSeparator) -> Result<String, FormatError> {
    if !seconds.is_finite() {
        return Err(FormatError::NonFinite(seconds));
    }
    if seconds < 0.0 {
        return Err(FormatError::Negative(seconds));
    }
    if seconds >= u64::MAX as f64 {
        return Err(FormatError::OutOfRange(seconds));
    }

    let whole_seconds = seconds.trunc() as u64;
    let minutes = whole_seconds / 60;
    let secs = whole_seconds % 60;
    let millis = ((seconds % 1.0) * 1000.0).floor() as u32;

    Ok(format!("{}:{:02}{}{:03}", minutes, secs, separator.as_char(), millis.min(999)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_elapsed(0.0, DecimalSeparator::Dot).unwrap(), "0:00.000");
    }

    #[test]
    fn formats_minutes_and_half_second() {
        assert_eq!(format_elapsed(65.5, DecimalSeparator::Dot).unwrap(), "1:05.500");
    }

    #[test]
    fn truncates_milliseconds() {
        assert_eq!(format_elapsed(2.9999, DecimalSeparator::Dot).unwrap(), "0:02.999");
        assert_eq!(format_elapsed(0.0625, DecimalSeparator::Dot).unwrap(), "0:00.062");
    }

    #[test]
    fn minutes_are_not_wrapped_into_hours() {
        assert_eq!(format_elapsed(3_665.25, DecimalSeparator::Dot).unwrap(), "61:05.250");
    }

    #[test]
    fn uses_comma_separator() {
        assert_eq!(format_elapsed(65.5, DecimalSeparator::Comma).unwrap(), "1:05,500");
    }

    #[test]
    fn output_shape_holds_across_inputs() {
        for &value in &[0.0, 0.001, 0.5, 9.75, 59.999, 60.0, 599.125, 12_345.678] {
            let text = format_elapsed(value, DecimalSeparator::Dot).unwrap();
            let (minutes, rest) = text.split_once(':').unwrap();
            let (secs, millis) = rest.split_once('.').unwrap();
            assert!(!minutes.is_empty() && minutes.chars().all(|c| c.is_ascii_digit()), "{}", text);
            assert_eq!(secs.len(), 2, "{}", text);
            assert_eq!(millis.len(), 3, "{}", text);
        }
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert_eq!(format_elapsed(-1.0, DecimalSeparator::Dot), Err(FormatError::Negative(-1.0)));
        assert!(matches!(format_elapsed(f64::NAN, DecimalSeparator::Dot), Err(FormatError::NonFinite(_))));
        assert!(matches!(
            format_elapsed(f64::INFINITY, DecimalSeparator::Dot),
            Err(FormatError::NonFinite(_))
        ));
        assert!(matches!(format_elapsed(1e30, DecimalSeparator::Dot), Err(FormatError::OutOfRange(_))));
    }

    #[test]
    fn parses_separator_names() {
        assert_eq!(".".parse::<DecimalSeparator>().unwrap(), DecimalSeparator::Dot);
        assert_eq!("Comma".parse::<DecimalSeparator>().unwrap(), DecimalSeparator::Comma);
        assert!(";".parse::<DecimalSeparator>().is_err());
    }
}
