//! Display modes and the arithmetic behind them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// How a live-time element renders its base timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Current wall time. The base timestamp only enables the element.
    Clock,
    /// Time elapsed since the base timestamp.
    Uptime,
    /// "Today, 09:30", "Yesterday, 18:02" or "March 2026".
    Smart,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display mode `{0}`")]
pub struct UnknownMode(pub String);

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Uptime => "uptime",
            Self::Smart => "smart",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock" => Ok(Self::Clock),
            "uptime" => Ok(Self::Uptime),
            "smart" => Ok(Self::Smart),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elapsed time split into whole days, hours within the day and minutes
/// within the hour.
///
/// Each unit is floor-divided from the one below it and the displayed
/// hours/minutes are truncating remainders, so a negative duration yields
/// negative components rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Uptime {
    pub fn from_millis(elapsed: i64) -> Self {
        let seconds = elapsed.div_euclid(1000);
        let minutes = seconds.div_euclid(60);
        let hours = minutes.div_euclid(60);
        let days = hours.div_euclid(24);

        Self {
            days,
            hours: hours % 24,
            minutes: minutes % 60,
        }
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes",
            self.days, self.hours, self.minutes
        )
    }
}

/// Where a date falls relative to today, by calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Today,
    Yesterday,
    Other,
}

impl RelativeDay {
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        if date == today {
            Self::Today
        } else if Some(date) == today.pred_opt() {
            Self::Yesterday
        } else {
            Self::Other
        }
    }
}

/// Parse a base timestamp the way the page markup is read: optional leading
/// whitespace and sign, then the longest run of digits (or hex digits after
/// `0x`). Anything after the number is ignored.
///
/// Returns None when no digits are present, the value overflows, or it is
/// zero, since a zero timestamp disables the element.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    let value = i64::from_str_radix(digits, radix).ok()?;
    let value = if negative { -value } else { value };
    (value != 0).then_some(value)
}
