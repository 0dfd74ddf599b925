//! Date/time formatting capability.

use std::fmt::{Display, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveTime};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::LiveUiError;

const DEFAULT_CLOCK: &str = "%H:%M:%S";
const DEFAULT_SHORT: &str = "%H:%M";
const DEFAULT_SHORT_12H: &str = "%I:%M %p";
const DEFAULT_MONTH_YEAR: &str = "%B %Y";

/// Formats the three renderings live-time elements need.
pub trait TimeFormatter: Send + Sync {
    /// Full 24-hour wall time, used by the `clock` mode.
    fn clock_time(&self, time: NaiveTime) -> String;

    /// Hour and minute, used after "Today" / "Yesterday".
    fn short_time(&self, time: NaiveTime) -> String;

    /// Month name and year, used for older dates.
    fn month_year(&self, date: NaiveDate) -> String;
}

/// strftime-pattern formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternFormatter {
    pub clock: String,
    pub short: String,
    pub month_year: String,
}

impl Default for PatternFormatter {
    fn default() -> Self {
        Self {
            clock: DEFAULT_CLOCK.to_string(),
            short: DEFAULT_SHORT.to_string(),
            month_year: DEFAULT_MONTH_YEAR.to_string(),
        }
    }
}

impl PatternFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a 12-hour short time (`09:30 AM`). The clock mode stays 24-hour.
    pub fn hour12(mut self) -> Self {
        self.short = DEFAULT_SHORT_12H.to_string();
        self
    }

    pub fn clock_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.clock = pattern.into();
        self
    }

    pub fn short_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.short = pattern.into();
        self
    }

    pub fn month_year_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.month_year = pattern.into();
        self
    }

    /// Reject patterns chrono cannot parse.
    pub fn validate(&self) -> Result<(), LiveUiError> {
        for pattern in [&self.clock, &self.short, &self.month_year] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LiveUiError::Config(format!(
                    "invalid time pattern `{pattern}`"
                )));
            }
        }
        Ok(())
    }
}

/// Format `value`, or None when chrono rejects the pattern at render time.
fn try_format(value: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{value}").ok()?;
    Some(out)
}

fn or_default(pattern: &str, formatted: Option<String>, default: impl Display) -> String {
    formatted.unwrap_or_else(|| {
        warn!("invalid time pattern {pattern:?}, using default");
        default.to_string()
    })
}

impl TimeFormatter for PatternFormatter {
    fn clock_time(&self, time: NaiveTime) -> String {
        let formatted = try_format(time.format(&self.clock));
        or_default(&self.clock, formatted, time.format(DEFAULT_CLOCK))
    }

    fn short_time(&self, time: NaiveTime) -> String {
        let formatted = try_format(time.format(&self.short));
        or_default(&self.short, formatted, time.format(DEFAULT_SHORT))
    }

    fn month_year(&self, date: NaiveDate) -> String {
        let formatted = try_format(date.format(&self.month_year));
        or_default(&self.month_year, formatted, date.format(DEFAULT_MONTH_YEAR))
    }
}
