//! Widget configuration types.
//!
//! Both structs deserialize with every field defaulted, so a config file
//! only needs the values it overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::LiveUiError;

/// Markers and labels used by the [`ToggleController`](crate::ToggleController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Class identifying clickable toggle controls.
    pub trigger_class: String,
    /// Class of the nearest enclosing container of a trigger.
    pub container_class: String,
    /// Class of the region inside the container that collapses.
    pub content_class: String,
    /// Class toggled on the content region.
    pub collapsed_class: String,
    /// Label shown while the content is collapsed.
    pub show_more_label: String,
    /// Label shown while the content is expanded.
    pub show_less_label: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            trigger_class: "toggle-btn".to_string(),
            container_class: "message".to_string(),
            content_class: "message-content".to_string(),
            collapsed_class: "collapsed".to_string(),
            show_more_label: "Show more".to_string(),
            show_less_label: "Show less".to_string(),
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger_class(mut self, class: impl Into<String>) -> Self {
        self.trigger_class = class.into();
        self
    }

    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = class.into();
        self
    }

    pub fn content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = class.into();
        self
    }

    pub fn collapsed_class(mut self, class: impl Into<String>) -> Self {
        self.collapsed_class = class.into();
        self
    }

    pub fn labels(mut self, show_more: impl Into<String>, show_less: impl Into<String>) -> Self {
        self.show_more_label = show_more.into();
        self.show_less_label = show_less.into();
        self
    }
}

/// Markers, timing and text fragments used by the
/// [`LiveTimeRenderer`](crate::LiveTimeRenderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveTimeConfig {
    /// Class identifying live-time elements.
    pub class: String,
    /// Attribute holding the base timestamp in epoch milliseconds.
    pub timestamp_attr: String,
    /// Attribute holding the display mode.
    pub mode_attr: String,
    /// Period between render passes, in milliseconds.
    pub interval_ms: u64,
    pub clock_prefix: String,
    pub uptime_prefix: String,
    pub today_label: String,
    pub yesterday_label: String,
}

impl Default for LiveTimeConfig {
    fn default() -> Self {
        Self {
            class: "live-time".to_string(),
            timestamp_attr: "data-ts".to_string(),
            mode_attr: "data-type".to_string(),
            interval_ms: 1000,
            clock_prefix: "⏲ ".to_string(),
            uptime_prefix: "⏱ Host Uptime: ".to_string(),
            today_label: "Today".to_string(),
            yesterday_label: "Yesterday".to_string(),
        }
    }
}

impl LiveTimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Check the values a render loop cannot run with.
    pub fn validate(&self) -> Result<(), LiveUiError> {
        if self.interval_ms == 0 {
            return Err(LiveUiError::Config("interval_ms must be non-zero".into()));
        }
        if self.class.is_empty() {
            return Err(LiveUiError::Config("class must not be empty".into()));
        }
        Ok(())
    }
}
