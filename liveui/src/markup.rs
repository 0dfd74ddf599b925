//! Builders for the markup the widgets consume.
//!
//! These produce the same element shapes a server-rendered page carries:
//! live-time spans with a base timestamp and mode, and collapsible messages
//! with a toggle button.

use pagedom::Element;

use crate::{DisplayMode, LiveTimeConfig, LiveUiError, ToggleConfig, ToggleState};

/// A live-time span in `mode`, anchored at `ts` (epoch milliseconds).
pub fn live_time_element(config: &LiveTimeConfig, mode: DisplayMode, ts: i64) -> Element {
    let placeholder = match mode {
        DisplayMode::Clock => format!("{}loading...", config.clock_prefix),
        DisplayMode::Uptime => format!("{}loading...", glyph(&config.uptime_prefix)),
        DisplayMode::Smart => String::new(),
    };

    Element::span()
        .class(config.class.clone())
        .attr(config.timestamp_attr.clone(), ts)
        .attr(config.mode_attr.clone(), mode)
        .text(placeholder)
}

/// Server clock display, anchored at the render time.
pub fn clock_element(now_ms: i64) -> Element {
    live_time_element(&LiveTimeConfig::default(), DisplayMode::Clock, now_ms)
}

/// Host uptime display, anchored at the boot time.
pub fn uptime_element(boot_ms: i64) -> Element {
    live_time_element(&LiveTimeConfig::default(), DisplayMode::Uptime, boot_ms)
}

/// Relative timestamp display ("Today, 09:30").
pub fn smart_element(ts: i64) -> Element {
    live_time_element(&LiveTimeConfig::default(), DisplayMode::Smart, ts)
}

/// Leading glyph of a prefix, with its trailing space.
fn glyph(prefix: &str) -> String {
    match prefix.split_once(' ') {
        Some((glyph, _)) => format!("{glyph} "),
        None => prefix.to_string(),
    }
}

/// A guestbook-style message: author and posted time in a header, a
/// collapsible body, and a toggle button whose label matches the initial
/// state.
pub fn message_element(
    toggle: &ToggleConfig,
    live_time: &LiveTimeConfig,
    author: &str,
    body: &str,
    posted_ms: i64,
    collapsed: bool,
) -> Element {
    let mut content = Element::div()
        .class(toggle.content_class.clone())
        .child(Element::paragraph(body));
    if collapsed {
        content = content.class(toggle.collapsed_class.clone());
    }

    let label = ToggleState::from_collapsed(collapsed).label(toggle);

    Element::div()
        .class(toggle.container_class.clone())
        .child(
            Element::div()
                .class("message-header")
                .child(Element::new("h3").text(author))
                .child(live_time_element(live_time, DisplayMode::Smart, posted_ms)),
        )
        .child(content)
        .child(Element::button(label).class(toggle.trigger_class.clone()))
}

/// Boot time in epoch milliseconds from `/proc/uptime` contents.
///
/// The first whitespace-separated field is the uptime in (fractional)
/// seconds; whole seconds are subtracted from `now_ms`.
pub fn boot_timestamp_millis(now_ms: i64, proc_uptime: &str) -> Result<i64, LiveUiError> {
    let field = proc_uptime
        .split_whitespace()
        .next()
        .ok_or_else(|| LiveUiError::Uptime("empty uptime".into()))?;
    let seconds: f64 = field
        .parse()
        .map_err(|e| LiveUiError::Uptime(format!("`{field}`: {e}")))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(LiveUiError::Uptime(format!("`{field}` is not a duration")));
    }

    Ok(now_ms.saturating_sub((seconds.trunc() as i64).saturating_mul(1000)))
}
