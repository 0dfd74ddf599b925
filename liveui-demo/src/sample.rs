//! The sample page the demo renders.

use std::fs;

use liveui::markup::{boot_timestamp_millis, live_time_element, message_element};
use liveui::{DisplayMode, LiveTimeConfig, ToggleConfig};
use log::warn;
use pagedom::{Document, Dom, Element};

const HOUR: i64 = 60 * 60 * 1000;
const DAY: i64 = 24 * HOUR;

const PROC_UPTIME: &str = "/proc/uptime";

/// Boot time of this host, or None where `/proc/uptime` is unavailable.
pub fn read_boot_time(now_ms: i64) -> Option<i64> {
    let contents = fs::read_to_string(PROC_UPTIME)
        .map_err(|e| warn!("Couldn't read {PROC_UPTIME}: {e}"))
        .ok()?;
    boot_timestamp_millis(now_ms, &contents)
        .map_err(|e| warn!("Couldn't parse {PROC_UPTIME}: {e}"))
        .ok()
}

/// Status bar with the server clock and host uptime, followed by a few
/// messages posted today, yesterday and two months ago.
pub fn document(
    toggle: &ToggleConfig,
    live_time: &LiveTimeConfig,
    now_ms: i64,
    boot_ms: Option<i64>,
) -> Document {
    let uptime = match boot_ms {
        Some(boot) => live_time_element(live_time, DisplayMode::Uptime, boot).id("uptime"),
        None => Element::span().id("uptime").text("Couldn't read uptime"),
    };

    let messages = [
        ("alice", "Nice page!", now_ms - 2 * HOUR, false),
        ("bob", "The clock is ticking.", now_ms - DAY - HOUR, true),
        ("carol", "First!", now_ms - 60 * DAY, true),
    ];

    Document::new(
        Element::div()
            .id("page")
            .child(
                Element::section()
                    .id("status")
                    .child(live_time_element(live_time, DisplayMode::Clock, now_ms).id("clock"))
                    .child(uptime),
            )
            .child(
                Element::section().id("messages").children(
                    messages
                        .into_iter()
                        .enumerate()
                        .map(|(i, (author, body, posted, collapsed))| {
                            message_element(toggle, live_time, author, body, posted, collapsed)
                                .id(format!("message-{i}"))
                        }),
                ),
            ),
    )
}

/// One line per live-time element and toggle trigger, in document order.
pub fn snapshot<D: Dom>(dom: &D, toggle: &ToggleConfig, live_time: &LiveTimeConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for id in dom.query_all(&live_time.class) {
        lines.push(format!("{id:>12}  {}", dom.text(&id).unwrap_or_default()));
    }
    for id in dom.query_all(&toggle.trigger_class) {
        let owner = dom.closest(&id, &toggle.container_class).unwrap_or_default();
        lines.push(format!("{owner:>12}  [{}]", dom.text(&id).unwrap_or_default()));
    }
    lines
}

/// Id of the first toggle trigger on the page.
pub fn first_trigger<D: Dom>(dom: &D, toggle: &ToggleConfig) -> Option<String> {
    dom.query_all(&toggle.trigger_class).into_iter().next()
}
