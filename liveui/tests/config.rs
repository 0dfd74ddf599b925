use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use liveui::{LiveTimeConfig, LiveUiError, PatternFormatter, TimeFormatter, ToggleConfig};

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_toggle_defaults() {
    let config = ToggleConfig::default();
    assert_eq!(config.trigger_class, "toggle-btn");
    assert_eq!(config.container_class, "message");
    assert_eq!(config.content_class, "message-content");
    assert_eq!(config.collapsed_class, "collapsed");
    assert_eq!(config.show_more_label, "Show more");
    assert_eq!(config.show_less_label, "Show less");
}

#[test]
fn test_live_time_defaults() {
    let config = LiveTimeConfig::default();
    assert_eq!(config.class, "live-time");
    assert_eq!(config.timestamp_attr, "data-ts");
    assert_eq!(config.mode_attr, "data-type");
    assert_eq!(config.period(), Duration::from_secs(1));
    assert!(config.validate().is_ok());
}

#[test]
fn test_interval_builder() {
    let config = LiveTimeConfig::new().interval(Duration::from_millis(250));
    assert_eq!(config.interval_ms, 250);
    assert_eq!(config.period(), Duration::from_millis(250));
}

#[test]
fn test_validate_rejects_unusable_values() {
    let zero = LiveTimeConfig::new().interval(Duration::ZERO);
    assert!(matches!(zero.validate(), Err(LiveUiError::Config(_))));

    let no_class = LiveTimeConfig::new().class("");
    assert!(matches!(no_class.validate(), Err(LiveUiError::Config(_))));
}

// ============================================================================
// Deserialization
// ============================================================================

#[test]
fn test_partial_json_keeps_defaults() {
    let config: LiveTimeConfig =
        serde_json::from_str(r#"{ "interval_ms": 500, "today_label": "Heute" }"#).unwrap();
    assert_eq!(config.interval_ms, 500);
    assert_eq!(config.today_label, "Heute");
    assert_eq!(config.class, "live-time");

    let toggle: ToggleConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(toggle, ToggleConfig::default());
}

#[test]
fn test_formatter_from_json() {
    let fmt: PatternFormatter = serde_json::from_str(r#"{ "short": "%H.%M" }"#).unwrap();
    assert_eq!(fmt.short_time(NaiveTime::from_hms_opt(9, 5, 0).unwrap()), "09.05");
    assert_eq!(fmt.clock, PatternFormatter::default().clock);
}

// ============================================================================
// Formatter
// ============================================================================

#[test]
fn test_default_formatter() {
    let fmt = PatternFormatter::default();
    let time = NaiveTime::from_hms_opt(7, 3, 9).unwrap();
    assert_eq!(fmt.clock_time(time), "07:03:09");
    assert_eq!(fmt.short_time(time), "07:03");
    assert_eq!(
        fmt.month_year(NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()),
        "February 2026"
    );
}

#[test]
fn test_hour12_formatter_keeps_clock_24_hour() {
    let fmt = PatternFormatter::new().hour12();
    let time = NaiveTime::from_hms_opt(19, 3, 9).unwrap();
    assert_eq!(fmt.clock_time(time), "19:03:09");
    assert_eq!(fmt.short_time(time), "07:03 PM");
}

#[test]
fn test_invalid_pattern_is_rejected_and_falls_back() {
    let fmt = PatternFormatter::new().short_pattern("%Q");
    assert!(matches!(fmt.validate(), Err(LiveUiError::Config(_))));
    assert_eq!(
        fmt.short_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap()),
        "09:30"
    );
    assert!(PatternFormatter::default().validate().is_ok());
}

#[test]
fn test_pattern_builders() {
    let fmt = PatternFormatter::new()
        .clock_pattern("%H.%M.%S")
        .short_pattern("%Hh%M")
        .month_year_pattern("%m/%Y");
    let time = NaiveTime::from_hms_opt(9, 5, 7).unwrap();

    assert!(fmt.validate().is_ok());
    assert_eq!(fmt.clock_time(time), "09.05.07");
    assert_eq!(fmt.short_time(time), "09h05");
    assert_eq!(
        fmt.month_year(NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()),
        "02/2026"
    );
}
