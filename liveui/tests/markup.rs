use liveui::markup::{
    boot_timestamp_millis, clock_element, live_time_element, message_element, smart_element,
    uptime_element,
};
use liveui::{DisplayMode, LiveTimeConfig, LiveUiError, Page, ToggleConfig, ToggleController};
use pagedom::{Document, Dom, Element};

// ============================================================================
// Live-time elements
// ============================================================================

#[test]
fn test_clock_element_shape() {
    let el = clock_element(1760536800000);
    assert_eq!(el.tag, "span");
    assert!(el.has_class("live-time"));
    assert_eq!(el.get_attr("data-ts"), Some("1760536800000"));
    assert_eq!(el.get_attr("data-type"), Some("clock"));
    assert_eq!(el.text_content(), "⏲ loading...");
}

#[test]
fn test_uptime_and_smart_placeholders() {
    assert_eq!(uptime_element(5).text_content(), "⏱ loading...");
    assert_eq!(uptime_element(5).get_attr("data-type"), Some("uptime"));
    assert_eq!(smart_element(5).text_content(), "");
    assert_eq!(smart_element(5).get_attr("data-type"), Some("smart"));
}

#[test]
fn test_live_time_element_follows_config() {
    let config = LiveTimeConfig {
        class: "ticker".to_string(),
        timestamp_attr: "data-since".to_string(),
        ..LiveTimeConfig::default()
    };
    let el = live_time_element(&config, DisplayMode::Uptime, 9);
    assert!(el.has_class("ticker"));
    assert_eq!(el.get_attr("data-since"), Some("9"));
}

// ============================================================================
// Messages
// ============================================================================

fn message(collapsed: bool) -> Document {
    Document::new(
        message_element(
            &ToggleConfig::default(),
            &LiveTimeConfig::default(),
            "alice",
            "hello there",
            1760536800000,
            collapsed,
        )
        .id("msg"),
    )
}

#[test]
fn test_message_label_matches_initial_state() {
    for (collapsed, label) in [(true, "Show more"), (false, "Show less")] {
        let doc = message(collapsed);
        let content = doc.query_selector("msg", "message-content").unwrap();
        let trigger = doc.query_all("toggle-btn").remove(0);

        assert_eq!(doc.has_class(&content, "collapsed"), collapsed);
        assert_eq!(doc.text(&trigger).unwrap(), label);
        assert_eq!(doc.text(&content).unwrap(), "hello there");
    }
}

#[test]
fn test_message_carries_smart_timestamp() {
    let doc = message(false);
    let stamps = doc.query_all("live-time");
    assert_eq!(stamps.len(), 1);
    assert_eq!(doc.attribute(&stamps[0], "data-type"), Some("smart"));
    assert_eq!(doc.closest(&stamps[0], "message"), Some("msg".to_string()));
}

#[test]
fn test_message_works_with_toggle() {
    let mut page = Page::new(Document::new(
        Element::div().id("root").child(
            message_element(
                &ToggleConfig::default(),
                &LiveTimeConfig::default(),
                "bob",
                "body",
                1,
                true,
            )
            .id("msg"),
        ),
    ));
    let mut toggle = ToggleController::default();
    toggle.start(&mut page).unwrap();

    let trigger = page.dom().query_all("toggle-btn").remove(0);
    page.click(&trigger);

    let content = page.dom().query_selector("msg", "message-content").unwrap();
    assert!(!page.dom().has_class(&content, "collapsed"));
    assert_eq!(page.dom().text(&trigger).unwrap(), "Show less");
}

// ============================================================================
// Boot time
// ============================================================================

#[test]
fn test_boot_timestamp_from_proc_uptime() {
    let now = 1_760_536_800_000;
    assert_eq!(
        boot_timestamp_millis(now, "3600.87 14000.12\n").unwrap(),
        now - 3_600_000
    );
    assert_eq!(boot_timestamp_millis(now, "0.00 0.00").unwrap(), now);
}

#[test]
fn test_boot_timestamp_rejects_bad_input() {
    for input in ["", "   ", "abc 1.0", "-5 1", "NaN 1", "inf 1"] {
        assert!(
            matches!(
                boot_timestamp_millis(0, input),
                Err(LiveUiError::Uptime(_))
            ),
            "{input:?}"
        );
    }
}
