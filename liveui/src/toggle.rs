//! Show more / show less toggle for collapsible messages.

use log::{debug, info, warn};
use pagedom::{Dom, DomError, Event};

use crate::{ListenerId, LiveUiError, Page, ToggleConfig};

/// Visual state of a toggle target's content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Expanded,
    Collapsed,
}

impl ToggleState {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }

    /// Trigger label describing what the next click will do.
    pub fn label<'a>(&self, config: &'a ToggleConfig) -> &'a str {
        match self {
            Self::Collapsed => &config.show_more_label,
            Self::Expanded => &config.show_less_label,
        }
    }
}

/// Delegated click handler that collapses and expands message bodies.
///
/// One listener on the [`Page`] handles every trigger in the document,
/// including triggers added after [`start`](Self::start).
#[derive(Debug, Default)]
pub struct ToggleController {
    config: ToggleConfig,
    listener: Option<ListenerId>,
}

impl ToggleController {
    pub fn new(config: ToggleConfig) -> Self {
        Self {
            config,
            listener: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.listener.is_some()
    }

    /// Register the delegated click listener on `page`.
    pub fn start<D: Dom>(&mut self, page: &mut Page<D>) -> Result<(), LiveUiError> {
        if self.listener.is_some() {
            return Err(LiveUiError::AlreadyRunning("toggle controller"));
        }

        let config = self.config.clone();
        let id = page.add_listener(move |dom, event| handle_event(&config, dom, event));
        self.listener = Some(id);
        info!("Toggle controller started");
        Ok(())
    }

    /// Remove the listener. Stopping a stopped controller does nothing.
    pub fn stop<D: Dom>(&mut self, page: &mut Page<D>) {
        if let Some(id) = self.listener.take() {
            page.remove_listener(id);
            info!("Toggle controller stopped");
        }
    }

    /// Handle one event directly, without a registered listener.
    pub fn handle_event<D: Dom>(&self, dom: &mut D, event: &Event) {
        handle_event(&self.config, dom, event);
    }

    /// Current state of the content region paired with `trigger`.
    pub fn state<D: Dom>(&self, dom: &D, trigger: &str) -> Option<ToggleState> {
        let content = content_region(&self.config, dom, trigger)?;
        Some(ToggleState::from_collapsed(
            dom.has_class(&content, &self.config.collapsed_class),
        ))
    }
}

fn handle_event<D: Dom>(config: &ToggleConfig, dom: &mut D, event: &Event) {
    let Event::Click { target, .. } = event;
    let Some(target) = target.as_deref() else {
        return;
    };
    if !dom.has_class(target, &config.trigger_class) {
        return;
    }

    match toggle(config, dom, target) {
        Ok(Some(state)) => debug!("Toggled {target}: {state:?}"),
        Ok(None) => debug!("Trigger {target} has no content region, ignoring"),
        Err(e) => warn!("Toggle on {target} failed: {e}"),
    }
}

fn content_region<D: Dom>(config: &ToggleConfig, dom: &D, trigger: &str) -> Option<String> {
    let container = dom.closest(trigger, &config.container_class)?;
    dom.query_selector(&container, &config.content_class)
}

/// Flip the content region and relabel the trigger to match the new state.
fn toggle<D: Dom>(
    config: &ToggleConfig,
    dom: &mut D,
    trigger: &str,
) -> Result<Option<ToggleState>, DomError> {
    let Some(content) = content_region(config, dom, trigger) else {
        return Ok(None);
    };

    let collapsed = dom.toggle_class(&content, &config.collapsed_class)?;
    let state = ToggleState::from_collapsed(collapsed);
    dom.set_text(trigger, state.label(config))?;
    Ok(Some(state))
}
