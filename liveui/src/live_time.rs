//! Periodic re-rendering of live-time elements.
//!
//! Every pass scans the page for elements carrying the live-time class,
//! renders each one from its base timestamp and display mode, and writes
//! the text back only when it changed.

use std::sync::{Arc, Mutex};

use log::{debug, info, trace, warn};
use pagedom::Dom;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::mode::{parse_timestamp, DisplayMode, RelativeDay, Uptime};
use crate::{
    Clock, LiveTimeConfig, LiveUiError, Page, PatternFormatter, SystemClock, TimeFormatter,
};

/// Outcome counts of a single render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Elements whose text was rewritten.
    pub updated: usize,
    /// Elements whose text already matched.
    pub unchanged: usize,
    /// Elements with no usable timestamp or mode.
    pub skipped: usize,
}

/// Everything a pass needs, shared with the background task.
struct RenderCore {
    config: LiveTimeConfig,
    clock: Arc<dyn Clock>,
    formatter: Arc<dyn TimeFormatter>,
}

impl RenderCore {
    fn render_text(&self, mode: DisplayMode, ts: i64) -> Option<String> {
        let now = self.clock.now_millis();
        let config = &self.config;

        match mode {
            DisplayMode::Clock => {
                let local = self.clock.to_local(now)?;
                Some(format!(
                    "{}{}",
                    config.clock_prefix,
                    self.formatter.clock_time(local.time())
                ))
            }
            DisplayMode::Uptime => {
                let uptime = Uptime::from_millis(now.wrapping_sub(ts));
                Some(format!("{}{uptime}", config.uptime_prefix))
            }
            DisplayMode::Smart => {
                let stamp = self.clock.to_local(ts)?;
                let today = self.clock.to_local(now)?.date();

                let text = match RelativeDay::classify(stamp.date(), today) {
                    RelativeDay::Today => format!(
                        "{}, {}",
                        config.today_label,
                        self.formatter.short_time(stamp.time())
                    ),
                    RelativeDay::Yesterday => format!(
                        "{}, {}",
                        config.yesterday_label,
                        self.formatter.short_time(stamp.time())
                    ),
                    RelativeDay::Other => self.formatter.month_year(stamp.date()),
                };
                Some(text)
            }
        }
    }

    fn pass<D: Dom>(&self, dom: &mut D) -> PassReport {
        let mut report = PassReport::default();

        for id in dom.query_all(&self.config.class) {
            let Some(text) = self.element_text(dom, &id) else {
                report.skipped += 1;
                continue;
            };

            if dom.text(&id).as_deref() == Some(text.as_str()) {
                report.unchanged += 1;
                continue;
            }

            match dom.set_text(&id, &text) {
                Ok(()) => report.updated += 1,
                Err(e) => {
                    warn!("Failed to update live-time element {id}: {e}");
                    report.skipped += 1;
                }
            }
        }

        report
    }

    /// Text an element should show, or None if it must be left untouched.
    fn element_text<D: Dom>(&self, dom: &D, id: &str) -> Option<String> {
        let Some(ts) = dom
            .attribute(id, &self.config.timestamp_attr)
            .and_then(parse_timestamp)
        else {
            trace!("Skipping {id}: no usable timestamp");
            return None;
        };

        let mode = match dom.attribute(id, &self.config.mode_attr)?.parse::<DisplayMode>() {
            Ok(mode) => mode,
            Err(e) => {
                trace!("Skipping {id}: {e}");
                return None;
            }
        };

        self.render_text(mode, ts)
    }
}

/// Keeps live-time elements in sync with the clock.
///
/// Use [`pass`](Self::pass) to render on demand, or [`start`](Self::start)
/// to render immediately and then once per configured interval on the tokio
/// runtime until [`stop`](Self::stop).
pub struct LiveTimeRenderer {
    core: Arc<RenderCore>,
    cancel: Option<CancellationToken>,
    task: Option<JoinHandle<()>>,
}

impl LiveTimeRenderer {
    /// Renderer using the system clock and default formatting.
    pub fn new(config: LiveTimeConfig) -> Self {
        Self::with_parts(config, SystemClock, PatternFormatter::default())
    }

    pub fn with_parts(
        config: LiveTimeConfig,
        clock: impl Clock + 'static,
        formatter: impl TimeFormatter + 'static,
    ) -> Self {
        Self {
            core: Arc::new(RenderCore {
                config,
                clock: Arc::new(clock),
                formatter: Arc::new(formatter),
            }),
            cancel: None,
            task: None,
        }
    }

    /// Text an element in `mode` with base timestamp `ts` renders to now.
    /// None if the clock cannot place the timestamp on a calendar.
    pub fn render_text(&self, mode: DisplayMode, ts: i64) -> Option<String> {
        self.core.render_text(mode, ts)
    }

    /// Run one render pass over `dom`.
    pub fn pass<D: Dom>(&self, dom: &mut D) -> PassReport {
        self.core.pass(dom)
    }

    /// True while the render task is alive and not cancelled. A task that
    /// exited on its own (panic, runtime shutdown) counts as stopped.
    pub fn is_running(&self) -> bool {
        self.cancel.as_ref().is_some_and(|c| !c.is_cancelled())
            && self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Spawn the render loop on the current tokio runtime.
    ///
    /// The first pass runs immediately, then one per interval. Ticks missed
    /// while a pass was delayed are skipped, never queued.
    pub fn start<D>(&mut self, page: Arc<Mutex<Page<D>>>) -> Result<(), LiveUiError>
    where
        D: Dom + Send + 'static,
    {
        if self.is_running() {
            return Err(LiveUiError::AlreadyRunning("live-time renderer"));
        }
        self.core.config.validate()?;
        let handle = tokio::runtime::Handle::try_current()?;

        let cancel = CancellationToken::new();
        let core = self.core.clone();
        let token = cancel.clone();
        let period = core.config.period();

        let task = handle.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => run_pass(&core, &page),
                }
            }
            debug!("Live-time render loop exited");
        });

        info!("Live-time renderer started (every {period:?})");
        self.cancel = Some(cancel);
        self.task = Some(task);
        Ok(())
    }

    /// Cancel the render loop. A pass already in progress finishes; no
    /// further pass is scheduled.
    pub fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
            info!("Live-time renderer stopped");
        }
    }

    /// Cancel the render loop and wait for the task to finish.
    pub async fn shutdown(&mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for LiveTimeRenderer {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}

fn run_pass<D: Dom>(core: &RenderCore, page: &Mutex<Page<D>>) {
    let Ok(mut page) = page.lock() else {
        warn!("Page lock poisoned, skipping render pass");
        return;
    };
    let report = core.pass(page.dom_mut());
    debug!(
        "Live-time pass: {} updated, {} unchanged, {} skipped",
        report.updated, report.unchanged, report.skipped
    );
}
