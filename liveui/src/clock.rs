//! Wall-clock capability.
//!
//! The renderer never reads the system time directly; it asks a [`Clock`]
//! for the current instant and for local calendar fields. Tests and frozen
//! demos use [`FixedClock`].

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

pub trait Clock: Send + Sync {
    /// Current instant in epoch milliseconds.
    fn now_millis(&self) -> i64;

    /// Local calendar date and time of an epoch-millisecond instant.
    /// None if the instant is out of range.
    fn to_local(&self, millis: i64) -> Option<NaiveDateTime>;
}

/// Host clock in the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn to_local(&self, millis: i64) -> Option<NaiveDateTime> {
        let utc = DateTime::from_timestamp_millis(millis)?.naive_utc();
        utc.checked_add_offset(Local.offset_from_utc_datetime(&utc).fix())
    }
}

/// Manually driven clock in a fixed UTC offset.
///
/// Clones share the same instant, so a test can keep one handle and advance
/// time while the renderer owns another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    millis: Arc<AtomicI64>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Clock frozen at `millis`, reporting calendar fields in UTC.
    pub fn new(millis: i64) -> Self {
        Self::with_offset(millis, Utc.fix())
    }

    pub fn with_offset(millis: i64, offset: FixedOffset) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(millis)),
            offset,
        }
    }

    /// Clock frozen at the given local wall time in `offset`.
    pub fn at_local(local: NaiveDateTime, offset: FixedOffset) -> Self {
        Self::with_offset(local_to_millis(local, offset), offset)
    }

    pub fn advance(&self, delta: TimeDelta) {
        self.millis.fetch_add(delta.num_milliseconds(), Ordering::SeqCst);
    }

    /// Epoch milliseconds of a local wall time in this clock's offset.
    pub fn local_millis(&self, local: NaiveDateTime) -> i64 {
        local_to_millis(local, self.offset)
    }
}

fn local_to_millis(local: NaiveDateTime, offset: FixedOffset) -> i64 {
    let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    utc.and_utc().timestamp_millis()
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }

    fn to_local(&self, millis: i64) -> Option<NaiveDateTime> {
        // Checked: near the ends of chrono's range the local time may not exist
        DateTime::from_timestamp_millis(millis)?
            .naive_utc()
            .checked_add_offset(self.offset)
    }
}
