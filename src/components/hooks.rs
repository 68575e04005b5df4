//! Timer hooks shared by the effect components.
//!
//! Every interval is cleared when its owning component is disposed.

use std::time::Duration;

use leptos::prelude::*;

#[inline]
fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

/// Run `tick` every `ms` milliseconds for the lifetime of the component.
pub fn use_interval(ms: u32, tick: impl Fn() + 'static) {
    if let Some(handle) = start_interval(ms, tick) {
        on_cleanup(move || handle.clear());
    }
}

/// Start an interval the caller stops itself.
///
/// Returns `None` if the browser refused to schedule it.
pub fn start_interval(ms: u32, tick: impl Fn() + 'static) -> Option<IntervalHandle> {
    match set_interval_with_handle(tick, millis(ms)) {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(?e, "setInterval failed");
            None
        }
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    set_timeout(f, millis(ms));
}

/// Interval that can be started and stopped repeatedly, e.g. by a toggle.
#[derive(Clone, Copy)]
pub struct IntervalSlot(StoredValue<Option<IntervalHandle>>);

impl IntervalSlot {
    pub fn new() -> Self {
        let slot = Self(StoredValue::new(None));
        on_cleanup(move || slot.stop());
        slot
    }

    /// Start `tick` unless an interval is already running.
    pub fn start(&self, ms: u32, tick: impl Fn() + 'static) {
        if self.0.try_with_value(Option::is_some).unwrap_or(true) {
            return;
        }
        // the owner may have been disposed while a timeout was pending
        if let Some(Some(orphan)) = self.0.try_set_value(start_interval(ms, tick)) {
            orphan.clear();
        }
    }

    pub fn stop(&self) {
        if let Some(handle) = self.0.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}
