//! Cancelable one-shot timers.
//!
//! Every deferred callback in the dashboard (toast expiry, request timeout,
//! image-load timeout) goes through [`DelayedTask`], so a pending callback is
//! always owned by exactly one handle and dies with it.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// A callback scheduled to run once after a delay.
///
/// Dropping the handle or calling [`DelayedTask::cancel`] guarantees the
/// callback never runs.
#[must_use = "dropping a DelayedTask cancels it"]
pub struct DelayedTask {
    timeout: Option<Timeout>,
}

impl DelayedTask {
    pub fn new(delay_ms: u32, f: impl FnOnce() + 'static) -> Self {
        Self {
            timeout: Some(Timeout::new(delay_ms, f)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(timeout) = self.timeout.take() {
            let _ = timeout.cancel();
        }
    }
}

impl std::fmt::Debug for DelayedTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelayedTask")
            .field("pending", &self.timeout.is_some())
            .finish()
    }
}

/// Holds at most one pending [`DelayedTask`] for a component.
///
/// Scheduling replaces (and cancels) the previous task; the slot cancels its
/// task when the owning component is cleaned up.
#[derive(Clone, Copy)]
pub struct TaskSlot {
    task: StoredValue<Option<DelayedTask>, LocalStorage>,
}

impl TaskSlot {
    pub fn new() -> Self {
        let slot = Self {
            task: StoredValue::new_local(None),
        };
        on_cleanup(move || slot.cancel());
        slot
    }

    pub fn schedule(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let task = DelayedTask::new(delay_ms, f);
        if let Some(Some(previous)) = self.task.try_update_value(|slot| slot.replace(task)) {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(task)) = self.task.try_update_value(|slot| slot.take()) {
            task.cancel();
        }
    }
}

impl Default for TaskSlot {
    fn default() -> Self {
        Self::new()
    }
}
