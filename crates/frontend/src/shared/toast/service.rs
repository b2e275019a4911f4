use super::ledger::ToastLedger;
use super::queue::{Toast, ToastId, ToastOptions, ToastPosition, ToastSeverity};
use crate::shared::delayed_task::DelayedTask;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Process-wide toast list plus one expiry timer per timed toast.
#[derive(Clone, Copy)]
pub struct ToastService {
    ledger: RwSignal<ToastLedger<DelayedTask>, LocalStorage>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            ledger: RwSignal::new_local(ToastLedger::new()),
        }
    }

    /// Shows a toast; returns `None` only if the service was already disposed.
    pub fn show(
        &self,
        message: impl Into<String>,
        severity: ToastSeverity,
        options: ToastOptions,
    ) -> Option<ToastId> {
        let service = *self;
        let message = message.into();
        let id = self.ledger.try_update(|ledger| {
            ledger.show(message, severity, options, |id, delay| {
                DelayedTask::new(delay, move || {
                    // Leave the timer callback before its handle is dropped.
                    spawn_local(async move { service.expire(id) });
                })
            })
        })?;
        log::debug!("{id} shown ({severity:?})");
        Some(id)
    }

    pub fn success(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, ToastSeverity::Success, ToastOptions::default())
    }

    pub fn error(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, ToastSeverity::Error, ToastOptions::default())
    }

    pub fn warning(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, ToastSeverity::Warning, ToastOptions::default())
    }

    pub fn info(&self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, ToastSeverity::Info, ToastOptions::default())
    }

    /// Removes a toast and cancels its pending timer. Unknown ids are ignored.
    pub fn remove(&self, id: ToastId) {
        if let Some(Some(_)) = self.ledger.try_update(|ledger| ledger.dismiss(id)) {
            log::debug!("{id} dismissed");
        }
    }

    fn expire(&self, id: ToastId) {
        if let Some(Some(_)) = self.ledger.try_update(|ledger| ledger.fire(id)) {
            log::debug!("{id} expired");
        }
    }

    pub fn clear(&self) {
        self.ledger.try_update(|ledger| ledger.clear());
    }

    /// Positions currently in use (tracked).
    pub fn positions(&self) -> Vec<ToastPosition> {
        self.ledger
            .with(|ledger| ledger.queue().grouped().into_iter().map(|(p, _)| p).collect())
    }

    /// Toasts anchored at `position`, oldest first (tracked).
    pub fn stack(&self, position: ToastPosition) -> Vec<Toast> {
        self.ledger.with(|ledger| {
            ledger
                .queue()
                .iter()
                .filter(|t| t.position == position)
                .cloned()
                .collect()
        })
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the toast service of the enclosing [`super::ToastProvider`].
///
/// Panics when called outside of it: a toast raised there would never be
/// rendered.
pub fn use_toast() -> ToastService {
    use_context::<ToastService>()
        .expect("use_toast() called outside <ToastProvider>; wrap the app root in <ToastProvider>")
}
