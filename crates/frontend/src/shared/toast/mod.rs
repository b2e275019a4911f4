//! Transient notifications grouped by screen anchor.

mod ledger;
mod queue;
mod service;
mod view;

pub use ledger::{ExpiryTimer, ToastLedger};
pub use queue::{
    Toast, ToastId, ToastOptions, ToastPosition, ToastQueue, ToastSeverity, DEFAULT_DURATION_MS,
};
pub use service::{use_toast, ToastService};
pub use view::{ToastHost, ToastProvider};
