//! Data-fetch and modal lifecycle shared by every screen.
//!
//! A screen owns one `RwSignal<ListState<T>>` and one
//! `RwSignal<ModalState<T>>`. Loads go through [`load_list`], writes through
//! [`after_write`] / [`finish_write`].

use std::future::Future;

use contracts::shared::api_message::ApiMessage;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api_error::ApiError;
use super::toast::ToastService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Identifies one load request; only the most recent ticket may resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct ListState<T> {
    rows: Vec<T>,
    phase: LoadPhase,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            phase: LoadPhase::Idle,
            error: None,
            generation: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load, superseding any request still in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        LoadTicket(self.generation)
    }

    /// Applies a response. Returns `false` (and changes nothing) when the
    /// ticket was superseded. Failures keep the rows already shown.
    pub fn resolve(&mut self, ticket: LoadTicket, result: Result<Vec<T>, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
                self.phase = LoadPhase::Loaded;
            }
            Err(message) => {
                self.error = Some(message);
                self.phase = LoadPhase::Failed;
            }
        }
        true
    }

    /// Forgets rows belonging to a previous query and supersedes any
    /// request still in flight for it.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.rows.clear();
        self.error = None;
        self.phase = LoadPhase::Idle;
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Loaded successfully with nothing to show.
    pub fn is_empty(&self) -> bool {
        self.phase == LoadPhase::Loaded && self.rows.is_empty()
    }
}

/// Runs `fetch` for a screen's list. Responses arriving after the screen is
/// disposed, or after a newer load started, are dropped. Failures become an
/// error toast with the server's message or `fallback`.
pub fn load_list<T, F>(
    state: RwSignal<ListState<T>>,
    toasts: ToastService,
    screen: &'static str,
    fallback: &'static str,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some(ticket) = state.try_update(|s| s.begin()) else {
        return;
    };
    spawn_local(async move {
        let result = fetch.await.map_err(|e| {
            log::warn!("{screen}: load failed: {e}");
            e.user_message(fallback)
        });
        let failure = result.as_ref().err().cloned();
        let applied = state
            .try_update(|s| s.resolve(ticket, result))
            .unwrap_or(false);
        if let (true, Some(message)) = (applied, failure) {
            toasts.error(message);
        }
    });
}

/// Which modal a screen shows; at most one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Adding,
    Editing(T),
    Viewing(T),
    ConfirmingDelete(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    pub fn is_closed(&self) -> bool {
        matches!(self, ModalState::Closed)
    }

    pub fn is_adding(&self) -> bool {
        matches!(self, ModalState::Adding)
    }

    /// Add or edit form is showing.
    pub fn is_form_open(&self) -> bool {
        matches!(self, ModalState::Adding | ModalState::Editing(_))
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            ModalState::Editing(record) => Some(record),
            _ => None,
        }
    }

    pub fn viewing(&self) -> Option<&T> {
        match self {
            ModalState::Viewing(record) => Some(record),
            _ => None,
        }
    }

    pub fn deleting(&self) -> Option<&T> {
        match self {
            ModalState::ConfirmingDelete(record) => Some(record),
            _ => None,
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Consumes a pending delete confirmation. Yields the record only from
    /// `ConfirmingDelete`; any other state is left untouched.
    pub fn confirm_delete(&mut self) -> Option<T> {
        match std::mem::take(self) {
            ModalState::ConfirmingDelete(record) => Some(record),
            other => {
                *self = other;
                None
            }
        }
    }
}

/// What a screen does after a create/update/delete request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterWrite {
    /// Close the modal, refetch the list and show a success toast.
    Refetch { toast: String },
    /// Keep the modal open and show an error toast.
    Stay { toast: String },
}

pub fn after_write(result: &Result<ApiMessage, ApiError>, success: &str, fallback: &str) -> AfterWrite {
    match result {
        Ok(ack) => AfterWrite::Refetch {
            toast: ack.text().unwrap_or(success).to_string(),
        },
        Err(err) => AfterWrite::Stay {
            toast: err.user_message(fallback),
        },
    }
}

/// Applies [`after_write`] to a screen's modal, toasts and list.
pub fn finish_write<T>(
    outcome: AfterWrite,
    modal: RwSignal<ModalState<T>>,
    toasts: ToastService,
    refetch: impl FnOnce(),
) where
    T: Send + Sync + 'static,
{
    match outcome {
        AfterWrite::Refetch { toast } => {
            modal.try_update(|m| m.close());
            toasts.success(toast);
            refetch();
        }
        AfterWrite::Stay { toast } => {
            toasts.error(toast);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_success_replaces_rows() {
        let mut state = ListState::new();
        let ticket = state.begin();
        assert!(state.is_loading());
        assert!(state.resolve(ticket, Ok(vec![1, 2, 3])));
        assert_eq!(state.rows(), &[1, 2, 3]);
        assert_eq!(state.phase(), LoadPhase::Loaded);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut state = ListState::new();
        let first = state.begin();
        state.resolve(first, Ok(vec!["North"]));
        let second = state.begin();
        state.resolve(second, Err("Failed to fetch streams".into()));
        assert_eq!(state.rows(), &["North"]);
        assert_eq!(state.phase(), LoadPhase::Failed);
        assert_eq!(state.error(), Some("Failed to fetch streams"));
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = ListState::new();
        let form_one = state.begin();
        let form_two = state.begin();
        assert!(state.resolve(form_two, Ok(vec!["form 2"])));
        assert!(!state.resolve(form_one, Ok(vec!["form 1"])));
        assert_eq!(state.rows(), &["form 2"]);
    }

    #[test]
    fn reset_drops_rows_of_previous_query() {
        let mut state = ListState::new();
        let gallery = state.begin();
        state.resolve(gallery, Ok(vec!["assembly.jpg"]));
        let in_flight = state.begin();
        state.reset();
        assert!(state.rows().is_empty());
        assert_eq!(state.phase(), LoadPhase::Idle);
        assert!(!state.resolve(in_flight, Ok(vec!["old.jpg"])));

        let events = state.begin();
        state.resolve(events, Err("Failed to fetch photos".into()));
        assert!(state.rows().is_empty());
        assert_eq!(state.error(), Some("Failed to fetch photos"));
    }

    #[test]
    fn empty_only_after_successful_load() {
        let mut state: ListState<u8> = ListState::new();
        assert!(!state.is_empty());
        let ticket = state.begin();
        state.resolve(ticket, Ok(vec![]));
        assert!(state.is_empty());
    }

    #[test]
    fn confirm_delete_yields_record_once() {
        let mut modal = ModalState::ConfirmingDelete(7);
        assert_eq!(modal.confirm_delete(), Some(7));
        assert!(modal.is_closed());
        assert_eq!(modal.confirm_delete(), None);
    }

    #[test]
    fn confirm_delete_from_other_state_changes_nothing() {
        let mut modal = ModalState::Editing(3);
        assert_eq!(modal.confirm_delete(), None);
        assert_eq!(modal.editing(), Some(&3));
    }

    #[test]
    fn form_open_covers_add_and_edit() {
        assert!(ModalState::<u8>::Adding.is_form_open());
        assert!(ModalState::Editing(1).is_form_open());
        assert!(!ModalState::Viewing(1).is_form_open());
        assert!(!ModalState::ConfirmingDelete(1).is_form_open());
    }

    #[test]
    fn successful_write_refetches_with_server_message() {
        let ok = Ok(ApiMessage {
            message: "Stream added".into(),
        });
        assert_eq!(
            after_write(&ok, "Saved", "Failed"),
            AfterWrite::Refetch {
                toast: "Stream added".into()
            }
        );
        let blank = Ok(ApiMessage::default());
        assert_eq!(
            after_write(&blank, "Saved", "Failed"),
            AfterWrite::Refetch {
                toast: "Saved".into()
            }
        );
    }

    #[test]
    fn failed_write_stays_open() {
        let err = Err(ApiError::Server {
            status: 500,
            message: None,
        });
        assert_eq!(
            after_write(&err, "Saved", "Failed to add stream"),
            AfterWrite::Stay {
                toast: "Failed to add stream".into()
            }
        );
    }
}
