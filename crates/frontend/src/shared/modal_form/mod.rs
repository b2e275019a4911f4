//! Controlled modal forms.

mod form_state;
mod view;

pub use form_state::{FieldValue, FormSession, FormState};
pub use view::{ConfirmDialog, FormHandle, ModalForm};
