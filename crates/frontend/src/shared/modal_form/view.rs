use super::form_state::{FieldValue, FormSession, FormState};
use crate::shared::icons::icon;
use crate::shared::modal_frame::{ModalFrame, ModalSize};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const FOCUSABLE: &str = "input:not([disabled]):not([type='hidden']), select:not([disabled]), \
     textarea:not([disabled]), button:not([disabled]), [href], [tabindex]:not([tabindex='-1'])";

/// Access to the form state of an open [`ModalForm`], handed to its render callback.
#[derive(Clone, Copy)]
pub struct FormHandle {
    session: RwSignal<FormSession>,
}

impl FormHandle {
    /// Current text of a field (tracked).
    pub fn text(&self, name: &'static str) -> String {
        self.session.with(|s| s.values().text(name))
    }

    /// Current boolean value of a field (tracked).
    pub fn checked(&self, name: &'static str) -> bool {
        self.session.with(|s| s.values().flag(name))
    }

    pub fn set(&self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        self.session.update(|s| s.change(name, value));
    }

    /// Snapshot of all values.
    pub fn values(&self) -> FormState {
        self.session.with_untracked(|s| s.values().clone())
    }

    /// Generic `input`/`change` handler: reads the target's `name` and value,
    /// coercing by input type.
    pub fn on_change(&self, ev: &ev::Event) {
        if let Some((name, value)) = read_field(ev) {
            self.set(&name, value);
        }
    }
}

fn read_field(ev: &ev::Event) -> Option<(String, FieldValue)> {
    let target = ev.target()?;
    let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (
            input.name(),
            FieldValue::from_input(&input.type_(), input.value(), input.checked()),
        )
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        (select.name(), FieldValue::Text(select.value()))
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        (area.name(), FieldValue::Text(area.value()))
    } else {
        return None;
    };
    (!name.is_empty()).then_some((name, value))
}

fn focus_first(dialog: NodeRef<html::Div>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        let Some(surface) = dialog.get_untracked() else {
            return;
        };
        let first = surface
            .query_selector(FOCUSABLE)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        match first {
            Some(el) => {
                let _ = el.focus();
            }
            None => {
                let _ = surface.focus();
            }
        }
    });
}

/// Dialog owning a controlled key/value form.
///
/// The form state is reset to `initial_values` each time the modal opens.
/// Submitting prevents navigation and hands the whole state to `on_submit`;
/// validation and network I/O stay with the caller. Close button, Escape and
/// (when enabled) an outside click all call `on_close`.
#[component]
pub fn ModalForm(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    #[prop(optional, into)] initial_values: Signal<FormState>,
    #[prop(optional)] on_submit: Option<Callback<FormState>>,
    /// Close on a click outside the dialog (default: false).
    #[prop(optional)]
    close_on_outside_click: Option<bool>,
    /// Wrap the body in a `<form>` with Cancel/Submit buttons (default: true).
    #[prop(optional)]
    is_form: Option<bool>,
    #[prop(optional)] size: ModalSize,
    #[prop(optional, into)] submit_label: MaybeProp<String>,
    /// Disables the submit button while the caller's request is in flight.
    #[prop(optional, into)]
    busy: Signal<bool>,
    /// Body built from the live form state.
    #[prop(optional)]
    render: Option<Callback<FormHandle, AnyView>>,
    /// Static body, used when no `render` callback is given.
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let close_on_outside_click = close_on_outside_click.unwrap_or(false);
    let is_form = is_form.unwrap_or(true);
    let session = RwSignal::new(FormSession::new());
    let form = FormHandle { session };
    let dialog_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let open = is_open.get();
        let opened = session
            .try_update(|s| s.sync_open(open, &initial_values.get_untracked()))
            .unwrap_or(false);
        if opened {
            focus_first(dialog_ref);
        }
    });

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && is_open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(on_submit) = on_submit {
            on_submit.run(form.values());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            {
                let body = match render {
                    Some(render) => render.run(form),
                    None => children.as_ref().map(|c| c()).unwrap_or_else(|| ().into_any()),
                };
                let header = view! {
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button
                            type="button"
                            class="button button--icon modal__close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            {icon("x")}
                        </button>
                    </div>
                };
                let content = if is_form {
                    view! {
                        <form class="modal-form" on:submit=handle_submit>
                            <div class="modal-body">{body}</div>
                            <div class="modal-footer">
                                <button
                                    type="button"
                                    class="button button--secondary"
                                    on:click=move |_| on_close.run(())
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || busy.get()
                                >
                                    {move || {
                                        if busy.get() {
                                            "Saving...".to_string()
                                        } else {
                                            submit_label.get().unwrap_or_else(|| "Save".to_string())
                                        }
                                    }}
                                </button>
                            </div>
                        </form>
                    }
                    .into_any()
                } else {
                    view! { <div class="modal-body">{body}</div> }.into_any()
                };

                view! {
                    <ModalFrame
                        on_close=on_close
                        close_on_overlay=close_on_outside_click
                        size=size
                        node_ref=dialog_ref
                        label=title.get_untracked()
                    >
                        {header}
                        {content}
                    </ModalFrame>
                }
            }
        </Show>
    }
}

/// Confirmation step in front of every destructive action.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeProp<String>,
    #[prop(optional, into)] busy: Signal<bool>,
) -> impl IntoView {
    let render = Callback::new(move |_: FormHandle| {
        view! {
            <p class="confirm-dialog__message">{move || message.get()}</p>
            <div class="modal-footer">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="button button--danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {move || confirm_label.get().unwrap_or_else(|| "Delete".to_string())}
                </button>
            </div>
        }
        .into_any()
    });

    view! {
        <ModalForm
            is_open=is_open
            title=title
            on_close=on_cancel
            is_form=false
            close_on_outside_click=true
            size=ModalSize::Small
            render=render
        />
    }
}
