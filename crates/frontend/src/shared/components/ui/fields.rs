//! Inputs bound to an open [`ModalForm`](crate::shared::modal_form::ModalForm).
//!
//! Each field carries a `name` attribute and forwards its events to
//! [`FormHandle::on_change`], so the form state stays the single source of
//! truth.

use crate::shared::modal_form::FormHandle;
use leptos::prelude::*;

fn field_id(name: &str) -> String {
    format!("field-{name}")
}

#[component]
pub fn TextField(
    form: FormHandle,
    name: &'static str,
    #[prop(into)] label: String,
    /// `text` (default), `number`, `email`, `tel`, `date`, ...
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    let id = field_id(name);
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
                {required.then_some(view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                id=id
                class="form__input"
                name=name
                type=input_type.unwrap_or("text")
                step=step
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || form.text(name)
                on:input=move |ev| form.on_change(&ev)
            />
        </div>
    }
}

#[component]
pub fn TextareaField(
    form: FormHandle,
    name: &'static str,
    #[prop(into)] label: String,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field_id(name);
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
                {required.then_some(view! { <span class="form__required">" *"</span> })}
            </label>
            <textarea
                id=id
                class="form__textarea"
                name=name
                rows=rows.unwrap_or(4)
                prop:value=move || form.text(name)
                on:input=move |ev| form.on_change(&ev)
            />
        </div>
    }
}

#[component]
pub fn SelectField(
    form: FormHandle,
    name: &'static str,
    #[prop(into)] label: String,
    /// `(value, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field_id(name);
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
                {required.then_some(view! { <span class="form__required">" *"</span> })}
            </label>
            <select
                id=id
                class="form__select"
                name=name
                prop:value=move || form.text(name)
                on:change=move |ev| form.on_change(&ev)
            >
                <option value="">"Select..."</option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || form.text(name) == current>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[component]
pub fn CheckboxField(form: FormHandle, name: &'static str, #[prop(into)] label: String) -> impl IntoView {
    let id = field_id(name);
    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id.clone()
                type="checkbox"
                class="form__checkbox"
                name=name
                prop:checked=move || form.checked(name)
                on:change=move |ev| form.on_change(&ev)
            />
            <label class="form__checkbox-label" for=id>{label}</label>
        </div>
    }
}

/// Inline validation message; renders nothing while `message` is `None`.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <div class="form__error" role="alert">{text}</div> })
    }
}
