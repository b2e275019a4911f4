use super::queue::Toast;
use super::service::{use_toast, ToastService};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Provides the [`ToastService`] to `children` and renders the toast stacks.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastService::new());

    view! {
        {children()}
        <ToastHost />
    }
}

/// One fixed stack per screen anchor in use.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <For
            each=move || service.positions()
            key=|position| *position
            children=move |position| {
                view! {
                    <div class=format!("toast-stack {}", position.css_class())>
                        <For
                            each=move || service.stack(position)
                            key=|toast| toast.id
                            children=move |toast| view! { <ToastItem toast=toast service=service /> }
                        />
                    </div>
                }
            }
        />
    }
}

#[component]
fn ToastItem(toast: Toast, service: ToastService) -> impl IntoView {
    let id = toast.id;
    let severity = toast.severity;

    view! {
        <div
            id=id.to_string()
            class=format!("toast {}", severity.css_class())
            role="status"
            aria-live=severity.aria_live()
        >
            <span class="toast__icon">{icon(severity.icon_name())}</span>
            <div class="toast__body">
                {toast.title.map(|title| view! { <div class="toast__title">{title}</div> })}
                <div class="toast__message">{toast.message}</div>
            </div>
            {toast.dismissible.then(|| view! {
                <button
                    type="button"
                    class="toast__close"
                    aria-label="Dismiss"
                    on:click=move |_| service.remove(id)
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
