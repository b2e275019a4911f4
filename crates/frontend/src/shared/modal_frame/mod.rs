use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Width class of the modal surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

impl ModalSize {
    pub fn css_class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal--sm",
            ModalSize::Medium => "modal--md",
            ModalSize::Large => "modal--lg",
            ModalSize::Full => "modal--full",
        }
    }
}

/// Overlay plus positioned dialog surface. Renders no header of its own.
#[component]
pub fn ModalFrame(
    /// Called when the overlay is clicked and `close_on_overlay` is set.
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    #[prop(optional)]
    size: ModalSize,
    /// Reference to the dialog surface, used for focus management.
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Div>>,
    /// `aria-label` of the dialog.
    #[prop(optional, into)]
    label: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Only a press and a release both on the overlay count as an outside click,
    // so selecting text inside the dialog and releasing outside keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // The overlay is removed by the close; let its own click dispatch finish first.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                node_ref=node_ref
                class=format!("modal {}", size.css_class())
                role="dialog"
                aria-modal="true"
                aria-label=move || label.get().unwrap_or_default()
                tabindex="-1"
            >
                {children()}
            </div>
        </div>
    }
}
