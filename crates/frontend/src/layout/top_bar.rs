use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Application top bar: sidebar toggle, brand and the active screen's name.
#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    type="button"
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"School Admin"</span>
            </div>
            <div class="top-header__section">{move || ctx.active.get().label()}</div>
        </header>
    }
}
