use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::toast::ToastProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <ToastProvider>
            <Shell />
        </ToastProvider>
    }
}
