use contracts::domain::a006_particulars::aggregate::SchoolParticulars;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::details::{self, ParticularsFields};
use crate::domain::a006_particulars::api;
use crate::shared::api_utils::asset_url;
use crate::shared::components::ui::FieldError;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_form::{FormHandle, FormState, ModalForm};
use crate::shared::modal_frame::ModalSize;
use crate::shared::screen_state::{after_write, finish_write, load_list, ListState, ModalState};
use crate::shared::toast::use_toast;

/// Single-record screen; the list state holds at most one row.
#[component]
pub fn ParticularsView() -> impl IntoView {
    let toasts = use_toast();
    let record = RwSignal::new(ListState::<SchoolParticulars>::new());
    let modal = RwSignal::new(ModalState::<SchoolParticulars>::Closed);
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let fetch = move || {
        load_list(
            record,
            toasts,
            "particulars",
            "Failed to fetch school particulars",
            async { api::fetch_particulars().await.map(|p| vec![p]) },
        )
    };
    fetch();

    let current = Signal::derive(move || record.with(|r| r.rows().first().cloned()));

    let close = Callback::new(move |_| {
        form_error.set(None);
        modal.set(ModalState::Closed);
    });

    let submit = Callback::new(move |values: FormState| {
        let Some(stored) = modal.with_untracked(|m| m.editing().cloned()) else {
            return;
        };
        let updated = match details::apply(&stored, &values) {
            Ok(updated) => updated,
            Err(message) => {
                form_error.set(Some(message.clone()));
                toasts.error(message);
                return;
            }
        };
        form_error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = api::update_particulars(&updated).await;
            saving.try_set(false);
            let outcome = after_write(&result, "School particulars saved", "Failed to save school particulars");
            finish_write(outcome, modal, toasts, fetch);
        });
    });

    let form_open = Signal::derive(move || modal.with(ModalState::is_form_open));
    let initial = Signal::derive(move || {
        modal.with(|m| m.editing().map(details::initial_values).unwrap_or_default())
    });

    let row = |label: &'static str, value: String| {
        let value = if value.trim().is_empty() { "\u{2014}".to_string() } else { value };
        view! {
            <dt class="details-list__label">{label}</dt>
            <dd class="details-list__value">{value}</dd>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="School particulars" subtitle="Printed on report forms">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || record.with(ListState::is_loading))
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || current.with(Option::is_none))
                    on_click=move |_| {
                        if let Some(p) = current.get_untracked() {
                            form_error.set(None);
                            modal.set(ModalState::Editing(p));
                        }
                    }
                >
                    {icon("edit")}
                    " Edit"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || match current.get() {
                    Some(p) => view! {
                        <div class="card particulars-card">
                            {p.logo.as_deref().map(|logo| view! {
                                <img class="particulars-card__logo" src=asset_url(logo) alt="School logo" />
                            })}
                            <dl class="details-list">
                                {row("School name", p.school_name.clone())}
                                {row("Motto", p.motto.clone())}
                                {row("Postal address", p.postal_address.clone())}
                                {row("Phone", p.phone.clone())}
                                {row("Email", p.email.clone())}
                                {row("Principal", p.principal.clone())}
                                {row("Current term", format!("Term {}", p.current_term))}
                                {row("Current year", p.current_year.to_string())}
                            </dl>
                        </div>
                    }
                    .into_any(),
                    None if record.with(ListState::is_loading) => view! { <Spinner label="Loading..." /> }.into_any(),
                    None => view! { <div class="empty-state">"School particulars are not available."</div> }.into_any(),
                }}
            </div>

            <ModalForm
                is_open=form_open
                title="Edit school particulars"
                initial_values=initial
                on_close=close
                on_submit=submit
                size=ModalSize::Large
                busy=saving
                render=Callback::new(move |form: FormHandle| {
                    view! {
                        <ParticularsFields form=form />
                        <FieldError message=form_error />
                    }
                    .into_any()
                })
            />
        </div>
    }
}
