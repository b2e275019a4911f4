use contracts::domain::a001_stream::aggregate::Stream;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::details::{self, StreamFields};
use crate::domain::a001_stream::api;
use crate::shared::components::ui::FieldError;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_form::{ConfirmDialog, FormHandle, FormState, ModalForm};
use crate::shared::modal_frame::ModalSize;
use crate::shared::screen_state::{after_write, finish_write, load_list, ListState, ModalState};
use crate::shared::toast::use_toast;

#[component]
pub fn StreamList() -> impl IntoView {
    let toasts = use_toast();
    let list = RwSignal::new(ListState::<Stream>::new());
    let modal = RwSignal::new(ModalState::<Stream>::Closed);
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let fetch = move || {
        load_list(
            list,
            toasts,
            "streams",
            "Failed to fetch streams",
            api::fetch_streams(),
        )
    };

    let close = Callback::new(move |_| {
        form_error.set(None);
        modal.set(ModalState::Closed);
    });

    let submit = Callback::new(move |values: FormState| {
        let dto = details::to_dto(&values);
        if let Err(message) = dto.validate() {
            form_error.set(Some(message.clone()));
            toasts.error(message);
            return;
        }
        form_error.set(None);
        let editing = modal.with_untracked(|m| m.editing().map(|s| s.id));
        saving.set(true);
        spawn_local(async move {
            let (result, success) = match editing {
                Some(id) => (api::update_stream(id, &dto).await, "Stream updated"),
                None => (api::add_stream(&dto).await, "Stream added"),
            };
            saving.try_set(false);
            let outcome = after_write(&result, success, "Failed to save stream");
            finish_write(outcome, modal, toasts, fetch);
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(stream) = modal.try_update(|m| m.confirm_delete()).flatten() else {
            return;
        };
        saving.set(true);
        spawn_local(async move {
            let result = api::delete_stream(stream.id).await;
            saving.try_set(false);
            let outcome = after_write(&result, "Stream deleted", "Failed to delete stream");
            finish_write(outcome, modal, toasts, fetch);
        });
    });

    fetch();

    let is_loading = Signal::derive(move || list.with(ListState::is_loading));
    let form_open = Signal::derive(move || modal.with(ModalState::is_form_open));
    let form_title = Signal::derive(move || {
        if modal.with(ModalState::is_adding) {
            "Add stream".to_string()
        } else {
            "Edit stream".to_string()
        }
    });
    let initial = Signal::derive(move || modal.with(|m| details::initial_values(m.editing())));
    let deleting = Signal::derive(move || modal.with(|m| m.deleting().is_some()));
    let delete_message = Signal::derive(move || {
        modal.with(|m| {
            m.deleting()
                .map(|s| format!("Delete stream \"{}\"? Students in it keep their records.", s.stream_name))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="page">
            <PageHeader title="Streams" subtitle="Class streams shared by every form">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=is_loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        form_error.set(None);
                        modal.set(ModalState::Adding);
                    }
                >
                    {icon("plus")}
                    " Add stream"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show when=move || list.with(|l| l.is_loading() && l.rows().is_empty())>
                    <Spinner label="Loading streams..." />
                </Show>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=60.0>"#"</TableHeaderCell>
                            <TableHeaderCell>"Stream name"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || list.with(|l| l.rows().iter().cloned().enumerate().collect::<Vec<_>>())
                            key=|(idx, stream)| (*idx, stream.id, stream.stream_name.clone())
                            children=move |(idx, stream)| {
                                let to_edit = stream.clone();
                                let to_delete = stream.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{idx + 1}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{stream.stream_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| {
                                                        form_error.set(None);
                                                        modal.set(ModalState::Editing(to_edit.clone()));
                                                    }
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| modal.set(ModalState::ConfirmingDelete(to_delete.clone()))
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || list.with(ListState::is_empty)>
                    <div class="empty-state">"No streams yet. Add the first one."</div>
                </Show>
            </div>

            <ModalForm
                is_open=form_open
                title=form_title
                initial_values=initial
                on_close=close
                on_submit=submit
                size=ModalSize::Small
                busy=saving
                render=Callback::new(move |form: FormHandle| {
                    view! {
                        <StreamFields form=form />
                        <FieldError message=form_error />
                    }
                    .into_any()
                })
            />

            <ConfirmDialog
                is_open=deleting
                title="Delete stream"
                message=delete_message
                on_confirm=confirm_delete
                on_cancel=close
                busy=saving
            />
        </div>
    }
}
