use contracts::domain::a004_remark::aggregate::{Remark, RemarkAuthor, RemarkQuery};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::details::{self, RemarkFields};
use crate::domain::a004_remark::api;
use crate::shared::components::ui::{FieldError, RadioGroup};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_form::{FormHandle, FormState, ModalForm};
use crate::shared::modal_frame::ModalSize;
use crate::shared::options;
use crate::shared::screen_state::{after_write, finish_write, load_list, ListState, ModalState};
use crate::shared::toast::use_toast;

#[component]
pub fn RemarkList() -> impl IntoView {
    let toasts = use_toast();
    let list = RwSignal::new(ListState::<Remark>::new());
    let modal = RwSignal::new(ModalState::<Remark>::Closed);
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let author = RwSignal::new(RemarkAuthor::default());

    let fetch = move || {
        load_list(
            list,
            toasts,
            "remarks",
            "Failed to fetch remarks",
            api::fetch_remarks(RemarkQuery {
                remark_type: author.get_untracked(),
            }),
        )
    };

    Effect::new(move |_| {
        author.track();
        fetch();
    });

    let close = Callback::new(move |_| {
        form_error.set(None);
        modal.set(ModalState::Closed);
    });

    let submit = Callback::new(move |values: FormState| {
        let Some(remark) = modal.with_untracked(|m| m.editing().cloned()) else {
            return;
        };
        let dto = details::to_dto(&remark, &values);
        if let Err(message) = dto.validate() {
            form_error.set(Some(message.clone()));
            toasts.error(message);
            return;
        }
        form_error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = api::update_remark(remark.id, &dto).await;
            saving.try_set(false);
            let outcome = after_write(&result, "Remark updated", "Failed to update remark");
            finish_write(outcome, modal, toasts, fetch);
        });
    });

    let form_open = Signal::derive(move || modal.with(ModalState::is_form_open));
    let form_title = Signal::derive(move || modal.with(|m| details::edit_title(m.editing())));
    let initial = Signal::derive(move || modal.with(|m| details::initial_values(m.editing())));

    view! {
        <div class="page">
            <PageHeader title="Remarks" subtitle="Report form comments per mean grade">
                <RadioGroup
                    name="remark-author"
                    value=Signal::derive(move || author.get().as_str().to_string())
                    options=options::remark_author_options()
                    on_change=Callback::new(move |v: String| {
                        if let Some(parsed) = RemarkAuthor::parse(&v) {
                            author.set(parsed);
                        }
                    })
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || list.with(ListState::is_loading))
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show when=move || list.with(|l| l.is_loading() && l.rows().is_empty())>
                    <Spinner label="Loading remarks..." />
                </Show>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=80.0>"Grade"</TableHeaderCell>
                            <TableHeaderCell>"Remark"</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>"Edit"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || list.with(|l| l.rows().to_vec())
                            key=|r| (r.id, r.remark.clone(), r.remark_type)
                            children=move |remark| {
                                let to_edit = remark.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge appearance=BadgeAppearance::Outline>{remark.grade.clone()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{remark.remark.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
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
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || list.with(ListState::is_empty)>
                    <div class="empty-state">"No remarks configured for this author."</div>
                </Show>
            </div>

            <ModalForm
                is_open=form_open
                title=form_title
                initial_values=initial
                on_close=close
                on_submit=submit
                size=ModalSize::Medium
                busy=saving
                render=Callback::new(move |form: FormHandle| {
                    view! {
                        <RemarkFields form=form />
                        <FieldError message=form_error />
                    }
                    .into_any()
                })
            />
        </div>
    }
}
