use contracts::domain::a001_stream::aggregate::Stream;
use contracts::domain::a003_staff::aggregate::{Teacher, TeacherQuery};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::details::{self, TeacherFields};
use crate::domain::a001_stream::api as stream_api;
use crate::domain::a003_staff::api;
use crate::shared::components::ui::FieldError;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_any, filter_list, SearchInput, Searchable};
use crate::shared::modal_form::{ConfirmDialog, FormHandle, FormState, ModalForm};
use crate::shared::modal_frame::ModalSize;
use crate::shared::options::name_options;
use crate::shared::screen_state::{after_write, finish_write, load_list, ListState, ModalState};
use crate::shared::toast::use_toast;

impl Searchable for Teacher {
    fn matches_filter(&self, query: &str) -> bool {
        contains_any([self.name.as_str(), self.initials.as_str()], query)
            || contains_any(self.subjects.iter().map(String::as_str), query)
    }
}

#[component]
pub fn StaffList() -> impl IntoView {
    let toasts = use_toast();
    let list = RwSignal::new(ListState::<Teacher>::new());
    let streams = RwSignal::new(ListState::<Stream>::new());
    let modal = RwSignal::new(ModalState::<Teacher>::Closed);
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    let fetch = move || {
        load_list(
            list,
            toasts,
            "staff",
            "Failed to fetch staff",
            api::fetch_teachers(TeacherQuery::default()),
        )
    };
    fetch();
    load_list(
        streams,
        toasts,
        "staff",
        "Failed to fetch streams",
        stream_api::fetch_streams(),
    );

    let stream_choices = Signal::derive(move || {
        streams.with(|s| name_options(s.rows().iter().map(|st| st.stream_name.as_str())))
    });
    let visible = Memo::new(move |_| list.with(|l| filter_list(l.rows(), &search.get())));

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
        let editing = modal.with_untracked(|m| m.editing().map(|t| t.id));
        saving.set(true);
        spawn_local(async move {
            let (result, success) = match editing {
                Some(id) => (api::update_teacher(id, &dto).await, "Staff member updated"),
                None => (api::add_teacher(&dto).await, "Staff member added"),
            };
            saving.try_set(false);
            let outcome = after_write(&result, success, "Failed to save staff member");
            finish_write(outcome, modal, toasts, fetch);
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(teacher) = modal.try_update(|m| m.confirm_delete()).flatten() else {
            return;
        };
        saving.set(true);
        spawn_local(async move {
            let result = api::delete_teacher(teacher.id).await;
            saving.try_set(false);
            let outcome = after_write(&result, "Staff member deleted", "Failed to delete staff member");
            finish_write(outcome, modal, toasts, fetch);
        });
    });

    let form_open = Signal::derive(move || modal.with(ModalState::is_form_open));
    let form_title = Signal::derive(move || {
        if modal.with(ModalState::is_adding) {
            "Add staff member".to_string()
        } else {
            "Edit staff member".to_string()
        }
    });
    let initial = Signal::derive(move || modal.with(|m| details::initial_values(m.editing())));
    let deleting = Signal::derive(move || modal.with(|m| m.deleting().is_some()));
    let delete_message = Signal::derive(move || {
        modal.with(|m| {
            m.deleting()
                .map(|t| format!("Remove {} from the staff list?", t.name))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="page">
            <PageHeader title="Staff">
                <SearchInput
                    value=search
                    placeholder="Name, initials or subject"
                    on_change=Callback::new(move |v: String| search.set(v))
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || list.with(ListState::is_loading))
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
                    " Add staff"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show when=move || list.with(|l| l.is_loading() && l.rows().is_empty())>
                    <Spinner label="Loading staff..." />
                </Show>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>"Initials"</TableHeaderCell>
                            <TableHeaderCell>"Phone"</TableHeaderCell>
                            <TableHeaderCell>"Subjects"</TableHeaderCell>
                            <TableHeaderCell>"Class teacher"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|t| (t.id, t.name.clone(), t.initials.clone(), t.class_label())
                            children=move |teacher| {
                                let to_edit = teacher.clone();
                                let to_delete = teacher.clone();
                                let class_label = teacher.class_label();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{teacher.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{teacher.initials.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{teacher.phone.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{teacher.subjects.join(", ")}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {class_label.map(|label| view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{label}</Badge>
                                                })}
                                            </TableCellLayout>
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
                    <div class="empty-state">"No staff members yet."</div>
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
                        <TeacherFields form=form streams=stream_choices />
                        <FieldError message=form_error />
                    }
                    .into_any()
                })
            />

            <ConfirmDialog
                is_open=deleting
                title="Remove staff member"
                message=delete_message
                confirm_label="Remove"
                on_confirm=confirm_delete
                on_cancel=close
                busy=saving
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_covers_subjects() {
        let teacher = Teacher {
            id: 1,
            name: "Grace Wambui".into(),
            initials: "GW".into(),
            phone: None,
            email: None,
            subjects: vec!["Chemistry".into()],
            is_class_teacher: false,
            class_form: None,
            class_stream: None,
        };
        assert!(teacher.matches_filter("chem"));
        assert!(teacher.matches_filter("gw"));
        assert!(!teacher.matches_filter("physics"));
    }
}
