use std::cmp::Ordering;

use contracts::domain::a001_stream::aggregate::Stream;
use contracts::domain::a002_student::aggregate::{ReportFormRequest, Student, StudentQuery};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::details::{self, Placement, StudentFields, StudentProfile};
use crate::domain::a001_stream::api as stream_api;
use crate::domain::a002_student::api;
use crate::shared::components::ui::{FieldError, Select};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_optional_date;
use crate::shared::export::{download_bytes, export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_any, filter_list, sort_list, SearchInput, Searchable, SortState, Sortable,
};
use crate::shared::modal_form::{ConfirmDialog, FormHandle, FormState, ModalForm};
use crate::shared::modal_frame::ModalSize;
use crate::shared::options::{self, name_options};
use crate::shared::screen_state::{after_write, finish_write, load_list, ListState, ModalState};
use crate::shared::toast::use_toast;

impl Searchable for Student {
    fn matches_filter(&self, query: &str) -> bool {
        contains_any(
            [
                self.adm_no.as_str(),
                self.first_name.as_str(),
                self.other_names.as_str(),
            ],
            query,
        )
    }
}

impl Sortable for Student {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.full_name().cmp(&other.full_name()),
            "gender" => self.gender.cmp(&other.gender),
            "stream" => self.stream.cmp(&other.stream),
            "kcpe" => self.kcpe_marks.cmp(&other.kcpe_marks),
            _ => natural_adm_cmp(&self.adm_no, &other.adm_no),
        }
    }
}

/// Numeric admission numbers sort numerically, the rest lexically.
fn natural_adm_cmp(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

impl CsvExportable for Student {
    fn headers() -> Vec<&'static str> {
        vec![
            "Adm No",
            "Name",
            "Gender",
            "Form",
            "Stream",
            "Year",
            "Date of birth",
            "Guardian",
            "Guardian phone",
            "KCPE",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.adm_no.clone(),
            self.full_name(),
            self.gender.clone(),
            self.form.to_string(),
            self.stream.clone(),
            self.year.to_string(),
            format_optional_date(self.date_of_birth.as_ref()),
            self.guardian_name.clone().unwrap_or_default(),
            self.guardian_phone.clone().unwrap_or_default(),
            self.kcpe_marks.map(|m| m.to_string()).unwrap_or_default(),
        ]
    }
}

/// Owned cell texts of one table row.
#[derive(Debug, PartialEq)]
struct RowText {
    adm: String,
    full_name: String,
    gender: String,
    class_label: String,
    kcpe: String,
}

impl RowText {
    fn of(student: &Student) -> Self {
        Self {
            adm: student.adm_no.clone(),
            full_name: student.full_name(),
            gender: student.gender.clone(),
            class_label: format!("Form {} {}", student.form, student.stream),
            kcpe: student
                .kcpe_marks
                .map(|m| m.to_string())
                .unwrap_or_else(|| "\u{2014}".to_string()),
        }
    }
}

#[component]
pub fn StudentList() -> impl IntoView {
    let toasts = use_toast();
    let list = RwSignal::new(ListState::<Student>::new());
    let streams = RwSignal::new(ListState::<Stream>::new());
    let modal = RwSignal::new(ModalState::<Student>::Closed);
    let saving = RwSignal::new(false);
    let downloading = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let form_filter = RwSignal::new(options::FORMS[0]);
    let year_filter = RwSignal::new(options::current_year());
    let stream_filter = RwSignal::new(None::<String>);
    let term = RwSignal::new(options::TERMS[0]);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::by("adm"));

    let query = move || StudentQuery {
        form: form_filter.get_untracked(),
        year: year_filter.get_untracked(),
        stream: stream_filter.get_untracked(),
    };
    let fetch = move || {
        load_list(
            list,
            toasts,
            "students",
            "Failed to fetch students",
            api::fetch_students(query()),
        )
    };

    // Any filter change refetches.
    Effect::new(move |_| {
        form_filter.track();
        year_filter.track();
        stream_filter.track();
        fetch();
    });

    load_list(
        streams,
        toasts,
        "students",
        "Failed to fetch streams",
        stream_api::fetch_streams(),
    );
    let stream_choices = Signal::derive(move || {
        streams.with(|s| name_options(s.rows().iter().map(|st| st.stream_name.as_str())))
    });

    let visible = Memo::new(move |_| {
        let mut rows = list.with(|l| filter_list(l.rows(), &search.get()));
        sort_list(&mut rows, &sort.get());
        rows
    });

    let close = Callback::new(move |_| {
        form_error.set(None);
        modal.set(ModalState::Closed);
    });

    let submit = Callback::new(move |values: FormState| {
        let dto = match details::checked_dto(&values) {
            Ok(dto) => dto,
            Err(message) => {
                form_error.set(Some(message.clone()));
                toasts.error(message);
                return;
            }
        };
        form_error.set(None);
        let editing = modal.with_untracked(|m| m.editing().map(|s| s.id));
        saving.set(true);
        spawn_local(async move {
            let (result, success) = match editing {
                Some(id) => (api::update_student(id, &dto).await, "Student updated"),
                None => (api::add_student(&dto).await, "Student added"),
            };
            saving.try_set(false);
            let outcome = after_write(&result, success, "Failed to save student");
            finish_write(outcome, modal, toasts, fetch);
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(student) = modal.try_update(|m| m.confirm_delete()).flatten() else {
            return;
        };
        saving.set(true);
        spawn_local(async move {
            let result = api::delete_student(student.id).await;
            saving.try_set(false);
            let outcome = after_write(&result, "Student deleted", "Failed to delete student");
            finish_write(outcome, modal, toasts, fetch);
        });
    });

    let export = move |_: leptos::ev::MouseEvent| {
        let rows = visible.get_untracked();
        let file = format!(
            "students_form{}_{}.csv",
            form_filter.get_untracked(),
            year_filter.get_untracked()
        );
        if let Err(e) = export_csv(&rows, &file) {
            log::warn!("students: export failed: {e}");
            toasts.warning(e);
        }
    };

    let download_reports = move |_: leptos::ev::MouseEvent| {
        let request = ReportFormRequest {
            form: form_filter.get_untracked(),
            year: year_filter.get_untracked(),
            term: term.get_untracked(),
            stream: stream_filter.get_untracked(),
        };
        downloading.set(true);
        spawn_local(async move {
            match api::download_report_forms(&request).await {
                Ok(bytes) => match download_bytes(&bytes, "application/pdf", &request.file_name()) {
                    Ok(()) => {
                        toasts.success("Report forms downloaded");
                    }
                    Err(e) => {
                        log::warn!("students: saving report forms failed: {e}");
                        toasts.error("Failed to save report forms");
                    }
                },
                Err(e) => {
                    toasts.error(e.user_message("Failed to generate report forms"));
                }
            }
            downloading.try_set(false);
        });
    };

    let placement = move || Placement {
        form: form_filter.get_untracked(),
        year: year_filter.get_untracked(),
        stream: stream_filter.get_untracked(),
    };
    let is_loading = Signal::derive(move || list.with(ListState::is_loading));
    let form_open = Signal::derive(move || modal.with(ModalState::is_form_open));
    let form_title = Signal::derive(move || {
        if modal.with(ModalState::is_adding) {
            "Add student".to_string()
        } else {
            "Edit student".to_string()
        }
    });
    let initial = Signal::derive(move || modal.with(|m| details::initial_values(m.editing(), &placement())));
    let viewing = Signal::derive(move || modal.with(|m| m.viewing().is_some()));
    let view_title = Signal::derive(move || {
        modal.with(|m| m.viewing().map(Student::full_name).unwrap_or_default())
    });
    let deleting = Signal::derive(move || modal.with(|m| m.deleting().is_some()));
    let delete_message = Signal::derive(move || {
        modal.with(|m| {
            m.deleting()
                .map(|s| format!("Delete {} (Adm {})? This cannot be undone.", s.full_name(), s.adm_no))
                .unwrap_or_default()
        })
    });

    let header_cell = move |field: &'static str, title: &'static str| {
        view! {
            <TableHeaderCell>
                <span class="table__sortable" on:click=move |_| sort.update(|s| s.toggle(field))>
                    {title}
                    {move || sort.with(|s| s.indicator(field))}
                </span>
            </TableHeaderCell>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Students" subtitle=Signal::derive(move || Some(format!("{} shown", visible.with(Vec::len))))>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=is_loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=export
                    disabled=Signal::derive(move || visible.with(Vec::is_empty))
                >
                    {icon("download")}
                    " CSV"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        form_error.set(None);
                        modal.set(ModalState::Adding);
                    }
                >
                    {icon("plus")}
                    " Add student"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <Flex gap=FlexGap::Medium align=FlexAlign::End>
                    <Select
                        label="Form"
                        value=Signal::derive(move || form_filter.get().to_string())
                        options=options::form_options()
                        on_change=Callback::new(move |v: String| {
                            if let Ok(form) = v.parse() {
                                form_filter.set(form);
                            }
                        })
                    />
                    <Select
                        label="Year"
                        value=Signal::derive(move || year_filter.get().to_string())
                        options=options::year_options()
                        on_change=Callback::new(move |v: String| {
                            if let Ok(year) = v.parse() {
                                year_filter.set(year);
                            }
                        })
                    />
                    <Select
                        label="Stream"
                        placeholder="All streams"
                        value=Signal::derive(move || stream_filter.get().unwrap_or_default())
                        options=stream_choices
                        on_change=Callback::new(move |v: String| {
                            stream_filter.set((!v.is_empty()).then_some(v));
                        })
                    />
                    <SearchInput
                        value=search
                        placeholder="Adm no or name"
                        on_change=Callback::new(move |v: String| search.set(v))
                    />
                    <Select
                        label="Term"
                        value=Signal::derive(move || term.get().to_string())
                        options=options::term_options()
                        on_change=Callback::new(move |v: String| {
                            if let Ok(t) = v.parse() {
                                term.set(t);
                            }
                        })
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=download_reports
                        disabled=Signal::derive(move || downloading.get())
                    >
                        {icon("download")}
                        {move || if downloading.get() { " Generating..." } else { " Report forms" }}
                    </Button>
                </Flex>
            </div>

            <div class="page__content">
                <Show when=move || list.with(|l| l.is_loading() && l.rows().is_empty())>
                    <Spinner label="Loading students..." />
                </Show>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cell("adm", "Adm No")}
                            {header_cell("name", "Name")}
                            {header_cell("gender", "Gender")}
                            {header_cell("stream", "Class")}
                            {header_cell("kcpe", "KCPE")}
                            <TableHeaderCell min_width=140.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|s| (s.id, s.adm_no.clone(), s.first_name.clone(), s.stream.clone(), s.kcpe_marks)
                            children=move |student| {
                                let to_view = student.clone();
                                let to_edit = student.clone();
                                let to_delete = student.clone();
                                let RowText { adm, full_name, gender, class_label, kcpe } = RowText::of(&student);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{adm}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{full_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{gender}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{class_label}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{kcpe}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| modal.set(ModalState::Viewing(to_view.clone()))
                                                >
                                                    {icon("eye")}
                                                </Button>
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
                    <div class="empty-state">"No students in this class."</div>
                </Show>
            </div>

            <ModalForm
                is_open=form_open
                title=form_title
                initial_values=initial
                on_close=close
                on_submit=submit
                size=ModalSize::Large
                busy=saving
                render=Callback::new(move |form: FormHandle| {
                    view! {
                        <StudentFields form=form streams=stream_choices />
                        <FieldError message=form_error />
                    }
                    .into_any()
                })
            />

            <ModalForm
                is_open=viewing
                title=view_title
                on_close=close
                is_form=false
                close_on_outside_click=true
                size=ModalSize::Medium
                render=Callback::new(move |_: FormHandle| {
                    modal
                        .with_untracked(|m| m.viewing().cloned())
                        .map(|student| view! { <StudentProfile student=student /> }.into_any())
                        .unwrap_or_else(|| ().into_any())
                })
            />

            <ConfirmDialog
                is_open=deleting
                title="Delete student"
                message=delete_message
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

    fn student(id: i64, adm: &str, first: &str) -> Student {
        Student {
            id,
            adm_no: adm.into(),
            first_name: first.into(),
            other_names: String::new(),
            gender: "Male".into(),
            form: 1,
            stream: "North".into(),
            year: 2025,
            date_of_birth: None,
            guardian_name: None,
            guardian_phone: None,
            kcpe_marks: None,
        }
    }

    #[test]
    fn row_text_is_detached_from_the_record() {
        let mut record = student(4, "4821", "Achieng");
        record.kcpe_marks = Some(388);
        let text = RowText::of(&record);
        drop(record);
        assert_eq!(text.adm, "4821");
        assert_eq!(text.class_label, "Form 1 North");
        assert_eq!(text.kcpe, "388");
        assert_eq!(RowText::of(&student(5, "4822", "Kamau")).kcpe, "\u{2014}");
    }

    #[test]
    fn admission_numbers_sort_numerically() {
        let mut rows = vec![student(1, "1000", "A"), student(2, "999", "B"), student(3, "1001", "C")];
        sort_list(&mut rows, &SortState::by("adm"));
        let adms: Vec<_> = rows.iter().map(|s| s.adm_no.as_str()).collect();
        assert_eq!(adms, ["999", "1000", "1001"]);
    }

    #[test]
    fn search_matches_admission_number_and_name() {
        let rows = vec![student(1, "4821", "Achieng"), student(2, "4822", "Kamau")];
        assert_eq!(filter_list(&rows, "kam")[0].id, 2);
        assert_eq!(filter_list(&rows, "4821")[0].id, 1);
    }

    #[test]
    fn csv_row_matches_headers() {
        let row = student(1, "1", "Otieno").to_csv_row();
        assert_eq!(row.len(), Student::headers().len());
    }
}
