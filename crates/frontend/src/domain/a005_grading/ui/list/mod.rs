use contracts::domain::a005_grading::aggregate::{grade_for, GradeBand};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::details::{self, GradeBandFields};
use crate::domain::a005_grading::api;
use crate::shared::components::ui::FieldError;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_form::{FormHandle, FormState, ModalForm};
use crate::shared::modal_frame::ModalSize;
use crate::shared::screen_state::{after_write, finish_write, load_list, ListState, ModalState};
use crate::shared::toast::use_toast;

fn format_mark(mark: f64) -> String {
    if mark.fract() == 0.0 {
        format!("{mark:.0}")
    } else {
        format!("{mark:.1}")
    }
}

/// Result line of the "check a mark" box.
fn describe_mark(bands: &[GradeBand], raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let Ok(mark) = raw.parse::<f64>() else {
        return Some("Enter a number".to_string());
    };
    Some(match grade_for(bands, mark) {
        Some(band) => format!("{} ({} points)", band.grade, band.points),
        None => "No grade covers this mark".to_string(),
    })
}

#[component]
pub fn GradingList() -> impl IntoView {
    let toasts = use_toast();
    let list = RwSignal::new(ListState::<GradeBand>::new());
    let modal = RwSignal::new(ModalState::<GradeBand>::Closed);
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let probe = RwSignal::new(String::new());

    let fetch = move || {
        load_list(
            list,
            toasts,
            "grading",
            "Failed to fetch grading scale",
            api::fetch_grades(),
        )
    };
    fetch();

    let close = Callback::new(move |_| {
        form_error.set(None);
        modal.set(ModalState::Closed);
    });

    let submit = Callback::new(move |values: FormState| {
        let Some(id) = modal.with_untracked(|m| m.editing().map(|b| b.id)) else {
            return;
        };
        let dto = match details::to_dto(&values) {
            Ok(dto) => dto,
            Err(message) => {
                form_error.set(Some(message.clone()));
                toasts.error(message);
                return;
            }
        };
        form_error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = api::update_grade(id, &dto).await;
            saving.try_set(false);
            let outcome = after_write(&result, "Grade updated", "Failed to update grade");
            finish_write(outcome, modal, toasts, fetch);
        });
    });

    let form_open = Signal::derive(move || modal.with(ModalState::is_form_open));
    let form_title = Signal::derive(move || {
        modal.with(|m| {
            m.editing()
                .map(|b| format!("Edit grade {}", b.grade))
                .unwrap_or_default()
        })
    });
    let initial = Signal::derive(move || modal.with(|m| details::initial_values(m.editing())));
    let probe_result = Signal::derive(move || list.with(|l| describe_mark(l.rows(), &probe.get())));

    view! {
        <div class="page">
            <PageHeader title="Grading" subtitle="Mark ranges and points per grade">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || list.with(ListState::is_loading))
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <label class="filter">
                    <span class="filter__label">"Check a mark"</span>
                    <input
                        type="number"
                        class="form__input"
                        min="0"
                        max="100"
                        prop:value=move || probe.get()
                        on:input=move |ev| probe.set(event_target_value(&ev))
                    />
                </label>
                {move || probe_result.get().map(|text| view! { <span class="filter__result">{text}</span> })}
            </div>

            <div class="page__content">
                <Show when=move || list.with(|l| l.is_loading() && l.rows().is_empty())>
                    <Spinner label="Loading grading scale..." />
                </Show>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Grade"</TableHeaderCell>
                            <TableHeaderCell>"From"</TableHeaderCell>
                            <TableHeaderCell>"To"</TableHeaderCell>
                            <TableHeaderCell>"Points"</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>"Edit"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || list.with(|l| l.rows().to_vec())
                            key=|b| (b.id, b.grade.clone(), b.points, format_mark(b.min_mark), format_mark(b.max_mark))
                            children=move |band| {
                                let to_edit = band.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <strong>{band.grade.clone()}</strong>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_mark(band.min_mark)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_mark(band.max_mark)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{band.points}</TableCellLayout>
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
                    <div class="empty-state">"The grading scale is empty."</div>
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
                        <GradeBandFields form=form />
                        <FieldError message=form_error />
                    }
                    .into_any()
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> Vec<GradeBand> {
        vec![
            GradeBand { id: 1, grade: "A".into(), min_mark: 80.0, max_mark: 100.0, points: 12 },
            GradeBand { id: 2, grade: "A-".into(), min_mark: 75.0, max_mark: 79.0, points: 11 },
        ]
    }

    #[test]
    fn marks_format_without_trailing_zeroes() {
        assert_eq!(format_mark(75.0), "75");
        assert_eq!(format_mark(74.5), "74.5");
    }

    #[test]
    fn probe_reports_band() {
        assert_eq!(describe_mark(&scale(), "77"), Some("A- (11 points)".into()));
        assert_eq!(describe_mark(&scale(), "79.5"), Some("No grade covers this mark".into()));
        assert_eq!(describe_mark(&scale(), "abc"), Some("Enter a number".into()));
        assert_eq!(describe_mark(&scale(), ""), None);
    }
}
