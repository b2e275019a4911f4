use contracts::domain::a001_stream::aggregate::Stream;
use contracts::domain::a008_timetable::aggregate::{TimetableQuery, TimetableSlot};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_stream::api as stream_api;
use crate::domain::a008_timetable::api;
use crate::shared::components::ui::Select;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::options::{self, name_options, PERIODS_PER_DAY, SCHOOL_DAYS};
use crate::shared::screen_state::{load_list, ListState};
use crate::shared::toast::use_toast;

/// One row of the grid: a school day with a cell per period.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub day: &'static str,
    pub cells: Vec<Option<TimetableSlot>>,
}

/// Lays slots out as day × period. Slots on unknown days or outside
/// `1..=periods` are dropped; a later slot for the same cell wins.
pub fn build_grid(slots: &[TimetableSlot], periods: u8) -> Vec<DayRow> {
    let mut rows: Vec<DayRow> = SCHOOL_DAYS
        .iter()
        .map(|&day| DayRow {
            day,
            cells: vec![None; usize::from(periods)],
        })
        .collect();
    for slot in slots {
        let Some(row) = rows
            .iter_mut()
            .find(|r| r.day.eq_ignore_ascii_case(slot.day.trim()))
        else {
            continue;
        };
        if (1..=periods).contains(&slot.period) {
            row.cells[usize::from(slot.period - 1)] = Some(slot.clone());
        }
    }
    rows
}

#[component]
pub fn TimetableView() -> impl IntoView {
    let toasts = use_toast();
    let slots = RwSignal::new(ListState::<TimetableSlot>::new());
    let streams = RwSignal::new(ListState::<Stream>::new());
    let form = RwSignal::new(options::FORMS[0]);
    let stream = RwSignal::new(None::<String>);

    load_list(
        streams,
        toasts,
        "timetable",
        "Failed to fetch streams",
        stream_api::fetch_streams(),
    );
    let stream_choices = Signal::derive(move || {
        streams.with(|s| name_options(s.rows().iter().map(|st| st.stream_name.as_str())))
    });

    let fetch = move || {
        let Some(stream) = stream.get_untracked() else {
            return;
        };
        load_list(
            slots,
            toasts,
            "timetable",
            "Failed to fetch timetable",
            api::fetch_timetable(TimetableQuery {
                form: form.get_untracked(),
                stream,
            }),
        );
    };

    Effect::new(move |_| {
        form.track();
        stream.track();
        fetch();
    });

    let grid = Memo::new(move |_| slots.with(|s| build_grid(s.rows(), PERIODS_PER_DAY)));

    view! {
        <div class="page">
            <PageHeader title="Timetable">
                <Select
                    label="Form"
                    value=Signal::derive(move || form.get().to_string())
                    options=options::form_options()
                    on_change=Callback::new(move |v: String| {
                        if let Ok(f) = v.parse() {
                            form.set(f);
                        }
                    })
                />
                <Select
                    label="Stream"
                    placeholder="Select stream"
                    value=Signal::derive(move || stream.get().unwrap_or_default())
                    options=stream_choices
                    on_change=Callback::new(move |v: String| stream.set((!v.is_empty()).then_some(v)))
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || stream.with(Option::is_none) || slots.with(ListState::is_loading))
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show
                    when=move || stream.with(Option::is_some)
                    fallback=|| view! { <div class="empty-state">"Choose a stream to see its timetable."</div> }
                >
                    <Show when=move || slots.with(ListState::is_loading)>
                        <Spinner label="Loading timetable..." />
                    </Show>
                    <Table attr:class="timetable">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Day"</TableHeaderCell>
                                {(1..=PERIODS_PER_DAY)
                                    .map(|p| view! { <TableHeaderCell>{format!("P{p}")}</TableHeaderCell> })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                grid.get()
                                    .into_iter()
                                    .map(|row| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout><strong>{row.day}</strong></TableCellLayout>
                                            </TableCell>
                                            {row
                                                .cells
                                                .into_iter()
                                                .map(|cell| view! {
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {cell.map(|slot| view! {
                                                                <div class="timetable__subject">{slot.subject}</div>
                                                                <div class="timetable__teacher">{slot.teacher.unwrap_or_default()}</div>
                                                            })}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                })
                                                .collect_view()}
                                        </TableRow>
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: &str, period: u8, subject: &str) -> TimetableSlot {
        TimetableSlot {
            day: day.into(),
            period,
            subject: subject.into(),
            teacher: None,
        }
    }

    #[test]
    fn slots_land_in_their_cells() {
        let grid = build_grid(&[slot("Tuesday", 3, "Biology"), slot("monday", 1, "English")], 8);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0].cells[0].as_ref().map(|s| s.subject.as_str()), Some("English"));
        assert_eq!(grid[1].cells[2].as_ref().map(|s| s.subject.as_str()), Some("Biology"));
        assert!(grid[4].cells.iter().all(Option::is_none));
    }

    #[test]
    fn out_of_range_slots_are_dropped() {
        let grid = build_grid(&[slot("Friday", 0, "X"), slot("Friday", 9, "Y"), slot("Sunday", 1, "Z")], 8);
        assert!(grid.iter().all(|row| row.cells.iter().all(Option::is_none)));
    }
}
