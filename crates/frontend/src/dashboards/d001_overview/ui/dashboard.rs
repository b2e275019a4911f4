use contracts::dashboards::d001_overview::DashboardSummary;
use contracts::domain::a001_stream::aggregate::Stream;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d001_overview::api;
use crate::domain::a001_stream::api as stream_api;
use crate::shared::components::{format_count, PageHeader, StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::options::FORMS;
use crate::shared::screen_state::{load_list, ListState};
use crate::shared::toast::use_toast;

/// One line of the enrolment table.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolmentRow {
    pub form: u8,
    pub students: u32,
    /// Percentage of all enrolled students, `None` for an empty school
    pub share: Option<f64>,
}

/// Every form appears once, in order, even when the backend omits it.
pub fn enrolment_rows(summary: &DashboardSummary) -> Vec<EnrolmentRow> {
    let total: u32 = summary.per_form.iter().map(|f| f.students).sum();
    FORMS
        .iter()
        .map(|&form| {
            let students = summary
                .per_form
                .iter()
                .filter(|f| f.form == form)
                .map(|f| f.students)
                .sum();
            EnrolmentRow {
                form,
                students,
                share: (total > 0).then(|| f64::from(students) * 100.0 / f64::from(total)),
            }
        })
        .collect()
}

fn format_share(share: Option<f64>) -> String {
    share.map(|s| format!("{s:.1}%")).unwrap_or_else(|| "\u{2014}".into())
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let toasts = use_toast();
    let summary = RwSignal::new(ListState::<DashboardSummary>::new());
    let streams = RwSignal::new(ListState::<Stream>::new());

    // Both requests are in flight at once; each card fills in as its data lands.
    let fetch = move || {
        load_list(
            summary,
            toasts,
            "dashboard",
            "Failed to fetch dashboard summary",
            async { api::fetch_summary().await.map(|s| vec![s]) },
        );
        load_list(
            streams,
            toasts,
            "dashboard",
            "Failed to fetch streams",
            stream_api::fetch_streams(),
        );
    };
    fetch();

    let current = Memo::new(move |_| summary.with(|s| s.rows().first().cloned()));
    let stat = move |pick: fn(&DashboardSummary) -> u32| {
        Signal::derive(move || current.with(|s| s.as_ref().map(|s| u64::from(pick(s)))))
    };
    let stream_count = Signal::derive(move || {
        streams.with(|s| (!s.is_loading() && s.error().is_none()).then(|| s.rows().len() as u64))
    });
    let girls_share = Signal::derive(move || {
        current.with(|s| {
            s.as_ref()
                .and_then(DashboardSummary::girls_share)
                .map(|p| format!("{p:.0}% of students"))
        })
    });
    let rows = Memo::new(move |_| current.with(|s| s.as_ref().map(enrolment_rows).unwrap_or_default()));
    let loading = Signal::derive(move || summary.with(ListState::is_loading) || streams.with(ListState::is_loading));

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="School at a glance">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Students" icon_name="students" value=stat(|s| s.total_students) tone=StatTone::Primary />
                    <StatCard label="Staff" icon_name="users" value=stat(|s| s.total_staff) tone=StatTone::Success />
                    <StatCard label="Boys" icon_name="users" value=stat(|s| s.boys) />
                    <StatCard label="Girls" icon_name="users" value=stat(|s| s.girls) subtitle=girls_share />
                    <StatCard label="Streams" icon_name="layers" value=stream_count tone=StatTone::Warning />
                </div>

                <h3 class="section-title">"Enrolment per form"</h3>
                <Show when=move || summary.with(|s| s.is_loading() && s.rows().is_empty())>
                    <Spinner label="Loading summary..." />
                </Show>
                <Table attr:style="width: 100%; max-width: 480px;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Form"</TableHeaderCell>
                            <TableHeaderCell>"Students"</TableHeaderCell>
                            <TableHeaderCell>"Share"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|r| (r.form, r.students)
                            children=|row| view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{format!("Form {}", row.form)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_count(u64::from(row.students))}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_share(row.share)}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d001_overview::FormEnrolment;

    #[test]
    fn missing_forms_are_filled_with_zero() {
        let summary = DashboardSummary {
            per_form: vec![
                FormEnrolment { form: 3, students: 30 },
                FormEnrolment { form: 1, students: 90 },
            ],
            ..Default::default()
        };
        let rows = enrolment_rows(&summary);
        assert_eq!(rows.iter().map(|r| r.form).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(rows[0].students, 90);
        assert_eq!(rows[1].students, 0);
        assert_eq!(rows[0].share, Some(75.0));
        assert_eq!(rows[2].share, Some(25.0));
    }

    #[test]
    fn empty_school_has_no_shares() {
        let rows = enrolment_rows(&DashboardSummary::default());
        assert!(rows.iter().all(|r| r.share.is_none() && r.students == 0));
        assert_eq!(format_share(None), "\u{2014}");
        assert_eq!(format_share(Some(33.333)), "33.3%");
    }
}
