pub mod global_context;
pub mod sidebar;
pub mod top_bar;

use global_context::{use_app_context, Screen};
use leptos::prelude::*;
use sidebar::Sidebar;
use top_bar::TopBar;

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_stream::ui::list::StreamList;
use crate::domain::a002_student::ui::list::StudentList;
use crate::domain::a003_staff::ui::list::StaffList;
use crate::domain::a004_remark::ui::list::RemarkList;
use crate::domain::a005_grading::ui::list::GradingList;
use crate::domain::a006_particulars::ui::view::ParticularsView;
use crate::domain::a007_photo::ui::list::PhotoGallery;
use crate::domain::a008_timetable::ui::grid::TimetableView;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 TopBar                    |
/// +------------------------------------------+
/// |  Sidebar  |         active screen        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopBar />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {move || screen_view(ctx.active.get())}
                </main>
            </div>
        </div>
    }
}

/// Each switch mounts a fresh screen, which fetches its own data.
fn screen_view(screen: Screen) -> AnyView {
    match screen {
        Screen::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Screen::Students => view! { <StudentList /> }.into_any(),
        Screen::Staff => view! { <StaffList /> }.into_any(),
        Screen::Streams => view! { <StreamList /> }.into_any(),
        Screen::Remarks => view! { <RemarkList /> }.into_any(),
        Screen::Grading => view! { <GradingList /> }.into_any(),
        Screen::Particulars => view! { <ParticularsView /> }.into_any(),
        Screen::Photos => view! { <PhotoGallery /> }.into_any(),
        Screen::Timetable => view! { <TimetableView /> }.into_any(),
    }
}
