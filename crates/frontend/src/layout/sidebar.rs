//! Sidebar with collapsible screen groups.

use crate::layout::global_context::{use_app_context, Screen};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: &'static [Screen],
}

static MENU_GROUPS: [MenuGroup; 4] = [
    MenuGroup {
        id: "overview",
        label: "Overview",
        items: &[Screen::Dashboard],
    },
    MenuGroup {
        id: "people",
        label: "People",
        items: &[Screen::Students, Screen::Staff],
    },
    MenuGroup {
        id: "academics",
        label: "Academics",
        items: &[Screen::Streams, Screen::Grading, Screen::Remarks, Screen::Timetable],
    },
    MenuGroup {
        id: "school",
        label: "School",
        items: &[Screen::Particulars, Screen::Photos],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    let toggle_group = move |id: &'static str| {
        collapsed.update(|ids| {
            if let Some(pos) = ids.iter().position(|x| *x == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    };

    view! {
        <nav class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            {MENU_GROUPS
                .iter()
                .map(|group| {
                    let id = group.id;
                    let is_expanded = move || !collapsed.with(|ids| ids.contains(&id));
                    view! {
                        <div class="app-sidebar__group">
                            <button
                                type="button"
                                class="app-sidebar__group-title"
                                on:click=move |_| toggle_group(id)
                            >
                                <span>{group.label}</span>
                                <span
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </span>
                            </button>
                            <Show when=is_expanded>
                                {group
                                    .items
                                    .iter()
                                    .map(|&screen| view! {
                                        <button
                                            type="button"
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.get() == screen
                                            on:click=move |_| ctx.open(screen)
                                        >
                                            {icon(screen.icon())}
                                            <span>{screen.label()}</span>
                                        </button>
                                    })
                                    .collect_view()}
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_is_listed_exactly_once() {
        let listed: Vec<Screen> = MENU_GROUPS.iter().flat_map(|g| g.items.iter().copied()).collect();
        assert_eq!(listed.len(), Screen::ALL.len());
        for screen in Screen::ALL {
            assert!(listed.contains(&screen), "{screen:?} missing from sidebar");
        }
    }
}
