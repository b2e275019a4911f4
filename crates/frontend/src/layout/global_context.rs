use leptos::prelude::*;

/// Top-level screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Dashboard,
    Students,
    Staff,
    Streams,
    Remarks,
    Grading,
    Particulars,
    Photos,
    Timetable,
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::Dashboard,
        Screen::Students,
        Screen::Staff,
        Screen::Streams,
        Screen::Remarks,
        Screen::Grading,
        Screen::Particulars,
        Screen::Photos,
        Screen::Timetable,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Students => "students",
            Screen::Staff => "staff",
            Screen::Streams => "streams",
            Screen::Remarks => "remarks",
            Screen::Grading => "grading",
            Screen::Particulars => "particulars",
            Screen::Photos => "photos",
            Screen::Timetable => "timetable",
        }
    }

    pub fn from_key(key: &str) -> Option<Screen> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Students => "Students",
            Screen::Staff => "Staff",
            Screen::Streams => "Streams",
            Screen::Remarks => "Remarks",
            Screen::Grading => "Grading",
            Screen::Particulars => "School particulars",
            Screen::Photos => "Photos",
            Screen::Timetable => "Timetable",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Students => "students",
            Screen::Staff => "users",
            Screen::Streams => "layers",
            Screen::Remarks => "message-square",
            Screen::Grading => "award",
            Screen::Particulars => "building",
            Screen::Photos => "image",
            Screen::Timetable => "calendar",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Screen>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open(&self, screen: Screen) {
        if self.active.get_untracked() != screen {
            log::debug!("open screen '{}'", screen.key());
            self.active.set(screen);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_round_trip_and_are_unique() {
        let keys: HashSet<_> = Screen::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys.len(), Screen::ALL.len());
        for screen in Screen::ALL {
            assert_eq!(Screen::from_key(screen.key()), Some(screen));
        }
        assert_eq!(Screen::from_key("nope"), None);
    }

    #[test]
    fn dashboard_is_the_landing_screen() {
        assert_eq!(Screen::default(), Screen::Dashboard);
        assert_eq!(Screen::ALL[0], Screen::Dashboard);
    }
}
