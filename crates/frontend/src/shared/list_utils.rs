//! Client-side search and sorting for table screens.
use std::cmp::Ordering;

use leptos::prelude::*;

use super::delayed_task::TaskSlot;
use super::icons::icon;

/// Rows that can be matched against a free-text query.
pub trait Searchable {
    /// `query` is already trimmed and lowercased.
    fn matches_filter(&self, query: &str) -> bool;
}

/// Rows that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive containment on any of `haystacks`.
pub fn contains_any<'a>(haystacks: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    haystacks
        .into_iter()
        .any(|h| h.to_lowercase().contains(query))
}

pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&query))
        .cloned()
        .collect()
}

pub fn sort_list<T: Sortable>(items: &mut [T], sort: &SortState) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, sort.field);
        if sort.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Column and direction of a table's sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: &'static str,
    pub ascending: bool,
}

impl SortState {
    pub fn by(field: &'static str) -> Self {
        Self {
            field,
            ascending: true,
        }
    }

    /// Clicking the active column flips direction; another column sorts ascending.
    pub fn toggle(&mut self, field: &'static str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            *self = Self::by(field);
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        match (self.field == field, self.ascending) {
            (true, true) => " \u{25b2}",
            (true, false) => " \u{25bc}",
            (false, _) => "",
        }
    }
}

/// Search box that reports its value after the user stops typing.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let draft = RwSignal::new(value.get_untracked());
    let debounce = TaskSlot::new();

    let handle_input = move |text: String| {
        draft.set(text.clone());
        debounce.schedule(300, move || on_change.run(text));
    };

    let clear = move |_| {
        debounce.cancel();
        draft.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="search"
                class="search-input__field"
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                prop:value=move || draft.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !draft.get().is_empty()>
                <button
                    type="button"
                    class="search-input__clear"
                    title="Clear"
                    on:click=clear
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        adm: u32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, query: &str) -> bool {
            contains_any([self.name], query) || self.adm.to_string().contains(query)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "adm" => self.adm.cmp(&other.adm),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Wanjiku", adm: 1203 },
            Row { name: "Otieno", adm: 1101 },
            Row { name: "Akinyi", adm: 1302 },
        ]
    }

    #[test]
    fn empty_query_keeps_everything() {
        assert_eq!(filter_list(&rows(), "  ").len(), 3);
    }

    #[test]
    fn query_is_case_insensitive() {
        let found = filter_list(&rows(), "OTI");
        assert_eq!(found, vec![Row { name: "Otieno", adm: 1101 }]);
        assert_eq!(filter_list(&rows(), "1302")[0].name, "Akinyi");
    }

    #[test]
    fn toggle_flips_then_resets() {
        let mut sort = SortState::by("name");
        sort.toggle("name");
        assert!(!sort.ascending);
        sort.toggle("adm");
        assert_eq!(sort, SortState::by("adm"));
        assert_eq!(sort.indicator("adm"), " \u{25b2}");
        assert_eq!(sort.indicator("name"), "");
    }

    #[test]
    fn sorts_descending() {
        let mut items = rows();
        let mut sort = SortState::by("adm");
        sort.toggle("adm");
        sort_list(&mut items, &sort);
        let adms: Vec<_> = items.iter().map(|r| r.adm).collect();
        assert_eq!(adms, [1302, 1203, 1101]);
    }
}
