use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour accent of a [`StatCard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatTone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
}

impl StatTone {
    fn css_class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Primary => "stat-card stat-card--primary",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
        }
    }
}

/// Groups digits in thousands: `1234567` -> `1,234,567`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// `None` while loading or after a failed load
    #[prop(into)]
    value: Signal<Option<u64>>,
    #[prop(optional)] tone: StatTone,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class=tone.css_class()>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
