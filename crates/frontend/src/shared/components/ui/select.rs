use leptos::prelude::*;

/// Stand-alone select used by screen filters (not bound to a form).
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// `(value, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Leading option with an empty value, e.g. "All streams"
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <label class="filter">
            {move || label.get().map(|l| view! { <span class="filter__label">{l}</span> })}
            <select
                class="form__select"
                disabled=disabled
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || placeholder.get().map(|p| view! { <option value="">{p}</option> })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}
