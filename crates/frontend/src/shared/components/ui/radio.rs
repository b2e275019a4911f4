use leptos::prelude::*;

/// Horizontal radio group for a filter value.
#[component]
pub fn RadioGroup(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// `name` attribute shared by the inputs
    name: &'static str,
    /// `(value, label)` pairs
    options: Vec<(String, String)>,
) -> impl IntoView {
    let items = options
        .into_iter()
        .map(|(val, text)| {
            let id = format!("{name}-{val}");
            let current = val.clone();
            let picked = val.clone();
            view! {
                <div class="form__radio-wrapper">
                    <input
                        id=id.clone()
                        type="radio"
                        class="form__radio"
                        name=name
                        value=val
                        prop:checked=move || value.get() == current
                        on:change=move |_| on_change.run(picked.clone())
                    />
                    <label class="form__radio-label" for=id>{text}</label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="form__group" role="radiogroup">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <div class="form__radio-group">{items}</div>
        </div>
    }
}
