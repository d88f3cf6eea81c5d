use leptos::prelude::*;

/// Select with a label. Options are `(value, label)` pairs.
#[component]
pub fn LabeledSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// `(value, label)` pairs where the value is the label itself, led by a wildcard entry.
pub fn options_with_wildcard<I, S>(wildcard: &str, values: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::iter::once(wildcard.to_string())
        .chain(values.into_iter().map(Into::into))
        .map(|v| (v.clone(), v))
        .collect()
}
