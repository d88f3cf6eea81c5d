use leptos::prelude::*;

/// Horizontal bar filled to `percent`, in the given band colour.
#[component]
pub fn ProgressBar(
    #[prop(into)] label: String,
    percent: f64,
    #[prop(into)] colour: String,
    /// Text shown on the right, defaults to the rounded percentage
    #[prop(optional, into)]
    caption: Option<String>,
) -> impl IntoView {
    let width = percent.clamp(0.0, 100.0);
    let caption = caption.unwrap_or_else(|| format!("{:.0}%", percent));
    view! {
        <div class="progress-row">
            <div class="progress-row__header">
                <span class="progress-row__label">{label}</span>
                <span class="progress-row__caption">{caption}</span>
            </div>
            <div class="progress-row__track">
                <div
                    class="progress-row__fill"
                    style:width=format!("{:.1}%", width)
                    style:background-color=colour
                ></div>
            </div>
        </div>
    }
}
