//! Plain HTML/CSS chart primitives.
//!
//! Report pages derive numbers with `util::charts` and render them with
//! these widths-as-percentages bars instead of a canvas chart library.

use leptos::prelude::*;

/// Labelled horizontal bar filled to `percent` (0-100).
#[component]
pub fn PercentBar(
    #[prop(into)] label: String,
    percent: u32,
    #[prop(into)] color: String,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    let width = percent.min(100);
    let caption = caption.unwrap_or_else(|| format!("{percent}%"));
    view! {
        <div class="bar">
            <div class="bar__header">
                <span class="bar__label">{label}</span>
                <span class="bar__value">{caption}</span>
            </div>
            <div class="bar__track">
                <div class="bar__fill" style=format!("width: {width}%; background: {color};")></div>
            </div>
        </div>
    }
}

/// Single row of proportional segments, e.g. a risk distribution.
#[component]
pub fn StackedBar(segments: Vec<(String, u32, String)>) -> impl IntoView {
    view! {
        <div class="stacked-bar">
            <div class="stacked-bar__track">
                {segments
                    .iter()
                    .filter(|(_, pct, _)| *pct > 0)
                    .map(|(label, pct, color)| {
                        view! {
                            <div
                                class="stacked-bar__segment"
                                title=format!("{label}: {pct}%")
                                style=format!("width: {pct}%; background: {color};")
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="stacked-bar__legend">
                {segments
                    .into_iter()
                    .map(|(label, pct, color)| {
                        view! {
                            <li>
                                <span class="legend-dot" style=format!("background: {color};")></span>
                                {format!("{label} ({pct}%)")}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Headline number card used on report and admin pages.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: MaybeProp<String>,
    #[prop(optional, into)] accent: Option<String>,
) -> impl IntoView {
    let style = accent.map(|c| format!("border-top-color: {c};")).unwrap_or_default();
    view! {
        <div class="stat-card" style=style>
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
            {move || hint.get().map(|h| view! { <p class="stat-card__hint">{h}</p> })}
        </div>
    }
}
