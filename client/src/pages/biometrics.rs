//! Biometrics report: impact matrix and variant list.

use leptos::prelude::*;
use schema::report::{BiometricVariant, BiometricsData};

use crate::components::bars::{PercentBar, StatCard};
use crate::components::layout::PatientLayout;
use crate::components::remote_view::{RemoteStatus, load_into};
use crate::net::api;
use crate::state::request::Remote;
use crate::util::charts::{Impact, biometric_summary, format_frequency, magnitude_bar};

/// Impact class of a matrix cell; the backend sends `alto`/`medio`/`bajo`.
fn cell_class(impact: &str) -> &'static str {
    match impact.trim().to_lowercase().as_str() {
        "alto" | "high" => "impact-cell impact-cell--high",
        "medio" | "medium" => "impact-cell impact-cell--medium",
        "bajo" | "low" => "impact-cell impact-cell--low",
        _ => "impact-cell",
    }
}

#[component]
pub fn BiometricsPage() -> impl IntoView {
    view! {
        <PatientLayout
            title="Biométricas"
            subtitle="Cómo tus variantes se relacionan con características físicas y de rendimiento."
        >
            <BiometricsReport/>
        </PatientLayout>
    }
}

#[component]
fn BiometricsReport() -> impl IntoView {
    let remote = RwSignal::new(Remote::<BiometricsData>::default());
    let load = move || load_into(remote, api::fetch_biometrics);
    load();

    view! {
        <RemoteStatus
            loading=Signal::derive(move || remote.with(|r| r.loading))
            error=Signal::derive(move || remote.with(|r| r.error.clone()))
            on_retry=Callback::new(move |()| load())
        />
        {move || remote.with(|r| r.data.clone()).map(|data| view! { <BiometricsBody data=data/> })}
    }
}

#[component]
fn BiometricsBody(data: BiometricsData) -> impl IntoView {
    if data.variants.is_empty() && data.matrix.is_empty() {
        return view! { <p class="empty-state">"No hay datos biométricos disponibles para tu muestra."</p> }.into_any();
    }

    let summary = biometric_summary(&data.variants);
    let columns = data.columns.clone();

    view! {
        <div class="stat-grid">
            <StatCard title="Variantes" value=summary.total().to_string()/>
            <StatCard title="Impacto alto" value=summary.high.to_string() accent=Impact::High.color()/>
            <StatCard title="Impacto medio" value=summary.medium.to_string() accent=Impact::Medium.color()/>
            <StatCard title="Impacto bajo" value=summary.low.to_string() accent=Impact::Low.color()/>
            <StatCard title="Puntaje promedio" value=format!("{:.1} / 3", summary.average_score)/>
        </div>

        {(!data.matrix.is_empty())
            .then(|| {
                view! {
                    <section class="report-card">
                        <h2>"Matriz de impacto"</h2>
                        <div class="table-scroll">
                            <table class="impact-matrix">
                                <thead>
                                    <tr>
                                        <th></th>
                                        {columns.iter().map(|c| view! { <th>{c.clone()}</th> }).collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    {data
                                        .matrix
                                        .iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <th>{row.name.clone()}</th>
                                                    {columns
                                                        .iter()
                                                        .map(|col| {
                                                            let cell = row.cells.iter().find(|c| &c.column == col);
                                                            let impact = cell.map(|c| c.impact.clone()).unwrap_or_default();
                                                            let title = cell.map(|c| c.explanation.clone()).unwrap_or_default();
                                                            let class = cell_class(&impact);
                                                            view! { <td class=class title=title>{impact}</td> }
                                                        })
                                                        .collect_view()}
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </section>
                }
            })}

        <section class="report-card">
            <h2>"Variantes analizadas"</h2>
            <div class="variant-list">
                {data.variants.into_iter().map(|v| view! { <BiometricVariantRow variant=v/> }).collect_view()}
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn BiometricVariantRow(variant: BiometricVariant) -> impl IntoView {
    let magnitude = variant.magnitud_efecto.unwrap_or(0.0);
    let impact = Impact::biometric(magnitude);
    let label = if variant.fenotipo.is_empty() { variant.rsid.clone() } else { variant.fenotipo.clone() };
    let meta = format!(
        "{} · genotipo {} · {} · frecuencia Chile {}",
        variant.rsid,
        variant.genotipo,
        if variant.grupo.is_empty() { &variant.categoria } else { &variant.grupo },
        format_frequency(variant.freq_chile_percent),
    );

    view! {
        <div class="variant-row">
            <PercentBar
                label=label
                percent=magnitude_bar(magnitude)
                color=impact.color()
                caption=format!("Impacto {} · {magnitude:.1}", impact.label())
            />
            <p class="variant-row__meta">{meta}</p>
            {(!variant.explanation.is_empty()).then(|| view! { <p class="variant-row__note">{variant.explanation.clone()}</p> })}
        </div>
    }
}
