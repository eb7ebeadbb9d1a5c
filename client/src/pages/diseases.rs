//! Disease predisposition report, bucketed by clinical priority.

use leptos::prelude::*;
use schema::report::{DiseaseGroups, DiseaseSnp, Priority};

use crate::components::bars::{StackedBar, StatCard};
use crate::components::layout::PatientLayout;
use crate::components::remote_view::{RemoteStatus, load_into};
use crate::net::api;
use crate::state::request::Remote;
use crate::util::charts::{DiseaseStats, format_frequency, magnitude_pips, percentages};

const PRIORITIES: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

#[component]
pub fn DiseasesPage() -> impl IntoView {
    view! {
        <PatientLayout
            title="Enfermedades"
            subtitle="Explora tu predisposición genética a distintas enfermedades y las variantes presentes en tu ADN."
        >
            <DiseasesReport/>
        </PatientLayout>
    }
}

#[component]
fn DiseasesReport() -> impl IntoView {
    let remote = RwSignal::new(Remote::<DiseaseGroups>::default());
    let load = move || load_into(remote, api::fetch_diseases);
    load();

    view! {
        <RemoteStatus
            loading=Signal::derive(move || remote.with(|r| r.loading))
            error=Signal::derive(move || remote.with(|r| r.error.clone()))
            on_retry=Callback::new(move |()| load())
            loading_text="Analizando tus variantes..."
        />
        {move || remote.with(|r| r.data.clone()).map(|groups| view! { <DiseasesBody groups=groups/> })}
    }
}

#[component]
fn DiseasesBody(groups: DiseaseGroups) -> impl IntoView {
    if groups.total() == 0 {
        return view! { <p class="empty-state">"No se encontraron variantes asociadas a enfermedades."</p> }.into_any();
    }

    let stats = DiseaseStats::from_groups(&groups);
    #[allow(clippy::cast_precision_loss)]
    let counts: Vec<f64> = [stats.high, stats.medium, stats.low].iter().map(|n| *n as f64).collect();
    let segments: Vec<(String, u32, String)> = PRIORITIES
        .iter()
        .zip(percentages(&counts))
        .map(|(p, pct)| (p.label().to_owned(), pct, p.color().to_owned()))
        .collect();

    view! {
        <div class="stat-grid">
            <div class="score-ring" style=format!("--score: {};", stats.score)>
                <span class="score-ring__value">{format!("{}%", stats.score)}</span>
                <span class="score-ring__label">"Índice genético"</span>
            </div>
            <StatCard title="Variantes analizadas" value=groups.total().to_string()/>
            <StatCard title="Magnitud promedio" value=stats.avg_magnitude.clone()/>
            <StatCard
                title="Variantes relevantes"
                value=stats.pathogenic.to_string()
                hint="Magnitud ≥ 3 o prioridad alta"
                accent=Priority::High.color()
            />
        </div>
        <section class="report-card">
            <h2>"Distribución por prioridad clínica"</h2>
            <StackedBar segments=segments/>
        </section>
        {PRIORITIES
            .into_iter()
            .filter(|p| !groups.group(*p).is_empty())
            .map(|p| {
                let snps = groups.group(p).to_vec();
                view! {
                    <section class="report-card">
                        <h2 style=format!("color: {};", p.color())>{format!("{} ({})", p.label(), snps.len())}</h2>
                        <div class="disease-grid">
                            {snps.into_iter().map(|snp| view! { <DiseaseCard snp=snp priority=p/> }).collect_view()}
                        </div>
                    </section>
                }
            })
            .collect_view()}
    }
    .into_any()
}

#[component]
fn DiseaseCard(snp: DiseaseSnp, priority: Priority) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let (class, risk) = match priority {
        Priority::High => ("risk-high", "ALTO"),
        Priority::Medium => ("risk-medium", "MEDIO"),
        Priority::Low => ("risk-low", "BAJO"),
    };
    let pips = magnitude_pips(snp.magnitud_efecto);
    let genotype = if snp.genotipo.is_empty() {
        "Genotipo no disponible".to_owned()
    } else {
        format!("Genotipo: {}", snp.genotipo)
    };
    let title = if snp.fenotipo.is_empty() { snp.rsid.clone() } else { snp.fenotipo.clone() };
    let description = snp.phenotype_description.clone();
    let details = [
        ("rsID", snp.rsid.clone()),
        ("Gen", snp.gene.clone()),
        ("Cromosoma", snp.cromosoma.clone()),
        ("Posición", snp.posicion.map(|p| p.to_string()).unwrap_or_default()),
        ("Fuente", snp.fuente.clone()),
        ("Evidencia", snp.tipo_evidencia.clone()),
    ];

    view! {
        <article class=format!("disease-card {class}")>
            <header class="disease-card__header">
                <h3>{title}</h3>
                <span class=format!("disease-card__badge {class}")>{format!("TU RIESGO: {risk}")}</span>
            </header>
            <p class="disease-card__genotype">{genotype}</p>
            <div class="disease-card__stats">
                <div>
                    <span class="disease-card__label">"MAGNITUD"</span>
                    <div class="pips">
                        {(0..5).map(|i| view! { <span class="pip" class:pip--on={i < pips}></span> }).collect_view()}
                    </div>
                </div>
                <div>
                    <span class="disease-card__label">"FRECUENCIA CHILE"</span>
                    <span class="disease-card__value">{format_frequency(snp.freq_chile_percent)}</span>
                </div>
            </div>
            <button class="link-button" on:click=move |_| expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "Ver menos" } else { "Ver más" }}
            </button>
            <Show when=move || expanded.get()>
                <div class="disease-card__details">
                    {(!description.is_empty()).then(|| view! { <p>{description.clone()}</p> })}
                    <dl class="detail-list">
                        {details
                            .iter()
                            .filter(|(_, v)| !v.is_empty())
                            .map(|(k, v)| view! { <dt>{*k}</dt><dd>{v.clone()}</dd> })
                            .collect_view()}
                    </dl>
                </div>
            </Show>
        </article>
    }
}
