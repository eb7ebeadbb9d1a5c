//! Biomarkers report with the risk distribution and per-marker genotypes.

use leptos::prelude::*;
use schema::RiskLevel;
use schema::report::{Biomarker, BiomarkersData};

use crate::components::bars::{StackedBar, StatCard};
use crate::components::layout::PatientLayout;
use crate::components::remote_view::{RemoteStatus, load_into};
use crate::net::api;
use crate::state::request::Remote;
use crate::util::charts::{format_frequency, percentages, risk_distribution};

#[component]
pub fn BiomarkersPage() -> impl IntoView {
    view! {
        <PatientLayout
            title="Biomarcadores"
            subtitle="Marcadores genéticos que revelan factores clave de tu salud y predisposición."
        >
            <BiomarkersReport/>
        </PatientLayout>
    }
}

#[component]
fn BiomarkersReport() -> impl IntoView {
    let remote = RwSignal::new(Remote::<BiomarkersData>::default());
    let load = move || load_into(remote, api::fetch_biomarkers);
    load();

    view! {
        <RemoteStatus
            loading=Signal::derive(move || remote.with(|r| r.loading))
            error=Signal::derive(move || remote.with(|r| r.error.clone()))
            on_retry=Callback::new(move |()| load())
        />
        {move || remote.with(|r| r.data.clone()).map(|data| view! { <BiomarkersBody data=data/> })}
    }
}

#[component]
fn BiomarkersBody(data: BiomarkersData) -> impl IntoView {
    if data.biomarkers.is_empty() {
        return view! { <p class="empty-state">"No hay biomarcadores disponibles para tu muestra."</p> }.into_any();
    }

    // Prefer the backend's distribution; derive it when the payload omits it.
    let dist = if data.risk_distribution.total() > 0 { data.risk_distribution.clone() } else { risk_distribution(&data.biomarkers) };
    let shares = percentages(&[f64::from(dist.bajo), f64::from(dist.medio), f64::from(dist.alto)]);
    let segments = vec![
        ("Bajo".to_owned(), shares[0], RiskLevel::Low.color().to_owned()),
        ("Medio".to_owned(), shares[1], RiskLevel::Intermediate.color().to_owned()),
        ("Alto".to_owned(), shares[2], RiskLevel::High.color().to_owned()),
    ];
    let total = if data.total > 0 { data.total } else { u32::try_from(data.biomarkers.len()).unwrap_or(u32::MAX) };
    let coverage = if data.global_total > 0 { format!("de {} en el panel", data.global_total) } else { String::new() };

    view! {
        <div class="stat-grid">
            <StatCard title="Biomarcadores detectados" value=total.to_string() hint=coverage/>
            <StatCard title="Riesgo bajo" value=dist.bajo.to_string() accent=RiskLevel::Low.color()/>
            <StatCard title="Riesgo medio" value=dist.medio.to_string() accent=RiskLevel::Intermediate.color()/>
            <StatCard title="Riesgo alto" value=dist.alto.to_string() accent=RiskLevel::High.color()/>
        </div>
        <section class="report-card">
            <h2>"Distribución de riesgo"</h2>
            <StackedBar segments=segments/>
        </section>
        <div class="biomarker-grid">
            {data.biomarkers.into_iter().map(|b| view! { <BiomarkerCard biomarker=b/> }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn BiomarkerCard(biomarker: Biomarker) -> impl IntoView {
    let risk = RiskLevel::from_label(&biomarker.user_result.risk);
    let genotype = biomarker.genotype().to_owned();
    let title = if biomarker.name.is_empty() { biomarker.rsid.clone() } else { biomarker.name.clone() };
    let subtitle = [biomarker.gene.as_str(), biomarker.rsid.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    let alleles = format!("{} / {}", biomarker.alleles.reference, biomarker.alleles.alt);

    view! {
        <article class="report-card biomarker-card" style=format!("border-top-color: {};", risk.color())>
            <header class="biomarker-card__header">
                <div>
                    <h3>{title}</h3>
                    <p class="biomarker-card__subtitle">{subtitle}</p>
                </div>
                <span class="badge" style=format!("background: {};", risk.color())>{risk.label()}</span>
            </header>
            <p class="biomarker-card__phenotype">{biomarker.user_result.phenotype.clone()}</p>
            {(!biomarker.user_result.phenotype_description.is_empty())
                .then(|| view! { <p class="biomarker-card__description">{biomarker.user_result.phenotype_description.clone()}</p> })}
            <dl class="detail-list detail-list--inline">
                <dt>"Tu genotipo"</dt>
                <dd>{genotype.clone()}</dd>
                <dt>"Alelos"</dt>
                <dd>{alleles}</dd>
                <dt>"Cromosoma"</dt>
                <dd>{biomarker.chromosome.clone()}</dd>
                <dt>"Frecuencia Chile"</dt>
                <dd>{format_frequency(biomarker.freq_chile_percent)}</dd>
            </dl>
            {(!biomarker.all_genotypes.is_empty())
                .then(|| {
                    view! {
                        <table class="genotype-table">
                            <thead>
                                <tr>
                                    <th>"Genotipo"</th>
                                    <th>"Fenotipo"</th>
                                    <th>"Riesgo"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {biomarker
                                    .all_genotypes
                                    .iter()
                                    .map(|g| {
                                        view! {
                                            <tr class:genotype-table__row--mine={g.genotype == genotype}>
                                                <td>{g.genotype.clone()}</td>
                                                <td>{g.phenotype.clone()}</td>
                                                <td>{RiskLevel::from_label(&g.risk).label()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                })}
        </article>
    }
}
