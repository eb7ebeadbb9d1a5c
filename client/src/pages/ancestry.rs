//! Ancestry report: continental and country shares plus indigenous peoples.

use leptos::prelude::*;
use schema::report::{AncestryData, AncestryRegion, IndigenousData};

use crate::components::bars::{PercentBar, StackedBar, StatCard};
use crate::components::layout::PatientLayout;
use crate::components::remote_view::{RemoteStatus, load_into};
use crate::net::api;
use crate::state::request::Remote;
use crate::util::charts::{GROUP_COLORS, ancestry_weight, percent_of, top_regions};

const TOP_COUNTRIES: usize = 5;

fn color(i: usize) -> String {
    GROUP_COLORS[i % GROUP_COLORS.len()].to_owned()
}

fn pct(value: f64) -> u32 {
    percent_of(value, 100.0)
}

#[component]
pub fn AncestryPage() -> impl IntoView {
    view! {
        <PatientLayout title="Ancestría" subtitle="Tus orígenes genéticos por continente, país y pueblo originario.">
            <AncestryReport/>
        </PatientLayout>
    }
}

#[component]
fn AncestryReport() -> impl IntoView {
    let ancestry = RwSignal::new(Remote::<AncestryData>::default());
    let indigenous = RwSignal::new(Remote::<IndigenousData>::default());
    let selected = RwSignal::new(None::<AncestryRegion>);

    let load = move || {
        load_into(ancestry, api::fetch_ancestry);
        load_into(indigenous, api::fetch_indigenous);
    };
    load();

    view! {
        <RemoteStatus
            loading=Signal::derive(move || ancestry.with(|r| r.loading))
            error=Signal::derive(move || ancestry.with(|r| r.error.clone()))
            on_retry=Callback::new(move |()| load())
            loading_text="Calculando tu ancestría..."
        />
        {move || ancestry.with(|r| r.data.clone()).map(|data| view! { <AncestryBody data=data selected=selected/> })}
        {move || indigenous.with(|r| r.data.clone()).map(|data| view! { <IndigenousSection data=data/> })}
        {move || {
            selected
                .get()
                .map(|region| {
                    let weight = ancestry_weight(region.percentage);
                    view! {
                        <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
                            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                <h2>{region.name.clone()}</h2>
                                <p>
                                    {format!(
                                        "Tu ascendencia de {} es {weight} en tu perfil genético ({:.1}%).",
                                        region.name,
                                        region.percentage,
                                    )}
                                </p>
                                <dl class="detail-list">
                                    <dt>"Continente"</dt>
                                    <dd>{region.continent.clone()}</dd>
                                    <dt>"Variantes"</dt>
                                    <dd>{region.variant_count}</dd>
                                    <dt>"Frecuencia alélica media"</dt>
                                    <dd>{region.avg_allele_frequency.map_or_else(|| "N/A".to_owned(), |f| format!("{f:.3}"))}</dd>
                                </dl>
                                <button class="btn btn--primary" on:click=move |_| selected.set(None)>
                                    "Cerrar"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn AncestryBody(data: AncestryData, selected: RwSignal<Option<AncestryRegion>>) -> impl IntoView {
    if data.continents.is_empty() && data.countries.is_empty() {
        let message = if data.message.is_empty() {
            "Aún no hay datos de ancestría para tu muestra.".to_owned()
        } else {
            data.message.clone()
        };
        return view! { <p class="empty-state">{message}</p> }.into_any();
    }

    let top = top_regions(&data.countries, TOP_COUNTRIES);
    let headline = top.first().map_or_else(|| "N/A".to_owned(), |(name, _)| name.clone());
    let segments: Vec<(String, u32, String)> =
        top.iter().enumerate().map(|(i, (name, p))| (name.clone(), pct(*p), color(i))).collect();

    let mut continents = data.continents.clone();
    continents.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    let mut countries = data.countries.clone();
    countries.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    view! {
        <div class="stat-grid">
            <StatCard title="Variantes analizadas" value=data.total_variants.to_string()/>
            <StatCard title="Ascendencia principal" value=headline/>
            <StatCard title="Países detectados" value=data.countries.len().to_string()/>
        </div>

        <section class="report-card">
            <h2>"Por continente"</h2>
            {continents
                .into_iter()
                .enumerate()
                .map(|(i, c)| {
                    view! {
                        <PercentBar
                            label=c.name.clone()
                            percent=pct(c.percentage)
                            color=color(i)
                            caption=format!("{:.1}%", c.percentage)
                        />
                    }
                })
                .collect_view()}
        </section>

        <section class="report-card">
            <h2>"Por país"</h2>
            <StackedBar segments=segments/>
            <ul class="region-list">
                {countries
                    .into_iter()
                    .map(|c| {
                        let label = format!("{} · {:.1}%", c.name, c.percentage);
                        view! {
                            <li>
                                <button class="region-list__item" on:click=move |_| selected.set(Some(c.clone()))>
                                    {label}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
    .into_any()
}

#[component]
fn IndigenousSection(data: IndigenousData) -> impl IntoView {
    let title = if data.country.is_empty() {
        "Pueblos originarios".to_owned()
    } else {
        format!("Pueblos originarios de {}", data.country)
    };
    let mut peoples = data.indigenous_peoples;
    peoples.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    view! {
        <section class="report-card">
            <h2>{title}</h2>
            {if peoples.is_empty() {
                let message = if data.message.is_empty() {
                    "No se detectaron marcadores de pueblos originarios.".to_owned()
                } else {
                    data.message
                };
                view! { <p class="empty-state">{message}</p> }.into_any()
            } else {
                peoples
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| {
                        view! {
                            <PercentBar
                                label=p.name.clone()
                                percent=pct(p.percentage)
                                color=color(i + 2)
                                caption=format!("{:.1}%", p.percentage)
                            />
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
