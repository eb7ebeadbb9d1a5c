//! Pharmacogenetics report: drug response per body system.

use leptos::prelude::*;
use schema::report::{Drug, DrugSystem};

use crate::components::bars::{PercentBar, StatCard};
use crate::components::layout::PatientLayout;
use crate::components::remote_view::{RemoteStatus, load_into};
use crate::net::api;
use crate::state::request::Remote;
use crate::util::charts::{GROUP_COLORS, Impact, drug_summary, filter_drug_systems, percent_of};

const IMPACT_FILTERS: [(&str, &str); 4] = [("todos", "Todos"), ("alto", "Alto"), ("medio", "Medio"), ("bajo", "Bajo")];

#[component]
pub fn PharmacogeneticsPage() -> impl IntoView {
    view! {
        <PatientLayout
            title="Farmacogenética"
            subtitle="Cómo tu genética influye en la respuesta a los medicamentos."
        >
            <PharmacogeneticsReport/>
        </PatientLayout>
    }
}

#[component]
fn PharmacogeneticsReport() -> impl IntoView {
    let remote = RwSignal::new(Remote::<Vec<DrugSystem>>::default());
    let search = RwSignal::new(String::new());
    let impact = RwSignal::new("todos".to_owned());
    let load = move || load_into(remote, api::fetch_pharmacogenetics);
    load();

    let summary = Memo::new(move |_| remote.with(|r| drug_summary(r.data.as_deref().unwrap_or_default())));
    let visible = Memo::new(move |_| {
        remote.with(|r| {
            let systems = r.data.as_deref().unwrap_or_default();
            search.with(|s| impact.with(|i| filter_drug_systems(systems, s, i)))
        })
    });
    let has_data = move || remote.with(|r| r.data.as_ref().is_some_and(|d| !d.is_empty()));

    view! {
        <RemoteStatus
            loading=Signal::derive(move || remote.with(|r| r.loading))
            error=Signal::derive(move || remote.with(|r| r.error.clone()))
            on_retry=Callback::new(move |()| load())
        />
        <Show when=move || remote.with(|r| r.data.as_ref().is_some_and(Vec::is_empty))>
            <p class="empty-state">"No hay datos de farmacogenética para tu muestra."</p>
        </Show>
        <Show when=has_data>
            <div class="stat-grid">
                <StatCard title="Fármacos analizados" value=Signal::derive(move || summary.with(|s| s.total().to_string()))/>
                <StatCard title="Impacto alto" value=Signal::derive(move || summary.with(|s| s.high.to_string())) accent=Impact::High.color()/>
                <StatCard title="Impacto medio" value=Signal::derive(move || summary.with(|s| s.medium.to_string())) accent=Impact::Medium.color()/>
                <StatCard title="Impacto bajo" value=Signal::derive(move || summary.with(|s| s.low.to_string())) accent=Impact::Low.color()/>
            </div>
            <div class="table-toolbar">
                <input
                    class="table-toolbar__search"
                    type="search"
                    placeholder="Buscar sistema o fármaco..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="table-toolbar__select"
                    prop:value=move || impact.get()
                    on:change=move |ev| impact.set(event_target_value(&ev))
                >
                    {IMPACT_FILTERS.iter().map(|(k, l)| view! { <option value=*k>{*l}</option> }).collect_view()}
                </select>
            </div>
            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=|| view! { <p class="empty-state">"Ningún fármaco coincide con la búsqueda."</p> }
            >
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, system)| view! { <DrugSystemCard system=system index=i/> })
                        .collect_view()
                }}
            </Show>
        </Show>
    }
}

#[component]
fn DrugSystemCard(system: DrugSystem, index: usize) -> impl IntoView {
    let color = if system.color.is_empty() { GROUP_COLORS[index % GROUP_COLORS.len()].to_owned() } else { system.color.clone() };

    view! {
        <section class="report-card drug-system" style=format!("border-left-color: {color};")>
            <header class="drug-system__header">
                <h2>{system.name.clone()}</h2>
                <p>{system.role.clone()}</p>
            </header>
            {system.drugs.into_iter().map(|drug| view! { <DrugRow drug=drug/> }).collect_view()}
        </section>
    }
}

#[component]
fn DrugRow(drug: Drug) -> impl IntoView {
    let impact = Impact::drug(drug.magnitud);
    let meta = format!(
        "{} · cromosoma {} · genotipo {} · magnitud {:.1}",
        drug.rsid, drug.cromosoma, drug.genotipo, drug.magnitud
    );
    view! {
        <div class="drug-row">
            <PercentBar
                label=drug.name.clone()
                percent=percent_of(drug.percentage, 100.0)
                color=impact.color()
                caption=format!("{:.0}% · impacto {}", drug.percentage, impact.label().to_lowercase())
            />
            <p class="drug-row__meta">{meta}</p>
            {(!drug.fenotipo.is_empty()).then(|| view! { <p class="drug-row__note">{drug.fenotipo.clone()}</p> })}
        </div>
    }
}
