//! Traits report grouped into the fixed trait families.

use leptos::prelude::*;
use schema::report::TraitsData;

use crate::components::bars::{PercentBar, StatCard};
use crate::components::layout::PatientLayout;
use crate::components::remote_view::{RemoteStatus, load_into};
use crate::net::api;
use crate::state::request::Remote;
use crate::util::charts::{TraitGroup, level_label, percent_of, trait_groups, trait_percentage};

#[component]
pub fn TraitsPage() -> impl IntoView {
    view! {
        <PatientLayout title="Rasgos" subtitle="Cómo tus variantes se asocian a rasgos de metabolismo, rendimiento, cognición y apariencia.">
            <TraitsReport/>
        </PatientLayout>
    }
}

#[component]
fn TraitsReport() -> impl IntoView {
    let remote = RwSignal::new(Remote::<TraitsData>::default());
    let expanded = RwSignal::new(None::<String>);
    let load = move || load_into(remote, api::fetch_traits);
    load();

    let groups = Memo::new(move |_| remote.with(|r| r.data.as_ref().map(|d| trait_groups(&d.traits)).unwrap_or_default()));

    view! {
        <RemoteStatus
            loading=Signal::derive(move || remote.with(|r| r.loading))
            error=Signal::derive(move || remote.with(|r| r.error.clone()))
            on_retry=Callback::new(move |()| load())
        />
        <Show when=move || remote.with(|r| r.data.as_ref().is_some_and(|d| d.traits.is_empty()))>
            <p class="empty-state">"Aún no hay rasgos disponibles para tu muestra."</p>
        </Show>
        <Show when=move || !groups.with(Vec::is_empty)>
            <div class="stat-grid">
                <StatCard title="Rasgos analizados" value=Signal::derive(move || groups.with(|g| g.iter().map(|x| x.traits.len()).sum::<usize>().to_string()))/>
                <StatCard title="Grupos" value=Signal::derive(move || groups.with(Vec::len).to_string())/>
            </div>
            <section class="report-card">
                <h2>"Resumen por grupo"</h2>
                {move || {
                    groups
                        .get()
                        .into_iter()
                        .map(|g| {
                            view! {
                                <PercentBar
                                    label=g.name.clone()
                                    percent=g.value
                                    color=g.color
                                    caption=format!("{}% · {}", g.value, g.level())
                                />
                            }
                        })
                        .collect_view()
                }}
            </section>
            {move || {
                groups.get().into_iter().map(|g| view! { <TraitGroupCard group=g expanded=expanded/> }).collect_view()
            }}
        </Show>
    }
}

#[component]
fn TraitGroupCard(group: TraitGroup, expanded: RwSignal<Option<String>>) -> impl IntoView {
    let key = group.name.clone();
    let is_open = {
        let key = key.clone();
        move || expanded.get().as_deref() == Some(key.as_str())
    };
    let toggle = move |_| {
        let key = key.clone();
        expanded.update(|e| *e = if e.as_deref() == Some(key.as_str()) { None } else { Some(key) });
    };

    let title = group.name.clone();
    let badge = format!("{} rasgos · {}", group.traits.len(), group.level());
    let color = group.color;
    let traits = group.traits;

    view! {
        <section class="report-card trait-group" style=format!("border-left-color: {color};")>
            <button class="trait-group__header" on:click=toggle>
                <h3>{title}</h3>
                <span class="badge">{badge}</span>
            </button>
            <Show when=is_open>
                <ul class="trait-list">
                    {traits
                        .iter()
                        .map(|t| {
                            let p = trait_percentage(t);
                            view! {
                                <li class="trait-list__item">
                                    <PercentBar
                                        label=t.fenotipo.clone()
                                        percent=percent_of(p, 100.0)
                                        color=color
                                        caption=level_label(p)
                                    />
                                    <p class="trait-list__meta">
                                        {format!("{} · genotipo {} · cromosoma {}", t.rsid, t.genotipo, t.cromosoma)}
                                    </p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </section>
    }
}
