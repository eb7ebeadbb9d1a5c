//! Variant database browser with the add-variant modal.

use leptos::prelude::*;
use schema::Variant;
use schema::options::CATEGORIES;

use crate::components::add_variant_modal::AddVariantModal;
use crate::components::layout::BackOfficeLayout;
use crate::components::pagination::Pagination;
use crate::components::remote_view::{RemoteStatus, load_field};
use crate::net::api;
use crate::state::auth::Area;
use crate::state::variants::{PHENOTYPE_PREVIEW, SORT_KEYS, VariantsState};

fn dash(value: &str) -> String {
    if value.trim().is_empty() { "-".to_owned() } else { value.to_owned() }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

fn category_label(key: &str) -> String {
    CATEGORIES.iter().find(|(k, _)| *k == key).map_or_else(|| dash(key), |(_, label)| (*label).to_owned())
}

#[component]
pub fn AdminVariantsPage() -> impl IntoView {
    view! {
        <BackOfficeLayout
            area=Area::BackOffice
            title="Base de datos de variantes genéticas"
            subtitle="Consulta y agrega variantes de referencia."
        >
            <AdminVariants/>
        </BackOfficeLayout>
    }
}

#[component]
fn AdminVariants() -> impl IntoView {
    let state = RwSignal::new(VariantsState::default());
    let load = move || load_field(state, |s| &mut s.remote, api::list_variants);
    load();

    let page = Memo::new(move |_| state.with(VariantsState::page));

    view! {
        <div class="stat-grid stat-grid--compact">
            <div class="stat-pill">{move || format!("Total variantes: {}", state.with(|s| s.variants().len()))}</div>
            <div class="stat-pill">{move || format!("Mostrando: {}", page.with(|p| p.total))}</div>
            <Show when=move || state.with(|s| !crate::util::table::is_all_category(&s.query.category))>
                <div class="stat-pill">
                    {move || format!("Categoría filtro: {}", state.with(|s| category_label(&s.query.category)))}
                </div>
            </Show>
        </div>

        <div class="table-toolbar">
            <input
                class="table-toolbar__search"
                type="search"
                placeholder="Buscar por rsID, fenotipo, cromosoma o país..."
                prop:value=move || state.with(|s| s.query.search.clone())
                on:input=move |ev| state.update(|s| s.query.set_search(event_target_value(&ev)))
            />
            <select
                class="table-toolbar__select"
                prop:value=move || state.with(|s| s.query.category.clone())
                on:change=move |ev| state.update(|s| s.query.set_category(event_target_value(&ev)))
            >
                <option value="todos">"Todas las categorías"</option>
                {move || {
                    state
                        .with(VariantsState::categories)
                        .into_iter()
                        .map(|c| view! { <option value=c.clone()>{category_label(&c)}</option> })
                        .collect_view()
                }}
            </select>
            <select
                class="table-toolbar__select"
                title="Ordenar por"
                prop:value=move || state.with(|s| s.sort_key().to_owned())
                on:change=move |ev| state.update(|s| s.set_sort_key(&event_target_value(&ev)))
            >
                {SORT_KEYS.iter().map(|(k, l)| view! { <option value=*k>{*l}</option> }).collect_view()}
            </select>
            <button
                class="btn btn--ghost"
                title="Invertir orden"
                on:click=move |_| state.update(VariantsState::toggle_sort_dir)
            >
                {move || state.with(|s| s.sort_dir().arrow())}
            </button>
            <button class="btn btn--primary" on:click=move |_| state.update(|s| s.show_add_modal = true)>
                "Agregar variante"
            </button>
        </div>

        <RemoteStatus
            loading=Signal::derive(move || state.with(|s| s.remote.loading))
            error=Signal::derive(move || state.with(|s| s.remote.error.clone()))
            on_retry=Callback::new(move |()| load())
            loading_text="Cargando variantes..."
        />

        <div class="table-scroll">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"rsID"</th>
                        <th>"Genotipo"</th>
                        <th>"Fenotipo"</th>
                        <th>"Categoría"</th>
                        <th>"Magnitud"</th>
                        <th>"Nivel Riesgo"</th>
                        <th>"Fuente"</th>
                        <th>"Actualización"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || page.get().items key=|v| v.id let:variant>
                        <VariantRow variant=variant state=state/>
                    </For>
                </tbody>
            </table>
            <Show when=move || !state.with(|s| s.remote.loading) && page.with(|p| p.total == 0)>
                <p class="empty-state">"No se encontraron variantes."</p>
            </Show>
        </div>

        <Pagination
            page=Signal::derive(move || page.with(|p| p.page))
            total_pages=Signal::derive(move || page.with(|p| p.total_pages))
            on_change=Callback::new(move |n| state.update(|s| s.query.page = n))
        />

        <Show when=move || state.with(|s| s.show_add_modal)>
            <AddVariantModal
                on_close=Callback::new(move |()| state.update(|s| s.show_add_modal = false))
                on_created=Callback::new(move |()| {
                    state.update(|s| s.show_add_modal = false);
                    load();
                })
            />
        </Show>
    }
}

#[component]
fn VariantRow(variant: Variant, state: RwSignal<VariantsState>) -> impl IntoView {
    let id = variant.id;
    let expanded = move || state.with(|s| s.expanded == Some(id));
    let risk = variant.risk();
    let v = StoredValue::new(variant);
    let field = move |f: fn(&Variant) -> String| v.with_value(f);

    view! {
        <tr class:data-table__row--open=expanded>
            <td class="mono">{field(|v| v.rsid.clone())}</td>
            <td class="mono">{field(|v| dash(&v.genotipo))}</td>
            <td title=field(|v| v.fenotipo.clone())>{field(|v| v.short_fenotipo(PHENOTYPE_PREVIEW))}</td>
            <td>
                <span class="badge" style=field(|v| format!("background: {};", v.category_color()))>
                    {field(|v| category_label(&v.categoria))}
                </span>
            </td>
            <td>{field(|v| opt(v.magnitud_efecto))}</td>
            <td>
                <span class="badge" style=format!("background: {};", risk.color())>{field(|v| dash(&v.nivel_riesgo))}</span>
            </td>
            <td>{field(|v| dash(&v.fuente_base_datos))}</td>
            <td>{field(|v| dash(&v.fecha_actualizacion))}</td>
            <td>
                <button class="btn btn--small btn--ghost" on:click=move |_| state.update(|s| s.toggle_expanded(id))>
                    {move || if expanded() { "Ocultar" } else { "Detalles" }}
                </button>
            </td>
        </tr>
        <Show when=expanded>
            <tr class="data-table__detail">
                <td colspan="9">
                    <div class="detail-grid">
                        <div class="detail-grid__wide">
                            <span class="detail-label">"Fenotipo"</span>
                            <p>{field(|v| dash(&v.fenotipo))}</p>
                        </div>
                        <DetailItem label="Alelo Referencia" value=field(|v| dash(&v.alelo_referencia))/>
                        <DetailItem label="Alelo Alternativo" value=field(|v| dash(&v.alelo_alternativo))/>
                        <DetailItem label="Cromosoma" value=field(|v| dash(&v.cromosoma))/>
                        <DetailItem label="Posición" value=field(|v| opt(v.posicion))/>
                        <DetailItem label="Tipo de evidencia" value=field(|v| dash(&v.tipo_evidencia))/>
                        <DetailItem label="Continente" value=field(|v| dash(&v.continente))/>
                        <DetailItem label="AF Continente" value=field(|v| opt(v.af_continente))/>
                        <DetailItem label="Fuente continente" value=field(|v| dash(&v.fuente_continente))/>
                        <DetailItem label="Población continente" value=field(|v| dash(&v.poblacion_continente))/>
                        <DetailItem label="País" value=field(|v| dash(&v.pais))/>
                        <DetailItem label="AF País" value=field(|v| opt(v.af_pais))/>
                        <DetailItem label="Fuente país" value=field(|v| dash(&v.fuente_pais))/>
                        <DetailItem label="Población país" value=field(|v| dash(&v.poblacion_pais))/>
                    </div>
                </td>
            </tr>
        </Show>
    }
}

#[component]
fn DetailItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-grid__item">
            <span class="detail-label">{label}</span>
            <span>{value}</span>
        </div>
    }
}
