//! Modal listing the variants detected for one patient.

use leptos::prelude::*;

use super::pagination::Pagination;
use crate::state::patient_variants::{ALL_CATEGORIES, PatientVariantsState};
use crate::state::variants::PHENOTYPE_PREVIEW;

/// Open the modal for `user_id` and load its variants.
pub fn open_patient_variants(state: RwSignal<PatientVariantsState>, user_id: i64, name: String) {
    let mut ticket = 0;
    state.update(|s| ticket = s.open(user_id, name));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_patient_variants(user_id).await;
        state.update(|s| {
            s.finish(ticket, result);
        });
    });
    #[cfg(not(feature = "csr"))]
    state.update(|s| {
        s.finish(ticket, Err(crate::net::error::ApiError::Network));
    });
}

#[component]
pub fn PatientVariantsModal(state: RwSignal<PatientVariantsState>) -> impl IntoView {
    let close = move || state.update(PatientVariantsState::close);
    let page = Memo::new(move |_| state.with(PatientVariantsState::page));

    view! {
        <Show when=move || state.with(PatientVariantsState::is_open)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog dialog--wide patient-variants" on:click=move |ev| ev.stop_propagation()>
                    <header class="dialog__header">
                        <h2>{move || format!("Variantes de {}", state.with(|s| s.patient_name.clone()))}</h2>
                        <button class="dialog__close" aria-label="Cerrar" on:click=move |_| close()>
                            "×"
                        </button>
                    </header>

                    <div class="table-toolbar">
                        <input
                            class="table-toolbar__search"
                            type="search"
                            placeholder="Buscar por rsID, fenotipo o cromosoma..."
                            prop:value=move || state.with(|s| s.query.search.clone())
                            on:input=move |ev| state.update(|s| s.query.set_search(event_target_value(&ev)))
                        />
                        <select
                            class="table-toolbar__select"
                            prop:value=move || state.with(|s| s.query.category.clone())
                            on:change=move |ev| state.update(|s| s.query.set_category(event_target_value(&ev)))
                        >
                            <option value=ALL_CATEGORIES>"Todas las categorías"</option>
                            {move || {
                                state
                                    .with(PatientVariantsState::categories)
                                    .into_iter()
                                    .map(|c| {
                                        let value = c.clone();
                                        view! { <option value=value>{c}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <Show
                        when=move || !state.with(|s| s.remote.loading)
                        fallback=|| view! { <p class="muted">"Cargando variantes..."</p> }
                    >
                        <Show when=move || state.with(|s| s.remote.error.is_some())>
                            <p class="form-error">{move || state.with(|s| s.remote.error.clone().unwrap_or_default())}</p>
                        </Show>
                        <p class="muted">{move || format!("{} variantes", page.get().total)}</p>
                        <div class="table-wrapper">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"rsID"</th>
                                        <th>"Genotipo"</th>
                                        <th>"Cromosoma"</th>
                                        <th>"Categoría"</th>
                                        <th>"Riesgo"</th>
                                        <th>"Fenotipo"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        page.get()
                                            .items
                                            .into_iter()
                                            .map(|row| {
                                                let v = row.0;
                                                let risk = v.risk();
                                                view! {
                                                    <tr>
                                                        <td class="mono">{v.rsid.clone()}</td>
                                                        <td class="mono">{v.genotipo.clone()}</td>
                                                        <td>{v.cromosoma.clone()}</td>
                                                        <td>
                                                            <span class="badge" style=format!("background: {};", v.category_color())>
                                                                {v.categoria.clone()}
                                                            </span>
                                                        </td>
                                                        <td style=format!("color: {};", risk.color())>{risk.label()}</td>
                                                        <td title=v.fenotipo.clone()>{v.short_fenotipo(PHENOTYPE_PREVIEW)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </tbody>
                            </table>
                        </div>
                        <Pagination
                            page=Signal::derive(move || page.get().page)
                            total_pages=Signal::derive(move || page.get().total_pages)
                            on_change=Callback::new(move |n| state.update(|s| s.query.page = n))
                        />
                    </Show>
                </div>
            </div>
        </Show>
    }
}
