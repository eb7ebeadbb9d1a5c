//! Modal form for adding a variant to the reference database.

use leptos::prelude::*;
use schema::options;

#[cfg(feature = "csr")]
use crate::state::ui::{ToastKind, notify};
use crate::state::ui::UiState;
use crate::state::variant_form::VariantForm;

fn pairs(values: &[&'static str]) -> Vec<(&'static str, &'static str)> {
    values.iter().map(|v| (*v, *v)).collect()
}

#[component]
fn TextField(
    form: RwSignal<VariantForm>,
    key: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=key>{label}</label>
            <input
                id=key
                type="text"
                placeholder=placeholder
                readonly=readonly
                prop:value=move || form.with(|f| f.get(key).to_owned())
                on:input=move |ev| form.update(|f| f.set(key, event_target_value(&ev)))
            />
        </div>
    }
}

/// Select with an optional `Otra` free-text escape.
#[component]
fn SelectField(
    form: RwSignal<VariantForm>,
    key: &'static str,
    label: &'static str,
    #[prop(into)] choices: Signal<Vec<(&'static str, &'static str)>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=key>{label}</label>
            <select
                id=key
                prop:value=move || form.with(|f| f.get(key).to_owned())
                on:change=move |ev| form.update(|f| f.set(key, event_target_value(&ev)))
            >
                <option value="">"Seleccionar..."</option>
                {move || {
                    choices
                        .get()
                        .into_iter()
                        .map(|(value, text)| view! { <option value=value>{text}</option> })
                        .collect_view()
                }}
            </select>
            <Show when=move || form.with(|f| f.shows_other(key))>
                <input
                    class="form-group__other"
                    type="text"
                    placeholder="Especificar..."
                    prop:value=move || form.with(|f| f.other.get(key).cloned().unwrap_or_default())
                    on:input=move |ev| form.update(|f| f.set_other(key, event_target_value(&ev)))
                />
            </Show>
        </div>
    }
}

#[component]
pub fn AddVariantModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(VariantForm::new(&crate::util::date::today()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.loading) {
            return;
        }
        let mut body = None;
        form.update(|f| {
            body = f.payload();
            f.loading = body.is_some();
        });
        let Some(body) = body else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_variant(&body).await {
                Ok(()) => {
                    notify(ui, ToastKind::Success, format!("Variante {} agregada.", body.rsid));
                    form.set(VariantForm::new(&crate::util::date::today()));
                    on_created.run(());
                    on_close.run(());
                }
                Err(err) => form.update(|f| f.fail(&err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (body, ui, on_created);
            form.update(|f| f.fail(schema::CONNECTION_ERROR));
        }
    };

    let categories: Vec<(&'static str, &'static str)> = options::CATEGORIES.to_vec();
    let continents: Vec<(&'static str, &'static str)> = options::CONTINENTS.iter().map(|c| (c.name, c.name)).collect();
    let countries = Signal::derive(move || form.with(|f| pairs(f.countries())));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide add-variant" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>"Agregar Nueva Variante Genética"</h2>
                    <button class="dialog__close" aria-label="Cerrar" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                <form class="add-variant__form" on:submit=on_submit>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="form-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </Show>

                    <section class="add-variant__section">
                        <h3>"Información Básica"</h3>
                        <div class="grid-2">
                            <TextField form=form key="rsid" label="rsID *" placeholder="ej: rs12913832"/>
                            <TextField form=form key="genotipo" label="Genotipo *" placeholder="ej: CC, AC, AA"/>
                        </div>
                        <div class="form-group">
                            <label for="fenotipo">"Fenotipo *"</label>
                            <textarea
                                id="fenotipo"
                                rows="3"
                                placeholder="Descripción del fenotipo"
                                prop:value=move || form.with(|f| f.get("fenotipo").to_owned())
                                on:input=move |ev| form.update(|f| f.set("fenotipo", event_target_value(&ev)))
                            ></textarea>
                        </div>
                        <div class="grid-2">
                            <SelectField form=form key="categoria" label="Categoría" choices=categories/>
                            <SelectField form=form key="nivel_riesgo" label="Nivel de Riesgo" choices=pairs(&options::RISK_LEVELS)/>
                        </div>
                    </section>

                    <section class="add-variant__section">
                        <h3>"Información Genómica"</h3>
                        <div class="grid-2">
                            <TextField form=form key="cromosoma" label="Cromosoma" placeholder="ej: 15"/>
                            <TextField form=form key="posicion" label="Posición" placeholder="ej: 28365618"/>
                            <TextField form=form key="alelo_referencia" label="Alelo Referencia" placeholder="ej: A"/>
                            <TextField form=form key="alelo_alternativo" label="Alelo Alternativo" placeholder="ej: G"/>
                            <TextField form=form key="magnitud_efecto" label="Magnitud del Efecto" placeholder="ej: 2.5"/>
                            <TextField form=form key="fecha_actualizacion" label="Fecha de Actualización"/>
                        </div>
                    </section>

                    <section class="add-variant__section">
                        <h3>"Evidencia"</h3>
                        <div class="grid-2">
                            <SelectField
                                form=form
                                key="fuente_base_datos"
                                label="Fuente Base de Datos"
                                choices=pairs(&options::DATABASE_SOURCES)
                            />
                            <SelectField form=form key="tipo_evidencia" label="Tipo de Evidencia" choices=pairs(&options::EVIDENCE_TYPES)/>
                        </div>
                    </section>

                    <section class="add-variant__section">
                        <h3>"Frecuencias Poblacionales"</h3>
                        <div class="grid-2">
                            <SelectField form=form key="continente" label="Continente" choices=continents/>
                            <TextField form=form key="poblacion_continente" label="Población Continente" readonly=true/>
                            <TextField form=form key="af_continente" label="Frecuencia Alélica Continente" placeholder="ej: 0.25"/>
                            <SelectField
                                form=form
                                key="fuente_continente"
                                label="Fuente Continente"
                                choices=pairs(&options::ANCESTRY_SOURCES)
                            />
                            <SelectField form=form key="pais" label="País" choices=countries/>
                            <TextField form=form key="poblacion_pais" label="Población País" readonly=true/>
                            <TextField form=form key="af_pais" label="Frecuencia Alélica País" placeholder="ej: 0.18"/>
                            <SelectField form=form key="fuente_pais" label="Fuente País" choices=pairs(&options::ANCESTRY_SOURCES)/>
                        </div>
                    </section>

                    <footer class="dialog__actions">
                        <button type="button" class="btn btn--ghost" on:click=move |_| on_close.run(())>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || form.with(|f| f.loading)>
                            {move || if form.with(|f| f.loading) { "Guardando..." } else { "Agregar Variante" }}
                        </button>
                    </footer>
                </form>
            </div>
        </div>
    }
}
