//! Genetic report administration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists every non-staff user with their report status (one status request
//! per user after the user list loads). From a row the operator can upload,
//! replace or delete the genotype file, change the service status, and open
//! the patient's detected variants.
//!
//! Genotype files are validated locally before being read: the filename
//! must carry the patient's RUT (and match the sample code when one exists).

use leptos::prelude::*;
use schema::ServiceStatus;

use crate::components::layout::BackOfficeLayout;
use crate::components::patient_variants_modal::{PatientVariantsModal, open_patient_variants};
use crate::components::remote_view::{RemoteStatus, load_field};
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::auth::Area;
use crate::state::patient_variants::PatientVariantsState;
use crate::state::patients::{PatientRow, PatientsState, ReportDialog, ReportFilter, patients_only};
use crate::state::ui::{ToastKind, UiState, notify};

async fn load_rows() -> Result<Vec<PatientRow>, ApiError> {
    let users = patients_only(api::list_users().await?);
    let mut rows = Vec::with_capacity(users.len());
    for user in &users {
        let status = match api::fetch_user_report_status(user.id).await {
            Ok(status) => Some(status),
            Err(err) => {
                log::debug!("report status for user {} unavailable: {err}", user.id);
                None
            }
        };
        rows.push(PatientRow::new(user, status));
    }
    Ok(rows)
}

#[component]
pub fn AdminReportsPage() -> impl IntoView {
    view! {
        <BackOfficeLayout
            area=Area::BackOffice
            title="Administrar reportes genéticos"
            subtitle="Sube los archivos de genotipo de cada paciente y gestiona el estado de su servicio."
        >
            <AdminReports/>
        </BackOfficeLayout>
    }
}

#[component]
fn AdminReports() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let state = RwSignal::new(PatientsState::default());
    let variants = RwSignal::new(PatientVariantsState::default());
    let load = move || load_field(state, |s| &mut s.remote, load_rows);
    load();

    let visible = Memo::new(move |_| state.with(PatientsState::visible));

    let change_status = Callback::new(move |(user_id, raw): (i64, String)| {
        let status = ServiceStatus::parse(&raw);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::update_service_status(user_id, status).await {
                Ok(()) => {
                    state.update(|s| s.set_service_status(user_id, status));
                    notify(ui, ToastKind::Success, "Estado actualizado correctamente");
                }
                Err(err) => notify(ui, ToastKind::Error, format!("Error al actualizar el estado: {err}")),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, status);
            notify(ui, ToastKind::Error, schema::CONNECTION_ERROR);
        }
    });

    view! {
        <div class="stat-grid stat-grid--compact">
            <div class="stat-pill">{move || format!("{} pacientes", state.with(|s| s.rows().len()))}</div>
            <div class="stat-pill stat-pill--ok">{move || format!("{} con reporte", state.with(PatientsState::with_report_count))}</div>
            <div class="stat-pill stat-pill--warn">{move || format!("{} sin reporte", state.with(PatientsState::without_report_count))}</div>
        </div>

        <div class="table-toolbar">
            <input
                class="table-toolbar__search"
                type="search"
                placeholder="Buscar por nombre, RUT o ID..."
                prop:value=move || state.with(|s| s.search.clone())
                on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
            />
            <select
                class="table-toolbar__select"
                prop:value=move || state.with(|s| s.filter.key())
                on:change=move |ev| state.update(|s| s.filter = ReportFilter::parse(&event_target_value(&ev)))
            >
                {ReportFilter::ALL.iter().map(|f| view! { <option value=f.key()>{f.label()}</option> }).collect_view()}
            </select>
            <button class="btn btn--ghost" on:click=move |_| load()>
                "Actualizar"
            </button>
        </div>

        <RemoteStatus
            loading=Signal::derive(move || state.with(|s| s.remote.loading))
            error=Signal::derive(move || state.with(|s| s.remote.error.clone()))
            on_retry=Callback::new(move |()| load())
            loading_text="Cargando pacientes..."
        />

        <div class="table-scroll">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Paciente"</th>
                        <th>"RUT"</th>
                        <th>"Sample ID"</th>
                        <th>"Reporte"</th>
                        <th>"Estado del servicio"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || visible.get() key=|row| (row.user_id, row.has_report, row.service_status) let:row>
                        <PatientTableRow row=row variants=variants state=state on_status=change_status/>
                    </For>
                </tbody>
            </table>
            <Show when=move || !state.with(|s| s.remote.loading) && visible.with(Vec::is_empty)>
                <p class="empty-state">"No hay pacientes que coincidan con el filtro."</p>
            </Show>
        </div>

        <ReportDialogs state=state/>
        <PatientVariantsModal state=variants/>
    }
}

#[component]
fn PatientTableRow(
    row: PatientRow,
    variants: RwSignal<PatientVariantsState>,
    state: RwSignal<PatientsState>,
    on_status: Callback<(i64, String)>,
) -> impl IntoView {
    let id = row.user_id;
    let name = row.name.clone();
    let report = match (&row.report_name, &row.report_date) {
        (Some(file), Some(date)) => format!("{file} ({})", crate::util::date::date_part(date)),
        (Some(file), None) => file.clone(),
        _ if row.has_report => "Subido".to_owned(),
        _ => "Sin reporte".to_owned(),
    };
    let has_report = row.has_report;
    let status = row.service_status.as_str();

    view! {
        <tr>
            <td class="mono">{row.code.clone()}</td>
            <td>
                <div class="cell-main">{row.name.clone()}</div>
                <div class="cell-sub">{row.email.clone()}</div>
            </td>
            <td>{row.rut.clone()}</td>
            <td class="mono">{row.sample_code.clone().unwrap_or_else(|| "-".to_owned())}</td>
            <td>
                <span class="badge" class:badge--ok=has_report class:badge--muted={!has_report}>
                    {report}
                </span>
            </td>
            <td>
                <select prop:value=status on:change=move |ev| on_status.run((id, event_target_value(&ev)))>
                    {ServiceStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td class="row-actions">
                {if has_report {
                    view! {
                        <button class="btn btn--small" on:click=move |_| state.update(|s| s.open_dialog(ReportDialog::Replace, id))>
                            "Reemplazar"
                        </button>
                        <button
                            class="btn btn--small btn--danger"
                            title="Eliminar reporte"
                            on:click=move |_| state.update(|s| s.open_dialog(ReportDialog::Delete, id))
                        >
                            "Eliminar"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <button class="btn btn--small btn--primary" on:click=move |_| state.update(|s| s.open_dialog(ReportDialog::Upload, id))>
                            "Subir archivo"
                        </button>
                    }
                        .into_any()
                }}
                <button class="btn btn--small btn--ghost" on:click=move |_| open_patient_variants(variants, id, name.clone())>
                    "Ver variantes"
                </button>
            </td>
        </tr>
    }
}

/// Upload/replace and delete confirmation dialogs for the targeted row.
#[component]
fn ReportDialogs(state: RwSignal<PatientsState>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();
    let close = move || state.update(PatientsState::close_dialog);
    let dialog = move || state.with(|s| s.dialog.map(|(d, _)| d));
    let target = move || state.with(|s| s.dialog_row().cloned());

    let on_upload = move |_| {
        let Some(row) = target() else {
            return;
        };
        if state.with_untracked(|s| s.saving) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let Some(file) = file_input.get_untracked().and_then(|i| i.files()).and_then(|f| f.get(0)) else {
                state.update(|s| s.dialog_error = Some("Selecciona un archivo.".to_owned()));
                return;
            };
            let filename = file.name();
            let rut = match crate::util::validation::validate_genetic_file(&filename, row.sample_code.as_deref(), &row.rut) {
                Ok(rut) => rut,
                Err(msg) => {
                    state.update(|s| s.dialog_error = Some(msg));
                    return;
                }
            };
            state.update(|s| {
                s.saving = true;
                s.dialog_error = None;
            });
            leptos::task::spawn_local(async move {
                let result = async {
                    let file_content = api::read_file_text(&file).await?;
                    let upload = schema::admin::GeneticFileUpload {
                        user_id: row.user_id,
                        file_content,
                        rut_from_file: rut,
                        filename: filename.clone(),
                    };
                    api::upload_genetic_file(&upload).await
                }
                .await;
                match result {
                    Ok(snps) => {
                        let today = crate::util::date::today();
                        state.update(|s| {
                            s.mark_uploaded(row.user_id, &filename, &today);
                            s.close_dialog();
                        });
                        notify(ui, ToastKind::Success, crate::state::patients::upload_message(snps));
                    }
                    Err(err) => state.update(|s| {
                        s.saving = false;
                        s.dialog_error = Some(format!("Error al procesar el archivo: {err}"));
                    }),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (row, file_input, ui);
            state.update(|s| s.dialog_error = Some(schema::CONNECTION_ERROR.to_owned()));
        }
    };

    let on_delete = move |_| {
        let Some(row) = target() else {
            return;
        };
        if state.with_untracked(|s| s.saving) {
            return;
        }
        state.update(|s| s.saving = true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::delete_genetic_file(row.user_id).await {
                Ok(count) => {
                    state.update(|s| {
                        s.mark_deleted(row.user_id);
                        s.close_dialog();
                    });
                    notify(ui, ToastKind::Success, format!("Reporte eliminado correctamente. {count} variantes removidas."));
                }
                Err(err) => state.update(|s| {
                    s.saving = false;
                    s.dialog_error = Some(format!("Error al eliminar el archivo: {err}"));
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = row;
            state.update(|s| {
                s.saving = false;
                s.dialog_error = Some(schema::CONNECTION_ERROR.to_owned());
            });
        }
    };

    let patient_name = move || target().map(|r| r.name).unwrap_or_default();
    let expected_name = move || {
        target().map(|r| match r.sample_code {
            Some(code) => format!("El archivo debe llamarse {code}.txt"),
            None => "Formato del nombre: nombre_rut.txt (ej: fayala_205165851.txt)".to_owned(),
        })
    };
    let saving = move || state.with(|s| s.saving);
    let error = move || state.with(|s| s.dialog_error.clone());

    view! {
        <Show when=move || matches!(dialog(), Some(ReportDialog::Upload | ReportDialog::Replace))>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>
                        {move || if dialog() == Some(ReportDialog::Replace) { "Reemplazar reporte genético" } else { "Subir reporte genético" }}
                    </h2>
                    <p>{move || format!("Paciente: {}", patient_name())}</p>
                    <Show when=move || dialog() == Some(ReportDialog::Replace)>
                        <p class="form-warning">"El archivo actual y sus variantes serán reemplazados."</p>
                    </Show>
                    <p class="form-hint">{expected_name}</p>
                    <input type="file" accept=".txt" node_ref=file_input/>
                    {move || error().map(|e| view! { <p class="form-error">{e}</p> })}
                    <div class="dialog__actions">
                        <button class="btn btn--ghost" on:click=move |_| close()>
                            "Cancelar"
                        </button>
                        <button class="btn btn--primary" disabled=saving on:click=on_upload>
                            {move || if saving() { "Procesando..." } else { "Subir archivo" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        <Show when=move || dialog() == Some(ReportDialog::Delete)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Eliminar Reporte Genético"</h2>
                    <p>{move || format!("¿Estás seguro de que deseas eliminar el reporte genético de {}?", patient_name())}</p>
                    {move || error().map(|e| view! { <p class="form-error">{e}</p> })}
                    <div class="dialog__actions">
                        <button class="btn btn--ghost" on:click=move |_| close()>
                            "Cancelar"
                        </button>
                        <button class="btn btn--danger" disabled=saving on:click=on_delete>
                            {move || if saving() { "Eliminando..." } else { "Eliminar archivo" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
