//! Generic file upload for a user, addressed by email.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState, notify};
use crate::util::validation::is_valid_email;
#[cfg(feature = "csr")]
use crate::util::validation::validate_upload;

const INCOMPLETE: &str = "Por favor completa todos los campos";

#[cfg(feature = "csr")]
fn picked_file(input: &NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

#[component]
pub fn UploadFileModal(on_close: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let email = RwSignal::new(String::new());
    let file_name = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let Some(file) = picked_file(&file_input) else {
                file_name.set(None);
                return;
            };
            // File::size is f64 bytes.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            match validate_upload(&file.name(), size) {
                Ok(()) => {
                    error.set(None);
                    file_name.set(Some(file.name()));
                }
                Err(msg) => {
                    error.set(Some(msg));
                    file_name.set(None);
                }
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let target = email.get_untracked().trim().to_owned();
        if target.is_empty() || file_name.get_untracked().is_none() {
            error.set(Some(INCOMPLETE.to_owned()));
            return;
        }
        if !is_valid_email(&target) {
            error.set(Some("Ingresa un correo válido.".to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let Some(file) = picked_file(&file_input) else {
                error.set(Some(INCOMPLETE.to_owned()));
                busy.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_user_file(&file, &target).await {
                    Ok(()) => {
                        notify(ui, ToastKind::Success, "Archivo subido correctamente.");
                        on_close.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ui, target);
            error.set(Some(schema::CONNECTION_ERROR.to_owned()));
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>"Subir archivo"</h2>
                    <button class="dialog__close" aria-label="Cerrar" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                <form class="auth-form" on:submit=on_submit>
                    <label for="upload-email">"Correo del usuario"</label>
                    <input
                        id="upload-email"
                        class="auth-input"
                        type="email"
                        placeholder="usuario@correo.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="upload-file">"Archivo (.vcf, .txt, .csv, .zip, .rar)"</label>
                    <input
                        id="upload-file"
                        type="file"
                        accept=".vcf,.txt,.csv,.zip,.rar"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                    <Show when=move || file_name.get().is_some()>
                        <p class="muted">{move || file_name.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <footer class="dialog__actions">
                        <button type="button" class="btn btn--ghost" on:click=move |_| on_close.run(())>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Subiendo..." } else { "Subir archivo" }}
                        </button>
                    </footer>
                </form>
            </div>
        </div>
    }
}
