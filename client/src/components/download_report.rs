//! "Download report" button with cancel support.

use leptos::prelude::*;

use crate::net::download::{DOWNLOAD_FAILED, DownloadHandle};
#[cfg(feature = "csr")]
use crate::net::download::failure_message;
#[cfg(feature = "csr")]
use crate::net::error::ApiError;
use crate::state::ui::{ToastKind, UiState, notify};

#[component]
pub fn DownloadReportButton(#[prop(into)] name: Signal<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = RwSignal::new_local(None::<DownloadHandle>);
    let busy = move || active.with(Option::is_some);

    let on_download = move |_| {
        if busy() {
            return;
        }
        let handle = DownloadHandle::new();
        active.set(Some(handle.clone()));
        let name = name.get_untracked();
        log::debug!("report download started");

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::download::download_report(&handle, &name).await {
                Ok(()) => notify(ui, ToastKind::Success, "Reporte descargado."),
                Err(ApiError::Cancelled) => notify(ui, ToastKind::Info, failure_message(&ApiError::Cancelled)),
                Err(err) => {
                    log::warn!("report download failed: {err}");
                    notify(ui, ToastKind::Error, failure_message(&err));
                }
            }
            active.set(None);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (handle, name);
            notify(ui, ToastKind::Error, DOWNLOAD_FAILED);
            active.set(None);
        }
    };

    let on_cancel = move |_| {
        if let Some(handle) = active.get_untracked() {
            handle.cancel();
        }
    };

    view! {
        <div class="download-report">
            <button class="btn btn--primary download-report__btn" disabled=busy on:click=on_download>
                {move || if busy() { "Generando reporte..." } else { "Descargar reporte PDF" }}
            </button>
            <Show when=busy>
                <button class="btn btn--ghost download-report__cancel" on:click=on_cancel>
                    "Cancelar"
                </button>
            </Show>
        </div>
    }
}
