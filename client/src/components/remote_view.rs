//! Fetch-into-signal helper and its loading/error banner.

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::request::Remote;

/// Start `fetch` and store its result in `remote` unless a newer load has
/// started in the meantime.
pub fn load_into<T, F, Fut>(remote: RwSignal<Remote<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    load_field(remote, |r| r, fetch);
}

/// [`load_into`] for a `Remote` that lives inside a larger page state.
pub fn load_field<S, T, F, Fut>(state: RwSignal<S>, field: fn(&mut S) -> &mut Remote<T>, fetch: F)
where
    S: Send + Sync + 'static,
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut ticket = 0;
    state.update(|s| ticket = field(s).begin());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = fetch().await;
        if let Err(err) = &result {
            log::warn!("load failed: {err}");
        }
        state.update(|s| {
            field(s).finish(ticket, result);
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = fetch;
        state.update(|s| {
            field(s).finish::<ApiError>(ticket, Err(ApiError::Network));
        });
    }
}

/// Spinner while loading, error with a retry button on failure.
#[component]
pub fn RemoteStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_retry: Callback<()>,
    #[prop(optional, into)] loading_text: Option<String>,
) -> impl IntoView {
    let loading_text = loading_text.unwrap_or_else(|| "Cargando...".to_owned());
    view! {
        <Show when=move || loading.get()>
            <div class="remote-status remote-status--loading">
                <div class="spinner"></div>
                <p>{loading_text.clone()}</p>
            </div>
        </Show>
        {move || {
            error
                .get()
                .filter(|_| !loading.get())
                .map(|message| {
                    view! {
                        <div class="remote-status remote-status--error">
                            <p>{message}</p>
                            <button class="btn btn--ghost" on:click=move |_| on_retry.run(())>
                                "Reintentar"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
