//! Reception desk: find a sample, verify the patient and label the tube.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only one search is honoured at a time; a slower earlier response never
//! replaces a newer one. Completing the checklist asks the backend for the
//! sample code, which also moves the service status to `PENDING`.

use leptos::prelude::*;
use schema::admin::ReceptionProfile;

use crate::components::layout::BackOfficeLayout;
use crate::net::api;
use crate::state::auth::{Area, AuthState};
use crate::state::reception::{CHECKLIST_GROUPS, CHECKLIST_ITEMS, MARKED_PENDING, ReceptionState, label_html};

const ARRIVAL_CONFIRMED: &str = "Llegada del paciente confirmada.";
const STATUS_ADVANCED: &str = "Estado de la muestra actualizado.";

#[component]
pub fn ReceptionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|a| a.user.as_ref().map_or_else(|| "Bienvenido/a".to_owned(), |u| format!("Bienvenido/a {}", u.display_name())))
    };

    view! {
        <BackOfficeLayout
            area=Area::Reception
            title="Recepción de muestras"
            subtitle="Busca una muestra por su SampleID para verificar la identidad del usuario y etiquetar la muestra."
        >
            <p class="page-lead">{greeting}</p>
            <Reception/>
        </BackOfficeLayout>
    }
}

/// Run a reception action against the selected user and apply the returned
/// profile.
fn run_action<F, Fut>(state: RwSignal<ReceptionState>, user_id: i64, message: &'static str, call: F)
where
    F: FnOnce(i64) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<ReceptionProfile, crate::net::error::ApiError>> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match call(user_id).await {
            Ok(profile) => state.update(|s| s.apply_profile(profile, message)),
            Err(err) => {
                log::warn!("reception action failed for {user_id}: {err}");
                state.update(|s| s.fail(err.to_string()));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user_id, message, call);
        state.update(|s| s.fail(crate::net::error::ApiError::Network.to_string()));
    }
}

#[cfg(feature = "csr")]
fn print_label(html: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(popup)) = window.open_with_url_and_target_and_features("", "PRINT", "height=480,width=320") else {
        log::warn!("label print window was blocked");
        return;
    };
    if let Some(body) = popup.document().and_then(|d| d.body()) {
        body.set_inner_html(html);
    }
    if popup.print().is_err() {
        log::warn!("label print failed");
    }
    let _ = popup.close();
}

#[component]
fn Reception() -> impl IntoView {
    let state = RwSignal::new(ReceptionState::default());

    let search = move || {
        let Some((ticket, code)) = state.try_update(ReceptionState::begin_search).flatten() else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = api::reception_search(&code).await;
            state.update(|s| s.finish_search(ticket, result));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = code;
            state.update(|s| s.finish_search(ticket, Err(crate::net::error::ApiError::Network)));
        }
    };

    let complete = move |_| {
        if let Some(user_id) = state.try_update(ReceptionState::begin_complete).flatten() {
            run_action(state, user_id, MARKED_PENDING, |id| api::reception_sample_code(id, false));
        }
    };

    let confirm_arrival = move |_| {
        if let Some(user_id) = state.try_update(ReceptionState::begin_action).flatten() {
            run_action(state, user_id, ARRIVAL_CONFIRMED, api::reception_arrival);
        }
    };

    let advance = move |_| {
        let Some(action) = state.with(|s| s.selected.as_ref().and_then(|p| p.sample_status.next_action())) else {
            return;
        };
        if let Some(user_id) = state.try_update(ReceptionState::begin_action).flatten() {
            run_action(state, user_id, STATUS_ADVANCED, move |id| api::reception_sample_status(id, action));
        }
    };

    let print = move |_| {
        let Some(html) = state.with(|s| s.selected.as_ref().and_then(label_html)) else {
            return;
        };
        #[cfg(feature = "csr")]
        print_label(&html);
        #[cfg(not(feature = "csr"))]
        let _ = html;
    };

    let selected = Memo::new(move |_| state.with(|s| s.selected.clone()));
    let complete_ready = move || state.with(|s| s.checklist.is_complete() && !s.saving);

    view! {
        <div class="reception">
            <form
                class="reception__search"
                on:submit=move |ev| {
                    ev.prevent_default();
                    search();
                }
            >
                <input
                    class="reception__search-input"
                    type="text"
                    placeholder="Ingresa el SampleID"
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.searching)>
                    {move || if state.with(|s| s.searching) { "Buscando..." } else { "Buscar" }}
                </button>
            </form>

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|e| {
                        view! {
                            <div class="alert alert--error">
                                <span>{e}</span>
                                <button class="alert__close" on:click=move |_| state.update(ReceptionState::reset_messages)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
            {move || {
                state
                    .with(|s| s.info.clone())
                    .map(|i| {
                        view! {
                            <div class="alert alert--info">
                                <span>{i}</span>
                                <button class="alert__close" on:click=move |_| state.update(ReceptionState::reset_messages)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}

            <Show when=move || state.with(|s| s.searching)>
                <div class="page-loading">
                    <div class="spinner"></div>
                </div>
            </Show>

            {move || {
                let profile = selected.get()?;
                if state.with_untracked(ReceptionState::is_pending) {
                    return Some(
                        view! {
                            <div class="reception-pending">
                                <h2 class="reception-pending__title">"Muestra en estado Pendiente"</h2>
                                <p class="reception-pending__text">
                                    "El Sample ID " <strong>{profile.sample_code.clone()}</strong>
                                    " ya ha sido procesado y está pendiente de resultados."
                                </p>
                                <button class="btn btn--primary" on:click=move |_| state.update(ReceptionState::clear_selection)>
                                    "Buscar otra muestra"
                                </button>
                            </div>
                        }
                            .into_any(),
                    );
                }
                Some(
                    view! {
                        <div class="reception__details">
                            <ProfileCard profile={profile.clone()}/>
                            <div class="reception-checklist">
                                <h3 class="reception-checklist__title">"Checklist de recepción"</h3>
                                {CHECKLIST_GROUPS
                                    .into_iter()
                                    .map(|(title, range)| {
                                        view! {
                                            <div class="reception-checklist__group">
                                                <h4 class="reception-checklist__group-title">{title}</h4>
                                                {CHECKLIST_ITEMS[range]
                                                    .iter()
                                                    .map(|(item, label)| view! { <ChecklistItem state=state item=*item label=*label/> })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                                <div class="reception-checklist__actions">
                                    {profile
                                        .arrival_confirmed_at
                                        .is_none()
                                        .then(|| {
                                            view! {
                                                <button
                                                    class="btn btn--ghost"
                                                    disabled=move || state.with(|s| s.saving)
                                                    on:click=confirm_arrival
                                                >
                                                    "Confirmar llegada"
                                                </button>
                                            }
                                        })}
                                    {profile
                                        .sample_status
                                        .next_action()
                                        .map(|action| {
                                            view! {
                                                <button
                                                    class="btn btn--ghost"
                                                    disabled=move || state.with(|s| s.saving)
                                                    on:click=advance
                                                >
                                                    {action.label()}
                                                </button>
                                            }
                                        })}
                                    <button
                                        class="btn btn--ghost"
                                        disabled={profile.sample_code.trim().is_empty()}
                                        on:click=print
                                    >
                                        "Imprimir etiqueta"
                                    </button>
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || !complete_ready()
                                        on:click=complete
                                    >
                                        "Completar y marcar pendiente"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                        .into_any(),
                )
            }}
        </div>
    }
}

#[component]
fn ProfileCard(profile: ReceptionProfile) -> impl IntoView {
    let code = if profile.sample_code.trim().is_empty() { "—".to_owned() } else { profile.sample_code.clone() };
    let rut = if profile.rut.trim().is_empty() { "—".to_owned() } else { profile.rut.clone() };
    let status = profile.status_label().to_owned();
    let name = profile.full_name();

    view! {
        <div class="reception-card">
            <div class="reception-card__header">
                <div>
                    <p class="reception-card__label">"Sample ID"</p>
                    <h2 class="reception-card__code">{code}</h2>
                </div>
                <span class="badge badge--pending">{status}</span>
            </div>
            <div class="reception-card__row">
                <div>
                    <p class="reception-card__label">"Paciente"</p>
                    <p class="reception-card__value">{name}</p>
                </div>
                <div>
                    <p class="reception-card__label">"RUT"</p>
                    <p class="reception-card__value">{rut}</p>
                </div>
            </div>
            {profile
                .arrival_confirmed_at
                .map(|at| view! { <p class="reception-card__meta">{format!("Llegada confirmada: {at}")}</p> })}
        </div>
    }
}

#[component]
fn ChecklistItem(state: RwSignal<ReceptionState>, item: &'static str, label: &'static str) -> impl IntoView {
    let checked = move || state.with(|s| s.checklist.is_checked(item));

    view! {
        <label class="reception-checkbox" class:reception-checkbox--checked=checked>
            <input type="checkbox" prop:checked=checked on:change=move |_| state.update(|s| s.toggle_check(item))/>
            <span class="reception-checkbox__label">{label}</span>
        </label>
    }
}
