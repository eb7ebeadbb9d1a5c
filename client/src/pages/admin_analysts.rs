//! Analyst permission management (admins only).

use leptos::prelude::*;
use schema::User;

use crate::components::layout::BackOfficeLayout;
use crate::components::remote_view::{RemoteStatus, load_field};
use crate::net::api;
use crate::state::analysts::{AnalystsState, list_name};
use crate::state::auth::{Area, AuthState};

#[component]
pub fn AdminAnalystsPage() -> impl IntoView {
    view! {
        <BackOfficeLayout
            area=Area::AdminOnly
            title="Otorgar Permisos"
            subtitle="Asigna o revoca el rol de Analista a los usuarios registrados."
        >
            <AdminAnalysts/>
        </BackOfficeLayout>
    }
}

#[component]
fn AdminAnalysts() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(AnalystsState::default());
    let load = move || load_field(state, |s| &mut s.remote, api::list_users);
    load();

    let self_id = move || auth.with(|a| a.user.as_ref().map(|u| u.id));
    let visible = Memo::new(move |_| {
        let me = self_id();
        state.with(|s| s.visible(me))
    });

    let toggle = Callback::new(move |(user_id, grant): (i64, bool)| {
        if state.with(|s| s.saving) {
            return;
        }
        state.update(AnalystsState::begin_toggle);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::set_analyst(user_id, grant).await {
                Ok(granted) => state.update(|s| s.apply_toggle(user_id, granted)),
                Err(err) => {
                    log::warn!("analyst toggle failed for {user_id}: {err}");
                    state.update(|s| s.fail(err.to_string()));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, grant);
            state.update(|s| s.fail(crate::net::error::ApiError::Network.to_string()));
        }
    });

    view! {
        <div class="stat-grid stat-grid--compact">
            <div class="stat-pill">{move || format!("Usuarios: {}", state.with(|s| s.users().len()))}</div>
            <div class="stat-pill">{move || format!("Analistas: {}", state.with(AnalystsState::analyst_count))}</div>
        </div>

        <div class="table-toolbar">
            <input
                class="table-toolbar__search"
                type="search"
                placeholder="Buscar por nombre, email o usuario..."
                prop:value=move || state.with(|s| s.search.clone())
                on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
            />
        </div>

        {move || state.with(|s| s.message.clone()).map(|m| view! { <div class="alert alert--success">{m}</div> })}
        {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

        <RemoteStatus
            loading=Signal::derive(move || state.with(|s| s.remote.loading))
            error=Signal::derive(move || state.with(|s| s.remote.error.clone()))
            on_retry=Callback::new(move |()| load())
            loading_text="Cargando usuarios..."
        />

        <Show when=move || state.with(|s| s.remote.data.is_some())>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="empty-state">"No se encontraron usuarios."</p> }
            >
                <ul class="analyst-list">
                    <For each=move || visible.get() key=|u| (u.id, u.is_analyst_user()) let:user>
                        <AnalystRow user=user state=state on_toggle=toggle/>
                    </For>
                </ul>
            </Show>
        </Show>
    }
}

#[component]
fn AnalystRow(user: User, state: RwSignal<AnalystsState>, on_toggle: Callback<(i64, bool)>) -> impl IntoView {
    let id = user.id;
    let is_analyst = user.is_analyst_user();
    let name = list_name(&user);
    let email = user.email.clone();

    view! {
        <li class="analyst-list__item">
            <div class="analyst-list__who">
                <span class="analyst-list__name">{name}</span>
                <span class="analyst-list__email">{email}</span>
            </div>
            <span class="badge" class:badge--analyst=is_analyst>
                {if is_analyst { "Analista" } else { "Usuario" }}
            </span>
            <button
                class="btn"
                class:btn--danger=is_analyst
                class:btn--primary={!is_analyst}
                disabled=move || state.with(|s| s.saving)
                on:click=move |_| on_toggle.run((id, !is_analyst))
            >
                {if is_analyst { "Revocar" } else { "Otorgar" }}
            </button>
        </li>
    }
}
