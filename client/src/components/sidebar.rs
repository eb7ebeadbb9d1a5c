//! Patient dashboard sidebar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::download_report::DownloadReportButton;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::sign_out;
use crate::util::nav::{PATIENT_NAV, is_active};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let user_name = Signal::derive(move || {
        auth.with(|a| a.user.as_ref().map_or_else(|| "Usuario".to_owned(), |u| u.full_name()))
    });

    view! {
        <button
            class="sidebar-burger"
            aria-label="Menú"
            on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
        >
            "☰"
        </button>
        <aside class="sidebar" class:sidebar--open=move || ui.get().mobile_menu_open>
            <div class="sidebar__brand">
                <a href="/">"Sequoh"</a>
            </div>
            <div class="sidebar__user">
                <span class="sidebar__avatar">{move || user_name.get().chars().next().unwrap_or('U').to_string()}</span>
                <span class="sidebar__name">{user_name}</span>
            </div>
            <nav class="sidebar__nav">
                {PATIENT_NAV
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        view! {
                            <a
                                href=path
                                class="sidebar__link"
                                class:sidebar__link--active=move || is_active(path, &location.pathname.get())
                                on:click=move |_| ui.update(|u| u.mobile_menu_open = false)
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <DownloadReportButton name=user_name/>
                <button class="btn btn--ghost sidebar__logout" on:click=move |_| sign_out(auth)>
                    "Cerrar sesión"
                </button>
            </div>
        </aside>
    }
}
