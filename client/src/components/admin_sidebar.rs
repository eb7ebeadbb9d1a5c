//! Back-office sidebar; entries depend on the signed-in role.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::sign_out;
use crate::util::nav::{back_office_nav, is_active};

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let items = move || auth.with(|a| a.role().map(back_office_nav).unwrap_or_default());
    let display_name =
        move || auth.with(|a| a.user.as_ref().map_or_else(|| "Equipo".to_owned(), |u| u.display_name().to_owned()));

    view! {
        <button
            class="sidebar-burger"
            aria-label="Menú"
            on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
        >
            "☰"
        </button>
        <Show when=move || ui.get().mobile_menu_open>
            <div class="sidebar-overlay" on:click=move |_| ui.update(|u| u.mobile_menu_open = false)></div>
        </Show>
        <aside class="sidebar sidebar--admin" class:sidebar--open=move || ui.get().mobile_menu_open>
            <div class="sidebar__brand">
                <a href="/">"Sequoh"</a>
                <span class="sidebar__tag">"Back office"</span>
            </div>
            <div class="sidebar__user">
                <span class="sidebar__name">{display_name}</span>
            </div>
            <nav class="sidebar__nav">
                {move || {
                    items()
                        .into_iter()
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
                        .collect_view()
                }}
            </nav>
            <div class="sidebar__footer">
                <button class="btn btn--ghost sidebar__logout" on:click=move |_| sign_out(auth)>
                    "Cerrar sesión"
                </button>
            </div>
        </aside>
    }
}
