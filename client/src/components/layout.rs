//! Page shells for the guarded areas.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard, back-office and reception route mounts one of these. The
//! shell installs the area guard and keeps the page body unmounted until the
//! session lookup confirms the visitor may see it, so page bodies can start
//! their fetches on mount.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::admin_sidebar::AdminSidebar;
use super::sidebar::Sidebar;
use crate::state::auth::{Area, AuthState};
use crate::util::auth::{can_render, install_area_guard};

#[component]
fn PageHeader(title: String, subtitle: Option<String>) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
        </header>
    }
}

#[component]
fn GuardFallback() -> impl IntoView {
    view! {
        <div class="page-loading">
            <div class="spinner"></div>
        </div>
    }
}

/// Patient dashboard shell with the report sidebar.
#[component]
pub fn PatientLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_area_guard(auth, Area::Patient, use_navigate());

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="app-main">
                <PageHeader title=title subtitle=subtitle/>
                <Show when=move || can_render(auth, Area::Patient) fallback=|| view! { <GuardFallback/> }>
                    {children()}
                </Show>
            </main>
        </div>
    }
}

/// Back-office and reception shell with the role-aware sidebar.
#[component]
pub fn BackOfficeLayout(
    area: Area,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_area_guard(auth, area, use_navigate());

    view! {
        <div class="app-shell app-shell--admin">
            <AdminSidebar/>
            <main class="app-main">
                <PageHeader title=title subtitle=subtitle/>
                <Show when=move || can_render(auth, area) fallback=|| view! { <GuardFallback/> }>
                    {children()}
                </Show>
            </main>
        </div>
    }
}
