//! Back-office home: headline counters and shortcuts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Counters come from `admin/stats/` and refresh every
//! `STATS_REFRESH_SECS` while the page is mounted. A refresh that fails keeps
//! the previous numbers on screen.

use leptos::prelude::*;
use schema::admin::{AdminStats, growth_label};

use crate::components::bars::StatCard;
use crate::components::layout::BackOfficeLayout;
use crate::components::remote_view::load_into;
use crate::components::upload_file_modal::UploadFileModal;
use crate::net::api;
use crate::state::auth::{Area, AuthState};
use crate::state::request::Remote;
use crate::util::charts::thousands;

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let title = move || auth.with(|a| a.user.as_ref().map_or_else(String::new, |u| format!("Bienvenido/a {}!", u.display_name())));

    view! {
        <BackOfficeLayout area=Area::BackOffice title="Panel de administración">
            <p class="page-lead">{title}</p>
            <AdminHome/>
        </BackOfficeLayout>
    }
}

#[component]
fn AdminHome() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let stats = RwSignal::new(Remote::<AdminStats>::default());
    let show_upload = RwSignal::new(false);

    load_into(stats, api::fetch_admin_stats);

    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(crate::util::config::STATS_REFRESH_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                log::debug!("refreshing admin stats");
                load_into(stats, api::fetch_admin_stats);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let value = move |f: fn(&AdminStats) -> i64| {
        Signal::derive(move || stats.with(|r| r.data.as_ref().map_or_else(|| "-".to_owned(), |s| thousands(f(s)))))
    };
    let growth = move |f: fn(&AdminStats) -> f64| {
        Signal::derive(move || stats.with(|r| r.data.as_ref().map(|s| format!("{} este mes", growth_label(f(s))))))
    };
    let is_admin = move || auth.with(AuthState::is_admin);

    view! {
        <section class="stat-grid" aria-label="Estadísticas">
            <StatCard title="Usuarios Totales" value=value(|s| s.total_users) hint=growth(|s| s.user_growth) accent="#0b7ad0"/>
            <StatCard title="Reportes Procesados" value=value(|s| s.processed_reports) hint=growth(|s| s.report_growth) accent="#f97316"/>
            <StatCard title="Variantes en BD" value=value(|s| s.variants_count) accent="#8b5cf6"/>
            <StatCard title="Análisis Completados" value=value(|s| s.analysis_count) hint=growth(|s| s.analysis_growth) accent="#10b981"/>
        </section>
        {move || {
            stats
                .with(|r| r.error.clone())
                .map(|e| view! { <p class="form-error">{format!("No se pudieron actualizar las estadísticas: {e}")}</p> })
        }}
        {move || {
            stats
                .with(|r| r.data.as_ref().and_then(|s| s.last_update.clone()))
                .map(|t| view! { <p class="page-note">{format!("Última actualización: {}", crate::util::date::date_part(&t))}</p> })
        }}

        <section class="admin-grid" aria-label="Administración">
            <a href="/admin/reports" class="admin-card">
                <h2 class="admin-card__title">"Administrar reportes genéticos"</h2>
                <p>"Sube, reemplaza o elimina archivos genéticos y actualiza el estado del servicio de cada paciente."</p>
            </a>
            <a href="/admin/variants" class="admin-card">
                <h2 class="admin-card__title">"Base de datos de variantes genéticas"</h2>
                <p>"Consulta, filtra y agrega variantes a la base de datos de referencia."</p>
            </a>
            <Show when=is_admin>
                <a href="/admin/analysts" class="admin-card">
                    <h2 class="admin-card__title">"Acceso de analistas"</h2>
                    <p>"Otorga o revoca el rol de analista a los usuarios."</p>
                </a>
            </Show>
            <button class="admin-card admin-card--action" on:click=move |_| show_upload.set(true)>
                <h2 class="admin-card__title">"Subir archivo"</h2>
                <p>"Adjunta un archivo de resultados a la cuenta de un usuario por su correo."</p>
            </button>
        </section>

        <Show when=move || show_upload.get()>
            <UploadFileModal on_close=Callback::new(move |()| show_upload.set(false))/>
        </Show>
    }
}
