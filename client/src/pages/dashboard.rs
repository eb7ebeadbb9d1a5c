//! Patient home.
//!
//! SYSTEM CONTEXT
//! ==============
//! The service status decides what a patient sees here: an offer screen
//! before purchase, a progress screen while the sample is processed, and
//! the section cards once the report is ready. Report pages themselves are
//! not gated; they show the backend's empty-state messages instead.

use leptos::prelude::*;

use crate::components::download_report::DownloadReportButton;
use crate::components::layout::PatientLayout;
use crate::state::auth::{AuthState, ServiceGate};

struct Section {
    path: &'static str,
    title: &'static str,
    description: &'static str,
    class: &'static str,
}

const SECTIONS: [Section; 6] = [
    Section {
        path: "/dashboard/ancestria",
        title: "Ancestría",
        description: "Descubre tus orígenes genéticos y las poblaciones con las que compartes historia.",
        class: "section-card--ancestria",
    },
    Section {
        path: "/dashboard/rasgos",
        title: "Rasgos",
        description: "Conoce los rasgos genéticos que influyen en tu apariencia, comportamiento y habilidades.",
        class: "section-card--rasgos",
    },
    Section {
        path: "/dashboard/farmacogenetica",
        title: "Farmacogenética",
        description: "Descubre cómo tu genética influye en la respuesta a medicamentos.",
        class: "section-card--farmacogenetica",
    },
    Section {
        path: "/dashboard/biomarcadores",
        title: "Biomarcadores",
        description: "Identifica biomarcadores que revelan factores clave de tu salud y predisposición.",
        class: "section-card--biomarcadores",
    },
    Section {
        path: "/dashboard/biometricas",
        title: "Biométricas",
        description: "Entiende cómo tus variantes se relacionan con características físicas y de rendimiento.",
        class: "section-card--biometricas",
    },
    Section {
        path: "/dashboard/enfermedades",
        title: "Enfermedades",
        description: "Revisa predisposiciones y variantes asociadas a distintas condiciones de salud.",
        class: "section-card--enfermedades",
    },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|a| a.user.as_ref().map_or_else(|| "Bienvenido!".to_owned(), |u| format!("Bienvenido {}!", u.display_name())))
    };
    let gate = move || auth.with(|a| a.user.as_ref().map_or(ServiceGate::NoPurchased, ServiceGate::for_user));

    view! {
        <PatientLayout title="Tu resultado genético">
            <div class="dashboard-home">
                <h2 class="dashboard-home__welcome">{greeting}</h2>
                {move || match gate() {
                    ServiceGate::NoPurchased => view! { <NoPurchasedScreen/> }.into_any(),
                    ServiceGate::Pending => view! { <PendingScreen/> }.into_any(),
                    ServiceGate::Ready => view! { <SectionGrid/> }.into_any(),
                }}
            </div>
        </PatientLayout>
    }
}

#[component]
fn NoPurchasedScreen() -> impl IntoView {
    view! {
        <section class="service-gate service-gate--offer">
            <h3>"Aún no tienes un análisis genético"</h3>
            <p>
                "Adquiere tu kit Sequoh para conocer tu ancestría, rasgos, respuesta a medicamentos y predisposiciones de salud."
            </p>
            <a href="/#contacto" class="btn btn--primary">
                "Quiero mi kit"
            </a>
        </section>
    }
}

#[component]
fn PendingScreen() -> impl IntoView {
    view! {
        <section class="service-gate service-gate--pending">
            <h3>"Tu muestra está en proceso"</h3>
            <p>
                "Estamos analizando tu muestra. Te avisaremos por correo cuando tu reporte esté disponible."
            </p>
            <ol class="service-gate__steps">
                <li class="service-gate__step service-gate__step--done">"Kit adquirido"</li>
                <li class="service-gate__step service-gate__step--done">"Muestra recibida"</li>
                <li class="service-gate__step">"Análisis en laboratorio"</li>
                <li class="service-gate__step">"Reporte disponible"</li>
            </ol>
        </section>
    }
}

#[component]
fn SectionGrid() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = Signal::derive(move || auth.with(|a| a.user.as_ref().map(schema::User::full_name).unwrap_or_default()));

    view! {
        <div class="dashboard-home__intro">
            <p>
                "Aquí reunimos distintos grupos de características para mostrarte cómo tu información genética se asocia con ellas. Explora cada categoría para ver una descripción detallada."
            </p>
            <DownloadReportButton name=name/>
        </div>
        <div class="section-grid">
            {SECTIONS
                .iter()
                .map(|s| {
                    view! {
                        <a href=s.path class=format!("section-card {}", s.class)>
                            <h3 class="section-card__title">{s.title}</h3>
                            <p class="section-card__body">{s.description}</p>
                            <span class="section-card__cta">"Explorar ahora"</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
