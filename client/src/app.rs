//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    admin_analysts::AdminAnalystsPage, admin_home::AdminHomePage, admin_reports::AdminReportsPage,
    admin_variants::AdminVariantsPage, ancestry::AncestryPage, biomarkers::BiomarkersPage,
    biometrics::BiometricsPage, dashboard::DashboardPage, diseases::DiseasesPage, landing::LandingPage,
    login::LoginPage, not_found::NotFoundPage, pharmacogenetics::PharmacogeneticsPage, reception::ReceptionPage,
    register::RegisterPage, reset_password::ResetPasswordPage, traits::TraitsPage, verify_email::VerifyEmailPage,
};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::auth::load_session;

/// Root application component.
///
/// Provides the shared state contexts, resolves the stored session and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    load_session(auth);

    view! {
        <Title text="Sequoh"/>
        <ToastHost/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>

                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("ancestria")) view=AncestryPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("rasgos")) view=TraitsPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("farmacogenetica")) view=PharmacogeneticsPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("biomarcadores")) view=BiomarkersPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("biometricas")) view=BiometricsPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("enfermedades")) view=DiseasesPage/>

                <Route path=StaticSegment("admin") view=AdminHomePage/>
                <Route path=(StaticSegment("admin"), StaticSegment("reports")) view=AdminReportsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("variants")) view=AdminVariantsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("analysts")) view=AdminAnalystsPage/>

                <Route path=StaticSegment("reception") view=ReceptionPage/>
            </Routes>
        </Router>
    }
}
