//! Fallback for unknown routes.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let home = move || auth.with(|a| if a.user.is_some() { a.landing_route() } else { "/" });

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__text">"La página que buscas no existe."</p>
            <a class="btn btn--primary" href=home>"Volver al inicio"</a>
        </div>
    }
}
