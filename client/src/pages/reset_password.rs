//! Standalone route for the password-reset email link.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::reset_password_form::ResetPasswordForm;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();
    let token = query.with_untracked(|q| q.get("token")).filter(|t| !t.trim().is_empty());
    let on_done = Callback::new(move |()| navigate("/login", NavigateOptions::default()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__brand">"Sequoh"</a>
                {match token {
                    Some(token) => view! { <ResetPasswordForm token=token on_done=on_done/> }.into_any(),
                    None => {
                        view! {
                            <div class="verify-card__body verify-card__body--error">
                                <h1>"Enlace inválido"</h1>
                                <p>"El enlace para restablecer la contraseña no es válido o está incompleto."</p>
                                <a href="/login" class="btn btn--primary">
                                    "Volver al inicio de sesión"
                                </a>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
