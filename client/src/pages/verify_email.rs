//! Landing route of the email-verification link.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::validation::is_valid_email;

pub const MISSING_TOKEN: &str = "Token de verificación no encontrado en la URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyStatus {
    Verifying,
    Success(String),
    Expired(String),
    Error(String),
}

impl VerifyStatus {
    /// Classify a failed verification; expired links offer a resend form.
    pub fn from_error(message: String) -> Self {
        if message.to_lowercase().contains("expirado") { Self::Expired(message) } else { Self::Error(message) }
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let token = query.with_untracked(|q| q.get("token")).unwrap_or_default();
    let status = RwSignal::new(if token.trim().is_empty() {
        VerifyStatus::Error(MISSING_TOKEN.to_owned())
    } else {
        VerifyStatus::Verifying
    });

    if status.get_untracked() == VerifyStatus::Verifying {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::verify_email(&token).await {
                Ok(message) => VerifyStatus::Success(message),
                Err(err) => VerifyStatus::from_error(err.to_string()),
            };
            status.set(next);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            status.set(VerifyStatus::Error(schema::CONNECTION_ERROR.to_owned()));
        }
    }

    view! {
        <div class="auth-page">
            <div class="auth-card verify-card">
                <a href="/" class="auth-card__brand">"Sequoh"</a>
                {move || match status.get() {
                    VerifyStatus::Verifying => {
                        view! {
                            <div class="verify-card__body">
                                <div class="spinner"></div>
                                <h1>"Verificando tu correo..."</h1>
                            </div>
                        }
                            .into_any()
                    }
                    VerifyStatus::Success(message) => {
                        view! {
                            <div class="verify-card__body verify-card__body--success">
                                <h1>"¡Correo verificado!"</h1>
                                <p>{message}</p>
                                <a href="/login?verified=1" class="btn btn--primary">
                                    "Iniciar sesión"
                                </a>
                            </div>
                        }
                            .into_any()
                    }
                    VerifyStatus::Expired(message) => {
                        view! {
                            <div class="verify-card__body verify-card__body--warning">
                                <h1>"Enlace expirado"</h1>
                                <p>{message}</p>
                                <ResendForm/>
                            </div>
                        }
                            .into_any()
                    }
                    VerifyStatus::Error(message) => {
                        view! {
                            <div class="verify-card__body verify-card__body--error">
                                <h1>"No pudimos verificar tu correo"</h1>
                                <p>{message}</p>
                                <ResendForm/>
                                <a href="/login" class="btn btn--ghost">
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

/// Ask for a fresh verification email.
#[component]
fn ResendForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let result = RwSignal::new(None::<Result<String, String>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let address = email.get_untracked();
        if !is_valid_email(&address) {
            result.set(Some(Err("Ingresa un correo válido".to_owned())));
            return;
        }
        sending.set(true);
        result.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::resend_verification(&address)
                .await
                .map(|()| "Te enviamos un nuevo correo de verificación.".to_owned())
                .map_err(|err| err.to_string());
            result.set(Some(outcome));
            sending.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = address;
            result.set(Some(Err(schema::CONNECTION_ERROR.to_owned())));
            sending.set(false);
        }
    };

    view! {
        <form class="resend-form" on:submit=on_submit>
            <label for="resend-email">"¿Necesitas un nuevo enlace?"</label>
            <input
                id="resend-email"
                type="email"
                class="auth-input"
                placeholder="tu@correo.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn--primary" disabled=move || sending.get()>
                {move || if sending.get() { "Enviando..." } else { "Reenviar verificación" }}
            </button>
            {move || {
                result
                    .get()
                    .map(|r| match r {
                        Ok(msg) => view! { <p class="form-success">{msg}</p> }.into_any(),
                        Err(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                    })
            }}
        </form>
    }
}
