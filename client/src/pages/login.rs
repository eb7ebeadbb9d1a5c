//! Login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Besides credentials this route handles two email links: `?token=` opens
//! the reset-password dialog and `?verified=1` shows a confirmation banner.
//! A signed-in visitor is sent straight to their landing route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::forgot_password_modal::ForgotPasswordModal;
use crate::components::reset_password_form::ResetPasswordForm;
use crate::state::auth::AuthState;
use crate::state::login::{LoginErrors, LoginField, LoginOutcome, LoginState, interpret_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let state = RwSignal::new(LoginState::default());
    let show_forgot = RwSignal::new(false);
    let reset_token = RwSignal::new(query.with_untracked(|q| q.get("token")).filter(|t| !t.is_empty()));
    let verified = query.with_untracked(|q| q.get("verified")).is_some_and(|v| v == "1");

    Effect::new(move || {
        let a = auth.get();
        if !a.loading && a.user.is_some() {
            navigate(a.landing_route(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.loading) {
            return;
        }
        let mut valid = false;
        state.update(|s| valid = s.validate());
        if !valid {
            return;
        }
        state.update(|s| s.loading = true);
        let (email, password) = state.with_untracked(|s| (s.email.clone(), s.password.clone()));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let resp = crate::net::api::login(&email, &password).await;
            match interpret_login(&resp) {
                LoginOutcome::Success { token } => {
                    crate::util::token::set_token(&token);
                    state.update(|s| s.success = true);
                    let user = crate::net::api::fetch_current_user().await;
                    let failed = user.is_err();
                    crate::util::auth::apply_session(auth, user);
                    if failed {
                        state.update(|s| {
                            s.success = false;
                            s.errors.global = crate::state::login::LOGIN_FAILED.to_owned();
                        });
                    }
                }
                LoginOutcome::Failed(errors) => {
                    log::debug!("login rejected with status {}", resp.status);
                    state.update(|s| s.errors = errors);
                }
            }
            state.update(|s| s.loading = false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            let outcome = interpret_login(&schema::ApiResponse::connection_error());
            if let LoginOutcome::Failed(errors) = outcome {
                state.update(|s| {
                    s.errors = errors;
                    s.loading = false;
                });
            }
        }
    };

    let field_class = move |field: LoginField| {
        let has_error = state.with(|s| match field {
            LoginField::Email => !s.errors.email.is_empty(),
            LoginField::Password => !s.errors.password.is_empty(),
        });
        if has_error { "auth-input auth-input--error" } else { "auth-input" }
    };
    let field_text = move |field: LoginField| {
        state.with(|s| {
            let raw = match field {
                LoginField::Email => &s.errors.email,
                LoginField::Password => &s.errors.password,
            };
            LoginErrors::visible(raw).map(str::to_owned)
        })
    };

    let close_reset = Callback::new(move |()| reset_token.set(None));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__brand">"Sequoh"</a>
                <h1>"Iniciar sesión"</h1>
                <Show when=move || verified>
                    <p class="banner banner--success">"Tu correo fue verificado. Ya puedes iniciar sesión."</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class=move || field_class(LoginField::Email)
                        type="email"
                        placeholder="Correo electrónico"
                        autocomplete="username"
                        prop:value=move || state.with(|s| s.email.clone())
                        on:input=move |ev| state.update(|s| s.set_field(LoginField::Email, event_target_value(&ev)))
                    />
                    {move || field_text(LoginField::Email).map(|t| view! { <p class="field-error">{t}</p> })}
                    <input
                        class=move || field_class(LoginField::Password)
                        type="password"
                        placeholder="Contraseña"
                        autocomplete="current-password"
                        prop:value=move || state.with(|s| s.password.clone())
                        on:input=move |ev| state.update(|s| s.set_field(LoginField::Password, event_target_value(&ev)))
                    />
                    {move || field_text(LoginField::Password).map(|t| view! { <p class="field-error">{t}</p> })}
                    <Show when=move || state.with(|s| !s.errors.global.is_empty())>
                        <p class="form-error">{move || state.with(|s| s.errors.global.clone())}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.loading)>
                        {move || if state.with(|s| s.loading) { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
                <button class="link-button" on:click=move |_| show_forgot.set(true)>
                    "¿Olvidaste tu contraseña?"
                </button>
                <p class="auth-card__footer">
                    "¿No tienes cuenta? "
                    <a href="/register">"Regístrate"</a>
                </p>
            </div>

            <Show when=move || state.with(|s| s.success)>
                <div class="dialog-backdrop">
                    <div class="dialog dialog--compact">
                        <h2>"¡Bienvenido/a!"</h2>
                        <p>"Inicio de sesión exitoso. Redirigiendo..."</p>
                    </div>
                </div>
            </Show>
            <Show when=move || show_forgot.get()>
                <ForgotPasswordModal on_close=Callback::new(move |()| show_forgot.set(false))/>
            </Show>
            {move || {
                reset_token
                    .get()
                    .map(|token| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| close_reset.run(())>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <ResetPasswordForm token=token on_done=close_reset/>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
