//! Three-step registration wizard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_checklist::PasswordChecklist;
use crate::state::register::{RegisterState, RegisterStep, clean_message, field};

#[component]
fn WizardInput(
    state: RwSignal<RegisterState>,
    key: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    let value = move || {
        state.with(|s| match key {
            field::NOMBRE => s.nombre.clone(),
            field::CORREO => s.correo.clone(),
            field::TELEFONO => s.telefono.clone(),
            field::PASSWORD => s.password.clone(),
            field::CONFIRM => s.password_confirm.clone(),
            _ => String::new(),
        })
    };
    let error = move || state.with(|s| s.error(key).map(str::to_owned));

    view! {
        <div class="form-group">
            <label for=key>{label}</label>
            <input
                id=key
                type=kind
                class="auth-input"
                class:auth-input--error=move || error().is_some()
                prop:value=value
                on:input=move |ev| state.update(|s| s.set_text(key, event_target_value(&ev)))
            />
            {move || error().map(|e| view! { <p class="field-error">{e}</p> })}
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let state = RwSignal::new(RegisterState::default());
    let show_terms = RwSignal::new(false);
    let step = move || state.with(|s| s.step);

    let on_next = move |_| {
        state.update(|s| {
            s.next();
        });
    };
    let on_back = move |_| state.update(RegisterState::back);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.loading) {
            return;
        }
        if state.with_untracked(|s| s.step != RegisterStep::Terms) {
            state.update(|s| {
                s.next();
            });
            return;
        }
        let mut body = None;
        state.update(|s| {
            body = s.submit();
            s.loading = body.is_some();
        });
        let Some(body) = body else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&body).await {
                Ok(reg) => state.update(|s| {
                    s.success = true;
                    s.verification_message = reg.requires_verification.then(|| clean_message(&reg.message));
                }),
                Err(err) => {
                    let fields = err.fields().cloned().unwrap_or_default();
                    state.update(|s| s.apply_backend_errors(err.to_string(), &fields));
                }
            }
            state.update(|s| s.loading = false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            state.update(|s| {
                s.apply_backend_errors(schema::CONNECTION_ERROR.to_owned(), &std::collections::BTreeMap::new());
                s.loading = false;
            });
        }
    };

    // Plain success without verification goes straight to login.
    let navigate_login = navigate.clone();
    Effect::new(move || {
        let done = state.with(|s| s.success && s.verification_message.is_none());
        if done {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <a href="/" class="auth-card__brand">"Sequoh"</a>
                <h1>"Crear cuenta"</h1>
                <ol class="wizard-steps">
                    {RegisterStep::ALL
                        .into_iter()
                        .map(|s| {
                            let class = move || s.indicator_class(step());
                            view! {
                                <li class=class>
                                    <span class="wizard-steps__num">{s.index() + 1}</span>
                                    <span>{s.title()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || step() == RegisterStep::Account>
                        <WizardInput state=state key=field::NOMBRE label="Nombre completo"/>
                        <WizardInput state=state key=field::CORREO label="Correo electrónico" kind="email"/>
                        <WizardInput state=state key=field::TELEFONO label="Teléfono" kind="tel"/>
                    </Show>
                    <Show when=move || step() == RegisterStep::Security>
                        <WizardInput state=state key=field::PASSWORD label="Contraseña" kind="password"/>
                        <PasswordChecklist password=Signal::derive(move || state.with(|s| s.password.clone()))/>
                        <WizardInput state=state key=field::CONFIRM label="Repetir contraseña" kind="password"/>
                    </Show>
                    <Show when=move || step() == RegisterStep::Terms>
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.terminos)
                                on:change=move |ev| state.update(|s| s.set_terms(event_target_checked(&ev)))
                            />
                            " Acepto los "
                            <button type="button" class="link-button" on:click=move |_| show_terms.set(true)>
                                "términos y condiciones"
                            </button>
                        </label>
                        {move || {
                            state.with(|s| s.error(field::TERMINOS).map(str::to_owned))
                                .map(|e| view! { <p class="field-error">{e}</p> })
                        }}
                    </Show>

                    <Show when=move || state.with(|s| !s.global_error.is_empty())>
                        <p class="form-error">{move || state.with(|s| s.global_error.clone())}</p>
                    </Show>

                    <div class="wizard-actions">
                        <Show when=move || step() != RegisterStep::Account>
                            <button type="button" class="btn btn--ghost" on:click=on_back>
                                "Atrás"
                            </button>
                        </Show>
                        <Show
                            when=move || step() == RegisterStep::Terms
                            fallback=move || {
                                view! {
                                    <button type="button" class="btn btn--primary" on:click=on_next>
                                        "Siguiente"
                                    </button>
                                }
                            }
                        >
                            <button type="submit" class="btn btn--primary" disabled=move || state.with(|s| s.loading)>
                                {move || if state.with(|s| s.loading) { "Registrando..." } else { "Crear cuenta" }}
                            </button>
                        </Show>
                    </div>
                </form>
                <p class="auth-card__footer">
                    "¿Ya tienes cuenta? "
                    <a href="/login">"Inicia sesión"</a>
                </p>
            </div>

            <Show when=move || show_terms.get()>
                <div class="dialog-backdrop" on:click=move |_| show_terms.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Términos y condiciones"</h2>
                        <p>
                            "Tus datos genéticos se usan sólo para generar tus reportes. Puedes solicitar su eliminación en cualquier momento."
                        </p>
                        <button class="btn btn--primary" on:click=move |_| show_terms.set(false)>
                            "Entendido"
                        </button>
                    </div>
                </div>
            </Show>
            {move || {
                let navigate = navigate.clone();
                state.with(|s| s.verification_message.clone())
                    .map(|message| {
                        view! {
                            <div class="dialog-backdrop">
                                <div class="dialog">
                                    <h2>"Verificación de cuenta"</h2>
                                    <p>{message}</p>
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| navigate("/login", NavigateOptions::default())
                                    >
                                        "Ir a iniciar sesión"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
