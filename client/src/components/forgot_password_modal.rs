//! "Forgot password" dialog opened from the login page.

use leptos::prelude::*;

use crate::util::validation::is_valid_email;

const SENT: &str = "Si el correo existe, te enviamos un enlace para restablecer la contraseña.";

#[component]
pub fn ForgotPasswordModal(on_close: Callback<()>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let value = email.get_untracked().trim().to_owned();
        if !is_valid_email(&value) {
            error.set(Some("Ingresa un correo válido.".to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&value).await {
                Ok(_) => sent.set(Some(SENT.to_owned())),
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
            error.set(Some(schema::CONNECTION_ERROR.to_owned()));
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>{move || if sent.get().is_some() { "Correo enviado" } else { "¿Olvidaste tu contraseña?" }}</h2>
                    <button class="dialog__close" aria-label="Cerrar" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                <Show
                    when=move || sent.get().is_none()
                    fallback=move || {
                        view! {
                            <p class="dialog__text">{move || sent.get().unwrap_or_default()}</p>
                            <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                                "Volver al inicio de sesión"
                            </button>
                        }
                    }
                >
                    <p class="dialog__text">
                        "Ingresa tu correo y te enviaremos un enlace para crear una nueva contraseña."
                    </p>
                    <form class="auth-form" on:submit=on_submit>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="tu@correo.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || error.get().is_some()>
                            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Enviando..." } else { "Enviar enlace de recuperación" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
