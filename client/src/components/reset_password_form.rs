//! New-password form shared by the reset page and the login dialog.

use leptos::prelude::*;

use super::password_checklist::PasswordChecklist;
use crate::util::validation::{passwords_match, validate_new_password};

#[component]
pub fn ResetPasswordForm(#[prop(into)] token: String, on_done: Callback<()>) -> impl IntoView {
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);
    let token = StoredValue::new(token);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (pw, again) = (password.get_untracked(), confirm.get_untracked());
        if let Err(msg) = validate_new_password(&pw, &again) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::confirm_password_reset(&token.get_value(), &pw).await {
                Ok(()) => done.set(true),
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, pw);
            error.set(Some(schema::CONNECTION_ERROR.to_owned()));
            busy.set(false);
        }
    };

    view! {
        <Show
            when=move || !done.get()
            fallback=move || {
                view! {
                    <div class="reset-password__done">
                        <h2>"¡Contraseña actualizada!"</h2>
                        <p>"Ya puedes iniciar sesión con tu nueva contraseña."</p>
                        <button class="btn btn--primary" on:click=move |_| on_done.run(())>
                            "Ir a iniciar sesión"
                        </button>
                    </div>
                }
            }
        >
            <form class="auth-form" on:submit=on_submit>
                <h2>"Nueva Contraseña"</h2>
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Nueva contraseña"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <PasswordChecklist password=password/>
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Repetir contraseña"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <Show when=move || !confirm.get().is_empty()>
                    <p class=move || {
                        if passwords_match(&password.get(), &confirm.get()) { "hint hint--ok" } else { "hint hint--bad" }
                    }>
                        {move || {
                            if passwords_match(&password.get(), &confirm.get()) {
                                "Las contraseñas coinciden"
                            } else {
                                "Las contraseñas no coinciden"
                            }
                        }}
                    </p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Actualizando..." } else { "Actualizar Contraseña" }}
                </button>
            </form>
        </Show>
    }
}
