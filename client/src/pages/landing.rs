//! Public landing page with product summary and contact form.

use leptos::prelude::*;
use schema::auth::ContactMessage;

use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState, notify};
use crate::util::validation::{is_valid_email, required};

const SECTIONS: [(&str, &str); 4] = [
    ("Ancestría", "Descubre de qué continentes, países y pueblos originarios proviene tu ADN."),
    ("Rasgos", "Conoce cómo tus genes influyen en rasgos físicos y de comportamiento."),
    ("Salud", "Revisa predisposiciones a enfermedades y biomarcadores relevantes."),
    ("Farmacogenética", "Entiende cómo podrías responder a distintos medicamentos."),
];

fn validate_contact(msg: &ContactMessage) -> Result<(), &'static str> {
    required(&msg.nombre, "Ingresa tu nombre")?;
    if !is_valid_email(&msg.correo) {
        return Err("Ingresa un correo válido");
    }
    required(&msg.mensaje, "Escribe un mensaje")
}

#[component]
fn ContactForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let nombre = RwSignal::new(String::new());
    let correo = RwSignal::new(String::new());
    let mensaje = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let msg = ContactMessage {
            nombre: nombre.get_untracked().trim().to_owned(),
            correo: correo.get_untracked().trim().to_owned(),
            mensaje: mensaje.get_untracked().trim().to_owned(),
        };
        if let Err(e) = validate_contact(&msg) {
            error.set(Some(e.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_contact(&msg).await {
                Ok(()) => {
                    notify(ui, ToastKind::Success, "¡Gracias! Te responderemos pronto.");
                    nombre.set(String::new());
                    correo.set(String::new());
                    mensaje.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = msg;
            notify(ui, ToastKind::Error, schema::CONNECTION_ERROR);
            busy.set(false);
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <input
                class="auth-input"
                type="text"
                placeholder="Nombre"
                prop:value=move || nombre.get()
                on:input=move |ev| nombre.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="email"
                placeholder="Correo"
                prop:value=move || correo.get()
                on:input=move |ev| correo.set(event_target_value(&ev))
            />
            <textarea
                class="auth-input"
                rows="4"
                placeholder="¿En qué te podemos ayudar?"
                prop:value=move || mensaje.get()
                on:input=move |ev| mensaje.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Enviando..." } else { "Enviar mensaje" }}
            </button>
        </form>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let home = move || auth.with(|a| if a.user.is_some() { a.landing_route() } else { "/login" });

    view! {
        <div class="landing">
            <header class="landing__nav">
                <a href="/" class="landing__brand">"Sequoh"</a>
                <nav>
                    <a href="#contacto">"Contacto"</a>
                    <a href=home class="btn btn--ghost">
                        {move || if auth.with(|a| a.user.is_some()) { "Mi cuenta" } else { "Iniciar sesión" }}
                    </a>
                    <a href="/register" class="btn btn--primary">"Crear cuenta"</a>
                </nav>
            </header>
            <section class="landing__hero">
                <h1>"Tu ADN, explicado."</h1>
                <p>"Un test genético que convierte tus datos en información clara sobre tu origen, tus rasgos y tu salud."</p>
                <a href="/register" class="btn btn--primary">"Comenzar"</a>
            </section>
            <section class="landing__grid">
                {SECTIONS
                    .iter()
                    .map(|(title, text)| {
                        view! {
                            <article class="landing__card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="landing__contact" id="contacto">
                <h2>"Contáctanos"</h2>
                <ContactForm/>
            </section>
        </div>
    }
}
