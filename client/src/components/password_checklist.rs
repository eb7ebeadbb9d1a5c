//! Live password rule checklist.

use leptos::prelude::*;

use crate::util::validation::PasswordRules;

#[component]
pub fn PasswordChecklist(#[prop(into)] password: Signal<String>) -> impl IntoView {
    view! {
        <ul class="password-checklist">
            {move || {
                PasswordRules::check(&password.get())
                    .items()
                    .into_iter()
                    .map(|(label, ok)| {
                        view! {
                            <li class="password-checklist__item" class:password-checklist__item--ok=ok>
                                <span aria-hidden="true">{if ok { "✓" } else { "○" }}</span>
                                " "
                                {label}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
