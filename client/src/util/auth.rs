//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated and role-based
//! redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{Area, AuthState};

/// Where a guarded page should send the visitor, if anywhere. Nothing
/// happens until the session lookup finishes.
pub fn guard_redirect(state: &AuthState, area: Area) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if state.user.is_none() {
        return Some("/login");
    }
    if state.can_enter(area) { None } else { Some(state.landing_route()) }
}

/// Redirect away from `area` when the current user may not enter it:
/// anonymous visitors go to `/login`, others to their own landing route.
pub fn install_area_guard<F>(auth: RwSignal<AuthState>, area: Area, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard_redirect(&auth.get(), area) {
            log::debug!("guard redirect {area:?} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Whether a guarded page may render its content yet.
pub fn can_render(auth: RwSignal<AuthState>, area: Area) -> bool {
    let state = auth.get();
    !state.loading && state.can_enter(area)
}

/// End the session and return to the landing page. The local token is
/// dropped even if the backend call fails.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.update(|a| a.user = None);
        log::debug!("signed out");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        crate::util::token::clear_token();
        auth.update(|a| a.user = None);
    }
}

/// Resolve the stored token into a user at startup. A rejected token is
/// cleared so guards send the visitor to `/login`.
pub fn load_session(auth: RwSignal<AuthState>) {
    auth.update(|a| a.loading = true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_current_user().await;
        apply_session(auth, result);
    });
    #[cfg(not(feature = "csr"))]
    apply_session(auth, Err(crate::net::error::ApiError::Network));
}

/// Store the outcome of a `/me/` lookup.
pub fn apply_session(auth: RwSignal<AuthState>, result: Result<schema::User, crate::net::error::ApiError>) {
    match result {
        Ok(user) => {
            log::debug!("session restored for user {}", user.id);
            auth.set(AuthState { user: Some(user), loading: false });
        }
        Err(err) => {
            if err.is_unauthorized() {
                crate::util::token::clear_token();
            } else {
                log::warn!("session lookup failed: {err}");
            }
            auth.set(AuthState { user: None, loading: false });
        }
    }
}
