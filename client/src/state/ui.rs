//! Local UI chrome state (toasts, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the page data states so any
//! component can raise a notification without knowing who renders it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    pub mobile_menu_open: bool,
}

impl UiState {
    /// Queue a toast and return its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast { id: id.clone(), kind, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Show a toast that dismisses itself after the configured delay.
pub fn notify(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = String::new();
    ui.update(|s| id = s.push_toast(kind, message));
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::util::config::TOAST_TTL_MS).await;
        ui.update(|s| s.dismiss(&id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}
