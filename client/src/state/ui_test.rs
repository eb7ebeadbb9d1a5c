use super::*;

#[test]
fn ui_state_default_has_no_toasts() {
    let state = UiState::default();
    assert!(state.toasts.is_empty());
    assert!(!state.mobile_menu_open);
}

#[test]
fn push_toast_assigns_unique_ids() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Success, "Guardado");
    let b = state.push_toast(ToastKind::Error, "Falló");
    assert_ne!(a, b);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "Guardado");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Info, "uno");
    let _b = state.push_toast(ToastKind::Info, "dos");
    state.dismiss(&a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "dos");
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn toast_kind_classes() {
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
}
