use super::*;

fn profile(user_id: i64, code: &str) -> ReceptionProfile {
    ReceptionProfile {
        user_id,
        first_name: "Ana".to_owned(),
        last_name: "Pérez".to_owned(),
        rut: "20.516.585-1".to_owned(),
        sample_code: code.to_owned(),
        ..ReceptionProfile::default()
    }
}

fn selected() -> ReceptionState {
    let mut state = ReceptionState { search: "SQ-1".to_owned(), ..ReceptionState::default() };
    let (ticket, _) = state.begin_search().unwrap();
    state.finish_search::<String>(ticket, Ok(vec![profile(4, "SQ-1")]));
    state
}

// =============================================================
// Search
// =============================================================

#[test]
fn blank_search_is_rejected_locally() {
    let mut state = ReceptionState { search: "   ".to_owned(), ..ReceptionState::default() };
    assert!(state.begin_search().is_none());
    assert_eq!(state.error.as_deref(), Some(SEARCH_EMPTY));
    assert!(!state.searching);
}

#[test]
fn search_trims_code() {
    let mut state = ReceptionState { search: " SQ-9 ".to_owned(), ..ReceptionState::default() };
    let (_, code) = state.begin_search().unwrap();
    assert_eq!(code, "SQ-9");
    assert!(state.searching);
}

#[test]
fn single_match_is_selected() {
    let state = selected();
    assert_eq!(state.selected.as_ref().map(|p| p.user_id), Some(4));
    assert!(!state.searching);
    assert!(state.info.is_none());
}

#[test]
fn zero_or_many_matches_show_not_found() {
    let mut state = selected();
    let (ticket, _) = state.begin_search().unwrap();
    state.finish_search::<String>(ticket, Ok(vec![profile(1, "a"), profile(2, "b")]));
    assert!(state.selected.is_none());
    assert_eq!(state.info.as_deref(), Some(NOT_FOUND));
}

#[test]
fn stale_search_is_ignored() {
    let mut state = ReceptionState { search: "x".to_owned(), ..ReceptionState::default() };
    let (old, _) = state.begin_search().unwrap();
    let (new, _) = state.begin_search().unwrap();
    state.finish_search::<String>(old, Ok(vec![profile(1, "x")]));
    assert!(state.selected.is_none());
    state.finish_search::<String>(new, Err("falló".to_owned()));
    assert_eq!(state.error.as_deref(), Some("falló"));
}

// =============================================================
// Checklist
// =============================================================

#[test]
fn completion_requires_selection() {
    let mut state = ReceptionState::default();
    assert!(state.begin_complete().is_none());
    assert_eq!(state.error.as_deref(), Some(NO_SELECTION));
}

#[test]
fn completion_requires_every_item() {
    let mut state = selected();
    for (key, _) in &CHECKLIST_ITEMS[..5] {
        state.toggle_check(key);
    }
    assert!(state.begin_complete().is_none());
    assert_eq!(state.error.as_deref(), Some(CHECKLIST_INCOMPLETE));

    state.toggle_check("etiqueta");
    assert!(state.checklist.is_complete());
    assert_eq!(state.begin_complete(), Some(4));
    assert!(state.saving);
    assert!(!state.checklist.is_checked("rut"));
}

#[test]
fn unknown_checklist_key_is_ignored() {
    let mut checklist = Checklist::default();
    checklist.toggle("firma");
    assert_eq!(checklist, Checklist::default());
}

#[test]
fn applied_profile_switches_to_pending_notice() {
    let mut state = selected();
    let mut updated = profile(4, "SQ-1");
    updated.service_status = ServiceStatus::Pending;
    state.apply_profile(updated, MARKED_PENDING);
    assert!(state.is_pending());
    assert_eq!(state.info.as_deref(), Some(MARKED_PENDING));
}

// =============================================================
// Label
// =============================================================

#[test]
fn label_requires_sample_code() {
    assert!(label_html(&profile(1, "")).is_none());
}

#[test]
fn label_escapes_markup() {
    let mut p = profile(1, "SQ<1>");
    p.first_name = "A&B".to_owned();
    let html = label_html(&p).unwrap();
    assert!(html.contains("SQ&lt;1&gt;"));
    assert!(html.contains("A&amp;B Pérez"));
    assert!(html.contains("20.516.585-1"));
}
