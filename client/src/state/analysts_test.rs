use super::*;

fn user(id: i64, first: &str, last: &str, email: &str) -> User {
    User {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        username: format!("user{id}"),
        ..User::default()
    }
}

fn loaded(users: Vec<User>) -> AnalystsState {
    let mut state = AnalystsState::default();
    let ticket = state.remote.begin();
    state.remote.finish::<String>(ticket, Ok(users));
    state
}

#[test]
fn list_name_prefers_full_name() {
    assert_eq!(list_name(&user(1, "Ana", "Pérez", "a@x.cl")), "Ana Pérez");
    assert_eq!(list_name(&user(2, "Ana", "", "a@x.cl")), "Ana");
    assert_eq!(list_name(&user(3, "", "", "a@x.cl")), "user3");
}

#[test]
fn visible_excludes_self_and_filters() {
    let mut state = loaded(vec![
        user(1, "Admin", "Root", "root@x.cl"),
        user(2, "Ana", "Pérez", "ana@x.cl"),
        user(3, "Luis", "Soto", "luis@x.cl"),
    ]);
    assert_eq!(state.visible(Some(1)).len(), 2);

    state.search = "PÉREZ".to_owned();
    let ids: Vec<i64> = state.visible(Some(1)).iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2]);

    state.search = "user3".to_owned();
    assert_eq!(state.visible(Some(1))[0].id, 3);

    state.search = "root".to_owned();
    assert!(state.visible(Some(1)).is_empty());
}

#[test]
fn analyst_count_uses_flag_or_role() {
    let mut flagged = user(1, "", "", "");
    flagged.is_analyst = true;
    let mut by_role = user(2, "", "", "");
    by_role.roles = vec!["analista".to_owned()];
    let state = loaded(vec![flagged, by_role, user(3, "", "", "")]);
    assert_eq!(state.analyst_count(), 2);
}

#[test]
fn toggle_updates_row_and_message() {
    let mut state = loaded(vec![user(5, "Ana", "Pérez", "")]);
    state.begin_toggle();
    assert!(state.saving);
    state.apply_toggle(5, true);
    assert!(!state.saving);
    assert_eq!(state.analyst_count(), 1);
    assert_eq!(state.message.as_deref(), Some("Permiso de Analista asignado correctamente."));

    state.apply_toggle(5, false);
    assert_eq!(state.analyst_count(), 0);
    assert_eq!(state.message.as_deref(), Some("Permiso de Analista revocado correctamente."));
}
