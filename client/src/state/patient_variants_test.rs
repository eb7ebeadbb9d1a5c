use super::*;

fn variant(id: i64, rsid: &str, categoria: &str) -> Variant {
    Variant { id, rsid: rsid.to_owned(), categoria: categoria.to_owned(), ..Variant::default() }
}

fn loaded(rows: Vec<Variant>) -> PatientVariantsState {
    let mut state = PatientVariantsState::default();
    let ticket = state.open(7, "Ana Pérez".to_owned());
    state.finish::<String>(ticket, Ok(rows));
    state
}

#[test]
fn opening_resets_previous_patient() {
    let mut state = loaded(vec![variant(1, "rs1", "rasgos")]);
    state.query.set_search("rs1".to_owned());
    state.open(9, "Luis".to_owned());
    assert_eq!(state.user_id, Some(9));
    assert!(state.rows().is_empty());
    assert!(state.query.search.is_empty());
    assert!(state.remote.loading);
}

#[test]
fn country_is_not_searched() {
    let mut v = variant(1, "rs1", "rasgos");
    v.pais = "Chile".to_owned();
    let mut state = loaded(vec![v]);
    state.query.set_search("chile".to_owned());
    assert_eq!(state.page().total, 0);
    state.query.set_search("RS1".to_owned());
    assert_eq!(state.page().total, 1);
}

#[test]
fn all_category_shows_everything() {
    let mut state = loaded(vec![variant(1, "a", "rasgos"), variant(2, "b", "enfermedades")]);
    assert_eq!(state.page().total, 2);
    state.query.set_category("rasgos".to_owned());
    assert_eq!(state.page().items[0].0.id, 1);
    assert_eq!(state.categories(), vec!["enfermedades".to_owned(), "rasgos".to_owned()]);
}

#[test]
fn ten_rows_per_page() {
    let rows = (1..=23).map(|i| variant(i, &format!("rs{i}"), "")).collect();
    let mut state = loaded(rows);
    assert_eq!(state.page().total_pages, 3);
    state.query.page = 3;
    assert_eq!(state.page().items.len(), 3);
}

#[test]
fn response_after_close_is_dropped() {
    let mut state = PatientVariantsState::default();
    let ticket = state.open(1, String::new());
    state.close();
    state.open(2, String::new());
    assert!(!state.finish::<String>(ticket, Ok(vec![variant(1, "x", "")])));
    assert!(state.rows().is_empty());
}
