use super::*;

fn variant(id: i64, rsid: &str, fenotipo: &str, categoria: &str) -> Variant {
    Variant {
        id,
        rsid: rsid.to_owned(),
        fenotipo: fenotipo.to_owned(),
        categoria: categoria.to_owned(),
        ..Variant::default()
    }
}

fn loaded(variants: Vec<Variant>) -> VariantsState {
    let mut state = VariantsState::default();
    let t = state.remote.begin();
    state.remote.finish::<String>(t, Ok(variants));
    state
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn search_matches_rsid_phenotype_and_chromosome() {
    let mut chr = variant(3, "rs3", "Otro", "rasgos");
    chr.cromosoma = "chrX".to_owned();
    let mut state = loaded(vec![variant(1, "rs429358", "Alzheimer", "enfermedades"), variant(2, "rs1", "Lactosa", "rasgos"), chr]);

    state.query.set_search("ALZ".to_owned());
    assert_eq!(state.page().items.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1]);
    state.query.set_search("429".to_owned());
    assert_eq!(state.page().total, 1);
    state.query.set_search("chrx".to_owned());
    assert_eq!(state.page().items[0].id, 3);
}

#[test]
fn category_filter_and_derived_categories() {
    let mut state = loaded(vec![
        variant(1, "a", "", "rasgos"),
        variant(2, "b", "", "enfermedades"),
        variant(3, "c", "", "rasgos"),
        variant(4, "d", "", ""),
    ]);
    assert_eq!(state.categories(), vec!["enfermedades".to_owned(), "rasgos".to_owned()]);
    state.query.set_category("rasgos".to_owned());
    assert_eq!(state.page().total, 2);
}

// =============================================================
// Sorting and expansion
// =============================================================

#[test]
fn default_sort_is_id_ascending() {
    let state = loaded(vec![variant(3, "c", "", ""), variant(1, "a", "", ""), variant(2, "b", "", "")]);
    assert_eq!(state.page().items.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn numeric_columns_sort_numerically() {
    let mut a = variant(1, "a", "", "");
    a.posicion = Some(900);
    let mut b = variant(2, "b", "", "");
    b.posicion = Some(10_000);
    let c = variant(3, "c", "", "");
    let mut state = loaded(vec![a, b, c]);
    state.set_sort_key("posicion");
    state.toggle_sort_dir();
    assert_eq!(state.page().items.iter().map(|v| v.id).collect::<Vec<_>>(), vec![2, 1, 3]);
    assert_eq!(state.sort_dir(), SortDir::Desc);
}

#[test]
fn sort_key_change_keeps_direction() {
    let mut state = VariantsState::default();
    state.toggle_sort_dir();
    state.set_sort_key("rsid");
    assert_eq!(state.sort_key(), "rsid");
    assert_eq!(state.sort_dir(), SortDir::Desc);
}

#[test]
fn expanding_same_row_collapses_it() {
    let mut state = VariantsState::default();
    state.toggle_expanded(4);
    assert_eq!(state.expanded, Some(4));
    state.toggle_expanded(5);
    assert_eq!(state.expanded, Some(5));
    state.toggle_expanded(5);
    assert_eq!(state.expanded, None);
}

#[test]
fn phenotype_preview_truncates() {
    let v = variant(1, "rs", &"x".repeat(50), "");
    assert_eq!(v.short_fenotipo(PHENOTYPE_PREVIEW).chars().count(), PHENOTYPE_PREVIEW + 3);
}
