use super::*;

#[test]
fn continent_codes_resolve_by_display_name() {
    assert_eq!(continent_code("Europa"), Some("EUR"));
    assert_eq!(continent_code("América"), Some("AMR"));
    assert_eq!(continent_code("Atlántida"), None);
}

#[test]
fn countries_for_unknown_continent_is_empty() {
    assert!(countries_for("").is_empty());
    assert!(countries_for("Asia").contains(&"Japón"));
}

#[test]
fn every_listed_country_has_a_population_code() {
    for continent in &CONTINENTS {
        for country in continent.countries {
            assert!(country_code(country).is_some(), "missing code for {country}");
        }
    }
}

#[test]
fn source_lists_end_with_other() {
    assert_eq!(DATABASE_SOURCES.last(), Some(&OTHER));
    assert_eq!(ANCESTRY_SOURCES.last(), Some(&OTHER));
    assert_eq!(EVIDENCE_TYPES.last(), Some(&OTHER));
}
