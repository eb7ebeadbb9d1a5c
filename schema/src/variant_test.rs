use super::*;
use serde_json::json;

#[test]
fn risk_level_from_label_matches_substrings() {
    assert_eq!(RiskLevel::from_label("Alto"), RiskLevel::High);
    assert_eq!(RiskLevel::from_label("riesgo ALTO"), RiskLevel::High);
    assert_eq!(RiskLevel::from_label("Intermedio"), RiskLevel::Intermediate);
    assert_eq!(RiskLevel::from_label("medio"), RiskLevel::Intermediate);
    assert_eq!(RiskLevel::from_label("Bajo"), RiskLevel::Low);
    assert_eq!(RiskLevel::from_label("N/A"), RiskLevel::Unknown);
    assert_eq!(RiskLevel::from_label(""), RiskLevel::Unknown);
}

#[test]
fn risk_level_colors() {
    assert_eq!(RiskLevel::High.color(), "#EF4444");
    assert_eq!(RiskLevel::Intermediate.color(), "#F59E0B");
    assert_eq!(RiskLevel::Low.color(), "#10B981");
    assert_eq!(RiskLevel::Unknown.color(), NEUTRAL_COLOR);
}

#[test]
fn category_color_is_case_insensitive_with_fallback() {
    assert_eq!(category_color("Rasgos"), "#3B82F6");
    assert_eq!(category_color("biometrica"), "#EC4899");
    assert_eq!(category_color("farmacogenetica"), "#F59E0B");
    assert_eq!(category_color("otro"), NEUTRAL_COLOR);
}

#[test]
fn variant_decodes_loose_numeric_columns() {
    let variant: Variant = serde_json::from_value(json!({
        "id": 4,
        "rsid": "rs12913832",
        "cromosoma": 15,
        "posicion": "28365618",
        "magnitud_efecto": "2.5",
        "af_pais": null,
        "nivel_riesgo": "Alto"
    }))
    .unwrap();
    assert_eq!(variant.cromosoma, "15");
    assert_eq!(variant.posicion, Some(28_365_618));
    assert_eq!(variant.magnitud_efecto, Some(2.5));
    assert_eq!(variant.af_pais, None);
    assert_eq!(variant.risk(), RiskLevel::High);
    assert_eq!(variant.fenotipo, "");
}

#[test]
fn truncate_chars_respects_multibyte_text() {
    assert_eq!(truncate_chars("corto", 40), "corto");
    assert_eq!(truncate_chars("ñandú azul", 5), "ñandú...");
}

#[test]
fn short_fenotipo_cuts_at_forty() {
    let variant = Variant { fenotipo: "x".repeat(45), ..Variant::default() };
    let short = variant.short_fenotipo(40);
    assert_eq!(short.chars().count(), 43);
    assert!(short.ends_with("..."));
}

#[test]
fn new_variant_blank_uses_defaults() {
    let blank = NewVariant::blank("2026-01-31");
    assert_eq!(blank.categoria, "rasgos");
    assert_eq!(blank.nivel_riesgo, "Bajo");
    assert_eq!(blank.fecha_actualizacion, "2026-01-31");
    assert!(blank.rsid.is_empty());
}

#[test]
fn new_variant_serializes_all_fields_as_text() {
    let value = serde_json::to_value(NewVariant::blank("2026-01-31")).unwrap();
    assert_eq!(value["posicion"], json!(""));
    assert_eq!(value.as_object().map(serde_json::Map::len), Some(21));
}
