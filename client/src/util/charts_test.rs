use super::*;
use schema::report::{Drug, DiseaseSnp};
use serde_json::json;

fn snp(mag: Option<f64>) -> DiseaseSnp {
    DiseaseSnp { magnitud_efecto: mag, ..DiseaseSnp::default() }
}

fn trait_in(group: &str, pct: Option<f64>) -> Trait {
    Trait { group: group.to_owned(), percentage: pct, ..Trait::default() }
}

fn drug(name: &str, magnitud: f64) -> Drug {
    Drug { name: name.to_owned(), magnitud, ..Drug::default() }
}

// =============================================================
// Percentages
// =============================================================

#[test]
fn percentages_round_and_tolerate_zero_total() {
    assert_eq!(percentages(&[1.0, 1.0, 1.0]), vec![33, 33, 33]);
    assert_eq!(percentages(&[1.0, 3.0]), vec![25, 75]);
    assert_eq!(percentages(&[0.0, 0.0]), vec![0, 0]);
    assert_eq!(percent_of(2.0, 0.0), 200);
}

// =============================================================
// Diseases
// =============================================================

#[test]
fn disease_stats_weighted_score() {
    let groups = DiseaseGroups { alta: vec![snp(Some(3.5))], media: vec![snp(Some(1.5))], baja: vec![snp(None), snp(Some(0.0))] };
    let stats = DiseaseStats::from_groups(&groups);
    assert_eq!((stats.high, stats.medium, stats.low), (1, 1, 2));
    // (3 + 2 + 1 + 1) / 12
    assert_eq!(stats.score, 58);
    assert_eq!(stats.avg_magnitude, "2.50");
    assert_eq!(stats.pathogenic, 1);
}

#[test]
fn disease_stats_empty() {
    let stats = DiseaseStats::from_groups(&DiseaseGroups::default());
    assert_eq!(stats.score, 0);
    assert_eq!(stats.avg_magnitude, "0.00");
}

#[test]
fn explicit_high_priority_counts_as_pathogenic() {
    let mut flagged = snp(Some(1.0));
    flagged.prioridad = Some(json!("alta"));
    let groups = DiseaseGroups { baja: vec![flagged, snp(Some(1.0))], ..DiseaseGroups::default() };
    assert_eq!(DiseaseStats::from_groups(&groups).pathogenic, 1);
}

#[test]
fn frequency_scales_fractions() {
    assert_eq!(format_frequency(Some(0.125)), "12.50%");
    assert_eq!(format_frequency(Some(37.0)), "37.00%");
    assert_eq!(format_frequency(None), "N/D");
}

#[test]
fn magnitude_pips_round_and_clamp() {
    assert_eq!(magnitude_pips(Some(2.6)), 3);
    assert_eq!(magnitude_pips(Some(9.0)), 5);
    assert_eq!(magnitude_pips(Some(-1.0)), 0);
    assert_eq!(magnitude_pips(None), 0);
}

// =============================================================
// Biomarkers
// =============================================================

#[test]
fn risk_distribution_counts_user_results() {
    let bio = |risk: &str| {
        let mut b = Biomarker::default();
        b.user_result.risk = risk.to_owned();
        b
    };
    let dist = risk_distribution(&[bio("alto"), bio("Bajo"), bio("medio"), bio("alto"), bio("?")]);
    assert_eq!((dist.bajo, dist.medio, dist.alto), (1, 1, 2));
}

// =============================================================
// Traits
// =============================================================

#[test]
fn trait_groups_follow_display_order() {
    let traits = [
        trait_in("Zeta", Some(10.0)),
        trait_in("Cognición", Some(70.0)),
        trait_in("", None),
        trait_in("Metabolismo", Some(20.0)),
        trait_in("Alfa", Some(40.0)),
        trait_in("Cognición", Some(81.0)),
    ];
    let groups = trait_groups(&traits);
    let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Metabolismo", "Cognición", "Rasgos", "Alfa", "Zeta"]);
    let cognition = &groups[1];
    assert_eq!(cognition.value, 76);
    assert_eq!(cognition.level(), "Alto");
    assert_eq!(groups[2].value, 50);
}

#[test]
fn trait_group_colors_follow_first_seen_order() {
    let groups = trait_groups(&[trait_in("Rasgos", None), trait_in("Metabolismo", None)]);
    assert_eq!(groups[0].name, "Metabolismo");
    assert_eq!(groups[0].color, GROUP_COLORS[1]);
    assert_eq!(groups[1].color, GROUP_COLORS[0]);
}

#[test]
fn level_label_thresholds() {
    assert_eq!(level_label(61.0), "Alto");
    assert_eq!(level_label(60.9), "Medio");
    assert_eq!(level_label(31.0), "Medio");
    assert_eq!(level_label(30.0), "Bajo");
}

// =============================================================
// Biometrics and pharmacogenetics
// =============================================================

#[test]
fn biometric_impact_and_bar() {
    assert_eq!(Impact::biometric(3.5), Impact::High);
    assert_eq!(Impact::biometric(2.0), Impact::Medium);
    assert_eq!(Impact::biometric(1.9), Impact::Low);
    assert_eq!(magnitude_bar(1.5), 50);
    assert_eq!(magnitude_bar(4.0), 100);
}

#[test]
fn biometric_summary_averages_scores() {
    let variant = |m: f64| BiometricVariant { magnitud_efecto: Some(m), ..BiometricVariant::default() };
    let summary = biometric_summary(&[variant(4.0), variant(2.5), variant(1.0), variant(0.5)]);
    assert_eq!((summary.high, summary.medium, summary.low), (1, 1, 2));
    assert!((summary.average_score - 1.75).abs() < 1e-9);
    assert!(biometric_summary(&[]).average_score.abs() < f64::EPSILON);
}

#[test]
fn drug_impact_thresholds() {
    assert_eq!(Impact::drug(3.0), Impact::High);
    assert_eq!(Impact::drug(2.0), Impact::Medium);
    assert_eq!(Impact::drug(1.99), Impact::Low);
}

#[test]
fn drug_filter_by_search_and_impact() {
    let systems = vec![
        DrugSystem { name: "Cardiovascular".to_owned(), drugs: vec![drug("Warfarina", 3.0), drug("Clopidogrel", 1.0)], ..DrugSystem::default() },
        DrugSystem { name: "Nervioso".to_owned(), drugs: vec![drug("Codeína", 2.0)], ..DrugSystem::default() },
    ];
    let hits = filter_drug_systems(&systems, "cardio", "todos");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].drugs.len(), 2);

    let hits = filter_drug_systems(&systems, "", "alto");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].drugs[0].name, "Warfarina");

    let hits = filter_drug_systems(&systems, "CODE", "todos");
    assert_eq!(hits[0].name, "Nervioso");
    assert!(filter_drug_systems(&systems, "nada", "todos").is_empty());

    let summary = drug_summary(&systems);
    assert_eq!((summary.high, summary.medium, summary.low), (1, 1, 1));
}

// =============================================================
// Ancestry
// =============================================================

#[test]
fn top_regions_groups_remainder() {
    let region = |name: &str, pct: f64| AncestryRegion { name: name.to_owned(), percentage: pct, ..AncestryRegion::default() };
    let regions = [region("A", 10.0), region("B", 50.0), region("C", 30.0), region("D", 10.0)];
    let top = top_regions(&regions, 2);
    assert_eq!(top, vec![("B".to_owned(), 50.0), ("C".to_owned(), 30.0), ("Otros".to_owned(), 20.0)]);
    assert_eq!(top_regions(&regions, 4).len(), 4);
}

#[test]
fn ancestry_weight_threshold() {
    assert_eq!(ancestry_weight(20.5), "predominante");
    assert_eq!(ancestry_weight(20.0), "parte");
}

// =============================================================
// Counters
// =============================================================

#[test]
fn thousands_uses_dot_separator() {
    assert_eq!(thousands(0), "0");
    assert_eq!(thousands(999), "999");
    assert_eq!(thousands(1_234_567), "1.234.567");
    assert_eq!(thousands(-12_000), "-12.000");
}
