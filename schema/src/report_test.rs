use super::*;
use crate::ApiResponse;
use serde_json::json;

// =============================================================
// Diseases
// =============================================================

#[test]
fn priority_from_value_accepts_words_and_numbers() {
    assert_eq!(Priority::from_value(Some(&json!("alta"))), Priority::High);
    assert_eq!(Priority::from_value(Some(&json!("HIGH"))), Priority::High);
    assert_eq!(Priority::from_value(Some(&json!(1))), Priority::High);
    assert_eq!(Priority::from_value(Some(&json!("medium"))), Priority::Medium);
    assert_eq!(Priority::from_value(Some(&json!(2))), Priority::Medium);
    assert_eq!(Priority::from_value(Some(&json!("baja"))), Priority::Low);
    assert_eq!(Priority::from_value(Some(&json!(7))), Priority::Low);
    assert_eq!(Priority::from_value(None), Priority::Low);
}

#[test]
fn disease_groups_decode_from_nested_payload() {
    let resp = ApiResponse::new(
        200,
        json!({
            "data": {
                "alta": [{ "rsid": "rs1", "magnitud_efecto": "3.2" }],
                "media": null,
                "baja": [{ "rsid": "rs2" }, { "rsid": "rs3" }]
            }
        }),
    );
    let groups: DiseaseGroups = resp.decode_payload().unwrap();
    assert_eq!(groups.total(), 3);
    assert!(groups.media.is_empty());
    assert_eq!(groups.alta[0].magnitud_efecto, Some(3.2));
}

#[test]
fn disease_groups_bucket_flat_list_by_priority() {
    let data = json!({
        "snps": [
            { "rsid": "rs1", "prioridad": "alta" },
            { "rsid": "rs2", "priority": 2 },
            { "rsid": "rs3" },
            { "rsid": "rs4", "prioridad": "high" }
        ]
    });
    let groups = DiseaseGroups::from_payload(&data).unwrap();
    let rsids = |g: &[DiseaseSnp]| g.iter().map(|s| s.rsid.clone()).collect::<Vec<_>>();
    assert_eq!(rsids(&groups.alta), vec!["rs1", "rs4"]);
    assert_eq!(rsids(&groups.media), vec!["rs2"]);
    assert_eq!(rsids(&groups.baja), vec!["rs3"]);
}

#[test]
fn disease_groups_from_payload_accepts_grouped_object() {
    let data = json!({ "data": { "alta": [], "baja": [{ "rsid": "rs9" }] } });
    let groups = DiseaseGroups::from_payload(&data).unwrap();
    assert_eq!(groups.total(), 1);
}

#[test]
fn disease_snp_reads_gene_from_gen_key() {
    let snp: DiseaseSnp = serde_json::from_value(json!({ "rsid": "rs7412", "gen": "APOE" })).unwrap();
    assert_eq!(snp.gene, "APOE");
}

#[test]
fn disease_groups_iter_visits_high_first() {
    let groups = DiseaseGroups {
        alta: vec![DiseaseSnp { rsid: "a".to_owned(), ..DiseaseSnp::default() }],
        media: vec![],
        baja: vec![DiseaseSnp { rsid: "b".to_owned(), ..DiseaseSnp::default() }],
    };
    let order: Vec<_> = groups.iter().map(|(p, s)| (p, s.rsid.as_str())).collect();
    assert_eq!(order, vec![(Priority::High, "a"), (Priority::Low, "b")]);
}

// =============================================================
// Biomarkers
// =============================================================

#[test]
fn biomarkers_decode_camel_case_fields() {
    let data: BiomarkersData = serde_json::from_value(json!({
        "total": 2,
        "global_total": 40,
        "risk_distribution": { "bajo": 1, "medio": 0, "alto": 1 },
        "biomarkers": [{
            "id": 11,
            "rsid": "rs429358",
            "gene": "APOE",
            "userGenotype": "",
            "alleles": { "ref": "T", "alt": "C" },
            "userResult": { "genotype": "CT", "risk": "alto", "magnitude": 3 },
            "allGenotypes": [{ "genotype": "CC", "phenotype": "x", "risk": "alto" }]
        }]
    }))
    .unwrap();
    assert_eq!(data.risk_distribution.total(), 2);
    let bio = &data.biomarkers[0];
    assert_eq!(bio.id, "11");
    assert_eq!(bio.alleles.reference, "T");
    assert_eq!(bio.genotype(), "CT");
    assert_eq!(bio.user_result.magnitude, Some(3.0));
    assert_eq!(bio.all_genotypes.len(), 1);
}

// =============================================================
// Ancestry, traits, biometrics, pharmacogenetics
// =============================================================

#[test]
fn ancestry_regions_tolerate_string_percentages() {
    let data: AncestryData = serde_json::from_value(json!({
        "continents": [{ "name": "Europa", "percentage": "55.5", "variant_count": 10 }],
        "countries": null,
        "total_variants": 120
    }))
    .unwrap();
    assert!((data.continents[0].percentage - 55.5).abs() < f64::EPSILON);
    assert!(data.countries.is_empty());
    assert_eq!(data.total_variants, 120);
}

#[test]
fn indigenous_decodes_people_list() {
    let data: IndigenousData = serde_json::from_value(json!({
        "indigenous_peoples": [{ "name": "Mapuche", "percentage": 12 }],
        "country": "Chile"
    }))
    .unwrap();
    assert_eq!(data.indigenous_peoples[0].name, "Mapuche");
    assert_eq!(data.country, "Chile");
}

#[test]
fn traits_allow_missing_percentage() {
    let data: TraitsData = serde_json::from_value(json!({
        "traits": [{ "rsid": "rs1", "group": "Cognición" }, { "rsid": "rs2", "percentage": 70 }]
    }))
    .unwrap();
    assert_eq!(data.traits[0].percentage, None);
    assert_eq!(data.traits[1].percentage, Some(70.0));
}

#[test]
fn biometrics_matrix_decodes() {
    let data: BiometricsData = serde_json::from_value(json!({
        "rows": ["Peso"],
        "columns": ["Metabolismo"],
        "matrix": [{ "name": "Peso", "cells": [{ "column": "Metabolismo", "impact": "high" }] }],
        "variants": [{ "rsid": "rs9939609", "magnitud_efecto": 3.6, "impact": "high" }]
    }))
    .unwrap();
    assert_eq!(data.matrix[0].cells[0].impact, "high");
    assert_eq!(data.variants[0].magnitud_efecto, Some(3.6));
}

#[test]
fn drug_systems_decode_from_array_payload() {
    let resp = ApiResponse::new(
        200,
        json!({ "data": [{ "name": "Cardiovascular", "drugs": [{ "name": "Warfarina", "magnitud": "3" }] }] }),
    );
    let systems: Vec<DrugSystem> = resp.decode_payload().unwrap();
    assert_eq!(systems[0].drugs[0].name, "Warfarina");
    assert!((systems[0].drugs[0].magnitud - 3.0).abs() < f64::EPSILON);
}
