use super::*;

#[test]
fn analyst_sees_reports_and_variants_only() {
    let paths: Vec<&str> = back_office_nav(Role::Analyst).iter().map(|i| i.path).collect();
    assert_eq!(paths, vec!["/admin", "/admin/reports", "/admin/variants"]);
}

#[test]
fn admin_sees_every_section() {
    let nav = back_office_nav(Role::Admin);
    assert!(nav.iter().any(|i| i.path == "/admin/analysts"));
    assert!(nav.iter().any(|i| i.path == "/reception"));
}

#[test]
fn reception_and_patient_entries() {
    assert_eq!(back_office_nav(Role::Reception).len(), 1);
    assert!(back_office_nav(Role::Patient).is_empty());
    assert_eq!(PATIENT_NAV[0].path, "/dashboard");
}

#[test]
fn root_items_match_exactly() {
    assert!(is_active("/dashboard", "/dashboard/"));
    assert!(!is_active("/dashboard", "/dashboard/rasgos"));
    assert!(is_active("/dashboard/rasgos", "/dashboard/rasgos"));
    assert!(!is_active("/admin", "/admin/reports"));
    assert!(is_active("/admin/reports", "/admin/reports"));
}
