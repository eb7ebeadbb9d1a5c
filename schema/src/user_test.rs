use super::*;
use serde_json::json;

// =============================================================
// Status enums
// =============================================================

#[test]
fn service_status_decodes_wire_names() {
    let status: ServiceStatus = serde_json::from_value(json!("PENDING")).unwrap();
    assert_eq!(status, ServiceStatus::Pending);
    let status: ServiceStatus = serde_json::from_value(json!("SOMETHING_NEW")).unwrap();
    assert_eq!(status, ServiceStatus::Unknown);
}

#[test]
fn service_status_unknown_behaves_like_no_purchased() {
    assert_eq!(ServiceStatus::Unknown.effective(), ServiceStatus::NoPurchased);
    assert_eq!(ServiceStatus::Unknown.label(), "Sin servicio");
    assert_eq!(ServiceStatus::Unknown.as_str(), "NO_PURCHASED");
}

#[test]
fn service_status_labels() {
    assert_eq!(ServiceStatus::NoPurchased.label(), "Sin servicio");
    assert_eq!(ServiceStatus::Pending.label(), "Pendiente");
    assert_eq!(ServiceStatus::Completed.label(), "Completado");
}

#[test]
fn service_status_parse_is_case_insensitive() {
    assert_eq!(ServiceStatus::parse("completed"), ServiceStatus::Completed);
    assert_eq!(ServiceStatus::parse(""), ServiceStatus::Unknown);
}

#[test]
fn sample_status_next_action_progresses() {
    assert_eq!(SampleStatus::PendingCollection.next_action(), Some(SampleAction::MarkTaken));
    assert_eq!(SampleStatus::CollectedPendingAnalysis.next_action(), Some(SampleAction::SentLab));
    assert_eq!(SampleStatus::SentToLab.next_action(), None);
}

#[test]
fn sample_action_serializes_snake_case() {
    assert_eq!(serde_json::to_value(SampleAction::SentLab).unwrap(), json!("sent_lab"));
    assert_eq!(serde_json::to_value(SampleAction::MarkTaken).unwrap(), json!("mark_taken"));
}

// =============================================================
// User decoding
// =============================================================

#[test]
fn from_me_payload_accepts_nested_user() {
    let data = json!({ "user": { "id": 3, "email": "a@b.cl", "service_status": "COMPLETED" } });
    let user = User::from_me_payload(&data).unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.service_status, ServiceStatus::Completed);
}

#[test]
fn from_me_payload_accepts_root_user() {
    let data = json!({ "id": "9", "username": "ana", "roles": null, "service_status": null });
    let user = User::from_me_payload(&data).unwrap();
    assert_eq!(user.id, 9);
    assert!(user.roles.is_empty());
    assert_eq!(user.service_status, ServiceStatus::NoPurchased);
}

// =============================================================
// Display name and roles
// =============================================================

#[test]
fn display_name_follows_fallback_chain() {
    let mut user = User { email: "x@y.cl".to_owned(), ..User::default() };
    assert_eq!(user.display_name(), "x@y.cl");
    user.username = "xy".to_owned();
    assert_eq!(user.display_name(), "xy");
    user.name = "Equis".to_owned();
    assert_eq!(user.display_name(), "Equis");
    user.first_name_camel = "Camel".to_owned();
    assert_eq!(user.display_name(), "Camel");
    user.first_name = "Ana".to_owned();
    assert_eq!(user.display_name(), "Ana");
}

#[test]
fn display_name_defaults_to_usuario() {
    assert_eq!(User::default().display_name(), "Usuario");
}

#[test]
fn full_name_joins_first_and_last() {
    let user = User { first_name: "Ana".to_owned(), last_name: "Rojas".to_owned(), ..User::default() };
    assert_eq!(user.full_name(), "Ana Rojas");
    assert_eq!(User::default().full_name(), "Usuario");
}

#[test]
fn role_prefers_admin_then_analyst_then_reception() {
    let mut user = User { roles: vec!["RECEPCION".to_owned()], ..User::default() };
    assert_eq!(user.role(), Role::Reception);
    user.is_analyst = true;
    assert_eq!(user.role(), Role::Analyst);
    user.groups = vec!["admin".to_owned()];
    assert_eq!(user.role(), Role::Admin);
    assert_eq!(User::default().role(), Role::Patient);
}

#[test]
fn staff_flag_is_admin() {
    let user = User { is_staff: true, ..User::default() };
    assert!(user.is_admin());
    let user = User { is_superuser: true, ..User::default() };
    assert!(user.is_admin());
}

#[test]
fn apply_analyst_toggles_role_list() {
    let mut user = User { roles: vec!["analista".to_owned(), "RECEPCION".to_owned()], ..User::default() };
    user.apply_analyst(false);
    assert!(!user.is_analyst_user());
    assert_eq!(user.roles, vec!["RECEPCION".to_owned()]);
    user.apply_analyst(true);
    assert!(user.is_analyst);
    assert!(user.has_role("ANALISTA"));
}

#[test]
fn patient_code_pads_to_three_digits() {
    let user = User { id: 7, ..User::default() };
    assert_eq!(user.patient_code(), "P007");
    let user = User { id: 1234, ..User::default() };
    assert_eq!(user.patient_code(), "P1234");
    assert_eq!(parse_patient_code("P007"), Some(7));
    assert_eq!(parse_patient_code("X1"), None);
}
