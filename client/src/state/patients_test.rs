use super::*;

fn user(id: i64, first: &str, last: &str, rut: &str) -> User {
    User {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        rut: rut.to_owned(),
        username: format!("u{id}"),
        ..User::default()
    }
}

fn status(has_report: bool, service: ServiceStatus) -> UserReportStatus {
    UserReportStatus {
        has_report,
        service_status: Some(service),
        report_filename: Some("ana_205165851.txt".to_owned()),
        report_date: Some("2026-01-02".to_owned()),
    }
}

fn loaded() -> PatientsState {
    let mut state = PatientsState::default();
    let ticket = state.remote.begin();
    let rows = vec![
        PatientRow::new(&user(1, "Ana", "Pérez", "20.516.585-1"), Some(status(true, ServiceStatus::Completed))),
        PatientRow::new(&user(2, "Luis", "Soto", ""), Some(status(false, ServiceStatus::Pending))),
        PatientRow::new(&user(12, "", "", "11.111.111-1"), None),
    ];
    state.remote.finish::<String>(ticket, Ok(rows));
    state
}

// =============================================================
// Row assembly
// =============================================================

#[test]
fn row_uses_padded_code_and_fallbacks() {
    let state = loaded();
    let rows = state.rows();
    assert_eq!(rows[0].code, "P001");
    assert_eq!(rows[0].name, "Ana Pérez");
    assert_eq!(rows[1].rut, NO_RUT);
    assert_eq!(rows[1].email, NO_RUT);
    assert_eq!(rows[2].code, "P012");
    assert_eq!(rows[2].name, "u12");
    assert!(!rows[2].has_report);
    assert_eq!(rows[2].service_status, ServiceStatus::NoPurchased);
}

#[test]
fn report_details_are_dropped_without_report() {
    let row = PatientRow::new(&user(3, "A", "B", ""), Some(status(false, ServiceStatus::Unknown)));
    assert!(row.report_name.is_none());
    assert!(row.report_date.is_none());
    assert_eq!(row.service_status, ServiceStatus::NoPurchased);
}

#[test]
fn missing_report_status_keeps_user_service_status() {
    let mut pending = user(5, "Eva", "Rojas", "");
    pending.service_status = ServiceStatus::Pending;

    let row = PatientRow::new(&pending, None);
    assert_eq!(row.service_status, ServiceStatus::Pending);
    assert!(ReportFilter::Pendiente.matches(&row));

    let blank = UserReportStatus { has_report: false, ..UserReportStatus::default() };
    let row = PatientRow::new(&pending, Some(blank));
    assert_eq!(row.service_status, ServiceStatus::Pending);
}

#[test]
fn report_status_overrides_user_service_status() {
    let mut pending = user(6, "Eva", "Rojas", "");
    pending.service_status = ServiceStatus::Pending;
    let row = PatientRow::new(&pending, Some(status(true, ServiceStatus::Completed)));
    assert_eq!(row.service_status, ServiceStatus::Completed);
}

#[test]
fn staff_are_not_patients() {
    let mut admin = user(1, "", "", "");
    admin.is_staff = true;
    let mut root = user(2, "", "", "");
    root.is_superuser = true;
    let kept = patients_only(vec![admin, root, user(3, "", "", "")]);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, 3);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filters_follow_report_and_service_state() {
    let mut state = loaded();
    let ids = |s: &PatientsState| s.visible().iter().map(|r| r.user_id).collect::<Vec<_>>();
    assert_eq!(ids(&state), vec![1, 2, 12]);
    state.filter = ReportFilter::SinReporte;
    assert_eq!(ids(&state), vec![2, 12]);
    state.filter = ReportFilter::Pendiente;
    assert_eq!(ids(&state), vec![2]);
    state.filter = ReportFilter::Subido;
    assert_eq!(ids(&state), vec![1]);
}

#[test]
fn search_covers_name_rut_and_code() {
    let mut state = loaded();
    state.search = "soto".to_owned();
    assert_eq!(state.visible()[0].user_id, 2);
    state.search = "11.111".to_owned();
    assert_eq!(state.visible()[0].user_id, 12);
    state.search = "p001".to_owned();
    assert_eq!(state.visible()[0].user_id, 1);
}

#[test]
fn filter_keys_parse_with_default() {
    assert_eq!(ReportFilter::parse("subido"), ReportFilter::Subido);
    assert_eq!(ReportFilter::parse("otro"), ReportFilter::Todos);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn upload_and_delete_update_counts() {
    let mut state = loaded();
    assert_eq!((state.with_report_count(), state.without_report_count()), (1, 2));
    state.mark_uploaded(2, "luis_111.txt", "2026-10-19");
    assert_eq!(state.row(2).and_then(|r| r.report_name.as_deref()), Some("luis_111.txt"));
    assert_eq!(state.with_report_count(), 2);
    state.mark_deleted(1);
    assert!(state.row(1).is_some_and(|r| r.report_date.is_none()));
    assert_eq!(state.with_report_count(), 1);
}

#[test]
fn dialog_targets_row() {
    let mut state = loaded();
    state.open_dialog(ReportDialog::Delete, 12);
    assert_eq!(state.dialog_row().map(|r| r.code.as_str()), Some("P012"));
    state.close_dialog();
    assert!(state.dialog_row().is_none());
}

#[test]
fn service_status_change_is_normalised() {
    let mut state = loaded();
    state.set_service_status(1, ServiceStatus::Unknown);
    assert_eq!(state.row(1).map(|r| r.service_status), Some(ServiceStatus::NoPurchased));
    assert_eq!(upload_message(42), "Archivo procesado correctamente. 42 variantes genéticas agregadas.");
}
