use super::*;

fn user(f: impl FnOnce(&mut User)) -> User {
    let mut u = User { id: 7, email: "ana@sequoh.cl".to_owned(), ..User::default() };
    f(&mut u);
    u
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.landing_route(), "/login");
    assert!(!state.can_enter(Area::Patient));
}

#[test]
fn landing_route_per_role() {
    let patient = AuthState { user: Some(user(|_| {})), loading: false };
    assert_eq!(patient.landing_route(), "/dashboard");

    let admin = AuthState { user: Some(user(|u| u.is_staff = true)), loading: false };
    assert_eq!(admin.landing_route(), "/admin");
    assert!(admin.is_admin());

    let analyst = AuthState { user: Some(user(|u| u.is_analyst = true)), loading: false };
    assert_eq!(analyst.landing_route(), "/admin");

    let reception = AuthState { user: Some(user(|u| u.groups = vec!["recepcion".to_owned()])), loading: false };
    assert_eq!(reception.landing_route(), "/reception");
}

// =============================================================
// Areas
// =============================================================

#[test]
fn analysts_reach_back_office_but_not_permissions() {
    assert!(can_enter(Role::Analyst, Area::BackOffice));
    assert!(!can_enter(Role::Analyst, Area::AdminOnly));
    assert!(can_enter(Role::Admin, Area::AdminOnly));
}

#[test]
fn patients_stay_in_patient_area() {
    assert!(can_enter(Role::Patient, Area::Patient));
    assert!(!can_enter(Role::Patient, Area::BackOffice));
    assert!(!can_enter(Role::Patient, Area::Reception));
    assert!(can_enter(Role::Reception, Area::Reception));
}

// =============================================================
// ServiceGate
// =============================================================

#[test]
fn service_gate_follows_status() {
    assert_eq!(ServiceGate::for_status(ServiceStatus::Completed), ServiceGate::Ready);
    assert_eq!(ServiceGate::for_status(ServiceStatus::Pending), ServiceGate::Pending);
    assert_eq!(ServiceGate::for_status(ServiceStatus::NoPurchased), ServiceGate::NoPurchased);
    assert_eq!(ServiceGate::for_status(ServiceStatus::Unknown), ServiceGate::NoPurchased);
    let u = user(|u| u.service_status = ServiceStatus::Completed);
    assert_eq!(ServiceGate::for_user(&u), ServiceGate::Ready);
}
