use super::*;
use schema::User;

fn signed_in(user: User) -> AuthState {
    AuthState { user: Some(user), loading: false }
}

fn admin() -> User {
    User { id: 1, is_staff: true, ..User::default() }
}

fn patient() -> User {
    User { id: 2, ..User::default() }
}

#[test]
fn no_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert_eq!(guard_redirect(&state, Area::Patient), None);
}

#[test]
fn anonymous_goes_to_login() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(guard_redirect(&state, Area::BackOffice), Some("/login"));
}

#[test]
fn patient_is_kept_out_of_back_office() {
    assert_eq!(guard_redirect(&signed_in(patient()), Area::BackOffice), Some("/dashboard"));
    assert_eq!(guard_redirect(&signed_in(patient()), Area::Patient), None);
}

#[test]
fn admin_is_sent_from_patient_area_to_admin_home() {
    assert_eq!(guard_redirect(&signed_in(admin()), Area::Patient), Some("/admin"));
    assert_eq!(guard_redirect(&signed_in(admin()), Area::AdminOnly), None);
}

#[test]
fn analyst_cannot_manage_analysts() {
    let analyst = User { id: 3, is_analyst: true, ..User::default() };
    assert_eq!(guard_redirect(&signed_in(analyst.clone()), Area::BackOffice), None);
    assert_eq!(guard_redirect(&signed_in(analyst), Area::AdminOnly), Some("/admin"));
}
