//! Backend endpoint catalogue.
//!
//! Paths are relative to [`crate::util::config::ClientConfig::api_base_url`]
//! and keep the trailing slash the backend router requires.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::util::config::config;

pub const LOGIN: &str = "login/";
pub const REGISTER: &str = "register/";
pub const ME: &str = "me/";
pub const LOGOUT: &str = "logout/";
pub const VERIFY_EMAIL: &str = "verify-email/";
pub const RESEND_VERIFICATION: &str = "resend-verification/";
pub const PASSWORD_RESET: &str = "password-reset/";
pub const PASSWORD_RESET_CONFIRM: &str = "password-reset-confirm/";

pub const DISEASES: &str = "diseases/";
pub const ANCESTRY: &str = "ancestry/";
pub const INDIGENOUS: &str = "indigenous/";
pub const TRAITS: &str = "traits/";
pub const BIOMETRICS: &str = "biometrics/";
pub const BIOMARKERS: &str = "biomarkers/";
pub const PHARMACOGENETICS: &str = "pharmacogenetics/";
pub const REPORT_PDF: &str = "report/pdf/";

pub const VARIANTS: &str = "variantes/";
pub const USERS: &str = "users/";
pub const ADMIN_ANALYSTS: &str = "admin/analysts/";
pub const ADMIN_STATS: &str = "admin/stats/";
pub const UPLOAD_GENETIC_FILE: &str = "upload-genetic-file/";
pub const DELETE_GENETIC_FILE: &str = "delete-genetic-file/";
pub const UPLOAD_FILE: &str = "upload-file/";
pub const UPDATE_SERVICE_STATUS: &str = "service/status/";

pub const RECEPTION_SEARCH: &str = "reception/search/";
pub const RECEPTION_ARRIVAL: &str = "reception/arrival/";
pub const RECEPTION_SAMPLE_CODE: &str = "reception/sample-code/";
pub const RECEPTION_SAMPLE_STATUS: &str = "reception/sample-status/";

pub const CONTACT: &str = "contact/";

/// Join `path` onto `base`, tolerating slashes on either side.
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Absolute URL for `path` on the configured backend.
pub fn url(path: &str) -> String {
    join(&config().api_base_url, path)
}

pub fn patient_variants_path(user_id: i64) -> String {
    format!("patient-variants/{user_id}/")
}

pub fn user_report_status_path(user_id: i64) -> String {
    format!("user-report-status/{user_id}/")
}

/// Reception lookup by sample code, percent-encoded.
pub fn reception_search_path(sample_code: &str) -> String {
    format!("{RECEPTION_SEARCH}?sample_code={}", urlencoding::encode(sample_code.trim()))
}
