//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin_analysts;
pub mod admin_home;
pub mod admin_reports;
pub mod admin_variants;
pub mod ancestry;
pub mod biomarkers;
pub mod biometrics;
pub mod dashboard;
pub mod diseases;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod pharmacogenetics;
pub mod reception;
pub mod register;
pub mod reset_password;
pub mod traits;
pub mod verify_email;
