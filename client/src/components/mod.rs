//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose these widgets; shared state arrives through context or
//! explicit signal props so each component stays independent of routing.

pub mod add_variant_modal;
pub mod admin_sidebar;
pub mod bars;
pub mod download_report;
pub mod forgot_password_modal;
pub mod layout;
pub mod pagination;
pub mod password_checklist;
pub mod patient_variants_modal;
pub mod remote_view;
pub mod reset_password_form;
pub mod sidebar;
pub mod toast;
pub mod upload_file_modal;
