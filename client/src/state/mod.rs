//! Reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct here is plain data with pure transition methods. Pages wrap
//! them in `RwSignal`s (shared ones via `provide_context`) so the rules can
//! be unit tested without a browser.

pub mod analysts;
pub mod auth;
pub mod login;
pub mod patient_variants;
pub mod patients;
pub mod reception;
pub mod register;
pub mod request;
pub mod ui;
pub mod variant_form;
pub mod variants;
