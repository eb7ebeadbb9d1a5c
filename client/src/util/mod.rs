//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod charts;
pub mod config;
pub mod date;
pub mod nav;
pub mod storage;
pub mod table;
pub mod token;
pub mod validation;
