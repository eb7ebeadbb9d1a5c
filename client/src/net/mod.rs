//! Networking modules for the Sequoh REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` wraps every request in the `{ok, status, data}` envelope,
//! `endpoints` names the paths, `api` exposes one typed function per
//! operation and `download` streams the report PDF.

pub mod api;
pub mod download;
pub mod endpoints;
pub mod error;
pub mod http;
