//! Wire schema shared by the genetic-report web client.
//!
//! This crate owns the JSON representation of every backend payload the
//! client consumes: the `{ok, status, data}` envelope, user and role data,
//! variant rows, report aggregates and back-office DTOs. It has no browser
//! dependencies so everything here is testable on the host.
//!
//! DESIGN
//! ======
//! The backend is loosely typed (numbers arrive as strings, nulls appear
//! where arrays are expected), so most DTO fields go through the lenient
//! helpers in [`de`] instead of failing the whole payload.

pub mod admin;
pub mod auth;
pub mod de;
pub mod envelope;
pub mod options;
pub mod report;
pub mod user;
pub mod variant;

pub use envelope::{ApiResponse, CONNECTION_ERROR};
pub use user::{Role, SampleStatus, ServiceStatus, User};
pub use variant::{NewVariant, RiskLevel, Variant};

/// Error returned when a backend payload does not match the expected schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The JSON value could not be deserialized into the target type.
    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// A field the caller relies on is absent from the payload.
    #[error("missing field in payload: {0}")]
    MissingField(&'static str),
}
