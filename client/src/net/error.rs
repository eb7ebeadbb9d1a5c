//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API function resolves to `Result<T, ApiError>`. Pages render the
//! `Display` text directly, so variant messages are user-facing Spanish.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use schema::{ApiResponse, SchemaError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server.
    #[error("Error de conexión con el servidor")]
    Network,
    /// Non-2xx response, or a 2xx body reporting failure.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        fields: BTreeMap<String, String>,
    },
    /// The body did not match the expected schema.
    #[error("respuesta inesperada del servidor: {0}")]
    Decode(String),
    /// The user aborted the request.
    #[error("Descarga cancelada.")]
    Cancelled,
    /// The request exceeded its deadline.
    #[error("La solicitud tardó demasiado. Inténtalo nuevamente.")]
    Timeout,
    /// A browser API (file reader, blob URL) failed.
    #[error("{0}")]
    Browser(String),
}

impl ApiError {
    /// Map a failed envelope to an error, preferring the backend message.
    pub fn from_response(resp: &ApiResponse, fallback: &str) -> Self {
        if resp.is_connection_error() {
            return Self::Network;
        }
        Self::Http {
            status: resp.status,
            message: resp.error_message().unwrap_or_else(|| fallback.to_owned()),
            fields: resp.field_errors(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network => Some(0),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    pub fn fields(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Http { fields, .. } if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }
}

impl From<SchemaError> for ApiError {
    fn from(err: SchemaError) -> Self {
        Self::Decode(err.to_string())
    }
}
