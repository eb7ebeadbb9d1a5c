//! Authenticated user profile, roles and backend-owned status enums.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SchemaError;
use crate::de;

/// Purchase/processing state that gates which dashboard views a user sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    #[default]
    NoPurchased,
    Pending,
    Completed,
    #[serde(other)]
    Unknown,
}

impl ServiceStatus {
    pub const ALL: [Self; 3] = [Self::NoPurchased, Self::Pending, Self::Completed];

    /// Unrecognized wire values behave like "no service".
    #[must_use]
    pub fn effective(self) -> Self {
        match self {
            Self::Unknown => Self::NoPurchased,
            other => other,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self.effective() {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            _ => "NO_PURCHASED",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self.effective() {
            Self::Pending => "Pendiente",
            Self::Completed => "Completado",
            _ => "Sin servicio",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "NO_PURCHASED" => Self::NoPurchased,
            "PENDING" => Self::Pending,
            "COMPLETED" => Self::Completed,
            _ => Self::Unknown,
        }
    }
}

/// Physical sample lifecycle tracked by the reception desk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SampleStatus {
    #[default]
    PendingCollection,
    CollectedPendingAnalysis,
    SentToLab,
    ReceivedAtLab,
    #[serde(other)]
    Unknown,
}

impl SampleStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PendingCollection => "Pendiente de toma",
            Self::CollectedPendingAnalysis => "Muestra tomada, pendiente de análisis",
            Self::SentToLab => "Enviada a laboratorio",
            Self::ReceivedAtLab => "Recibida en laboratorio",
            Self::Unknown => "Desconocido",
        }
    }

    /// Action understood by `reception/sample-status/` that moves a sample
    /// forward from this state, if any.
    #[must_use]
    pub fn next_action(self) -> Option<SampleAction> {
        match self {
            Self::PendingCollection | Self::Unknown => Some(SampleAction::MarkTaken),
            Self::CollectedPendingAnalysis => Some(SampleAction::SentLab),
            Self::SentToLab | Self::ReceivedAtLab => None,
        }
    }
}

/// Transition requested from the reception desk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleAction {
    MarkTaken,
    SentLab,
}

impl SampleAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MarkTaken => "Marcar muestra tomada",
            Self::SentLab => "Marcar enviada a laboratorio",
        }
    }
}

/// Highest-privilege role a user holds, as far as routing is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Analyst,
    Reception,
    Patient,
}

/// Profile returned by `/me/` and `/users/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string")]
    pub username: String,
    #[serde(default, deserialize_with = "de::string")]
    pub email: String,
    #[serde(default, deserialize_with = "de::string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "de::string")]
    pub last_name: String,
    #[serde(default, rename = "firstName", deserialize_with = "de::string", skip_serializing)]
    pub first_name_camel: String,
    #[serde(default, deserialize_with = "de::string", skip_serializing)]
    pub name: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_staff: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_superuser: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_analyst: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub roles: Vec<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub groups: Vec<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub service_status: ServiceStatus,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub sample_code: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "de::string")]
    pub rut: String,
}

impl User {
    /// Decode a `/me/` body, which is either `{user: {...}}` or the user itself.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Decode`] if neither shape matches.
    pub fn from_me_payload(data: &Value) -> Result<Self, SchemaError> {
        let inner = data.get("user").filter(|u| u.is_object()).unwrap_or(data);
        Ok(Self::deserialize(inner)?)
    }

    /// First non-empty of first name, camel-case first name, name, username,
    /// email; `"Usuario"` otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [&self.first_name, &self.first_name_camel, &self.name, &self.username, &self.email]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or("Usuario")
    }

    /// `first last`, or [`Self::display_name`] if both are blank.
    #[must_use]
    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.display_name().to_owned() } else { full.to_owned() }
    }

    /// Case-insensitive membership in `roles` or `groups`.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().chain(self.groups.iter()).any(|r| r.eq_ignore_ascii_case(role))
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser || self.has_role("ADMIN")
    }

    #[must_use]
    pub fn is_analyst_user(&self) -> bool {
        self.is_analyst || self.has_role("ANALISTA")
    }

    #[must_use]
    pub fn role(&self) -> Role {
        if self.is_admin() {
            Role::Admin
        } else if self.is_analyst_user() {
            Role::Analyst
        } else if self.has_role("RECEPCION") {
            Role::Reception
        } else {
            Role::Patient
        }
    }

    /// Back-office patient identifier, e.g. `P007`.
    #[must_use]
    pub fn patient_code(&self) -> String {
        format!("P{:03}", self.id)
    }

    /// Set or clear the `ANALISTA` role after a grant/revoke round-trip.
    pub fn apply_analyst(&mut self, granted: bool) {
        self.is_analyst = granted;
        self.roles.retain(|r| !r.eq_ignore_ascii_case("ANALISTA"));
        if granted {
            self.roles.push("ANALISTA".to_owned());
        }
    }
}

/// Parse a `P007`-style patient code back into a user id.
#[must_use]
pub fn parse_patient_code(code: &str) -> Option<i64> {
    code.trim().strip_prefix('P')?.parse().ok()
}
