//! Back-office payloads: user lists, analyst grants, reception desk, report
//! uploads and aggregate statistics.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de;
use crate::user::{SampleAction, SampleStatus, ServiceStatus, User};
use crate::variant::Variant;
use crate::SchemaError;

/// Decode `/users/`, which is either a bare array or `{results: [...]}`.
///
/// # Errors
///
/// Returns [`SchemaError::Decode`] if the list entries do not match [`User`].
pub fn users_from_payload(data: &Value) -> Result<Vec<User>, SchemaError> {
    let list = match data {
        Value::Array(_) => data,
        other => match other.get("results") {
            Some(results) if results.is_array() => results,
            _ => return Ok(Vec::new()),
        },
    };
    Ok(Vec::<User>::deserialize(list)?)
}

/// `POST admin/analysts/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalystGrant {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub grant: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalystGrantResult {
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_analyst: bool,
}

/// Patient record as seen from the reception desk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceptionProfile {
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub user_id: i64,
    #[serde(default, deserialize_with = "de::string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "de::string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "de::string")]
    pub email: String,
    #[serde(default, deserialize_with = "de::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "de::string")]
    pub rut: String,
    #[serde(default, deserialize_with = "de::string")]
    pub sample_code: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub sample_status: SampleStatus,
    #[serde(default, deserialize_with = "de::string")]
    pub sample_status_display: String,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub arrival_confirmed_at: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub sample_taken_at: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub sample_sent_at: Option<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub service_status: ServiceStatus,
    #[serde(default)]
    pub sample_code_sent: Option<bool>,
}

impl ReceptionProfile {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim()).trim().to_owned()
    }

    /// Backend display label, or the local label when it is blank.
    #[must_use]
    pub fn status_label(&self) -> &str {
        if self.sample_status_display.is_empty() {
            self.sample_status.label()
        } else {
            &self.sample_status_display
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceptionSearchResults {
    #[serde(default, deserialize_with = "de::null_default")]
    pub results: Vec<ReceptionProfile>,
}

/// `POST reception/sample-code/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCodeRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub resend: bool,
}

/// `POST reception/sample-status/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleStatusRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub action: SampleAction,
}

/// Body for endpoints that only need the target user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTarget {
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// `POST service/status/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatusUpdate {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub status: ServiceStatus,
}

/// `GET user-report-status/{id}/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReportStatus {
    #[serde(default, deserialize_with = "de::null_default")]
    pub has_report: bool,
    /// Absent when the backend does not know it; callers fall back to the
    /// user's own status.
    #[serde(default)]
    pub service_status: Option<ServiceStatus>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub report_filename: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub report_date: Option<String>,
}

/// `POST upload-genetic-file/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticFileUpload {
    pub user_id: i64,
    pub file_content: String,
    pub rut_from_file: String,
    pub filename: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticFileUploaded {
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub snps_count: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticFileDeleted {
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub deleted_count: i64,
}

/// `GET patient-variants/{id}/` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientVariants {
    #[serde(default, deserialize_with = "de::null_default")]
    pub variants: Vec<Variant>,
}

/// `GET admin/stats/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub total_users: i64,
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub processed_reports: i64,
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub variants_count: i64,
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub analysis_count: i64,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub user_growth: f64,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub report_growth: f64,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub analysis_growth: f64,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub last_update: Option<String>,
}

/// Signed growth label such as `+12.5%` or `-3%`.
#[must_use]
pub fn growth_label(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded > 0.0 {
        format!("+{rounded}%")
    } else if rounded < 0.0 {
        format!("{rounded}%")
    } else {
        "0%".to_owned()
    }
}
