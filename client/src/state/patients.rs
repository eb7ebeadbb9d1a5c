//! Admin reports table: one row per patient with report and service state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows are assembled from `/users/` plus one report-status call per user.
//! Staff and superusers are not patients and never appear. Upload, replace
//! and delete update the row in place once the backend confirms.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use schema::admin::UserReportStatus;
use schema::{ServiceStatus, User};

use super::request::Remote;

pub const NO_RUT: &str = "N/A";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFilter {
    #[default]
    Todos,
    SinReporte,
    Pendiente,
    Subido,
}

impl ReportFilter {
    pub const ALL: [Self; 4] = [Self::Todos, Self::SinReporte, Self::Pendiente, Self::Subido];

    pub fn key(self) -> &'static str {
        match self {
            Self::Todos => "todos",
            Self::SinReporte => "sin_reporte",
            Self::Pendiente => "pendiente",
            Self::Subido => "subido",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Todos => "Todos",
            Self::SinReporte => "Sin Reporte",
            Self::Pendiente => "Pendiente",
            Self::Subido => "Subido",
        }
    }

    pub fn parse(key: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.key() == key).unwrap_or_default()
    }

    pub fn matches(self, row: &PatientRow) -> bool {
        match self {
            Self::Todos => true,
            Self::SinReporte => !row.has_report,
            Self::Pendiente => !row.has_report && row.service_status.effective() == ServiceStatus::Pending,
            Self::Subido => row.has_report,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PatientRow {
    /// `P007`-style display id.
    pub code: String,
    pub user_id: i64,
    pub name: String,
    pub rut: String,
    pub email: String,
    pub sample_code: Option<String>,
    pub has_report: bool,
    pub report_date: Option<String>,
    pub report_name: Option<String>,
    pub service_status: ServiceStatus,
}

impl PatientRow {
    /// Build a row; a failed status lookup leaves the row without report and
    /// keeps the service status already known from the user list.
    pub fn new(user: &User, status: Option<UserReportStatus>) -> Self {
        let status = status.unwrap_or_default();
        let full = format!("{} {}", user.first_name.trim(), user.last_name.trim());
        let name = if !user.first_name.trim().is_empty() && !user.last_name.trim().is_empty() {
            full
        } else if !user.username.trim().is_empty() {
            user.username.trim().to_owned()
        } else {
            "Sin nombre".to_owned()
        };
        let or_na = |s: &str| if s.trim().is_empty() { NO_RUT.to_owned() } else { s.trim().to_owned() };
        Self {
            code: user.patient_code(),
            user_id: user.id,
            name,
            rut: or_na(&user.rut),
            email: or_na(&user.email),
            sample_code: user.sample_code.clone().filter(|c| !c.trim().is_empty()),
            has_report: status.has_report,
            report_date: status.report_date.filter(|_| status.has_report),
            report_name: status.report_filename.filter(|_| status.has_report),
            service_status: status
                .service_status
                .filter(|s| *s != ServiceStatus::Unknown)
                .unwrap_or(user.service_status)
                .effective(),
        }
    }

    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.rut.to_lowercase().contains(&needle)
            || self.code.to_lowercase().contains(&needle)
    }
}

/// Users that belong in the reports table.
pub fn patients_only(users: Vec<User>) -> Vec<User> {
    users.into_iter().filter(|u| !u.is_staff && !u.is_superuser).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportDialog {
    Upload,
    Replace,
    Delete,
}

#[derive(Clone, Debug, Default)]
pub struct PatientsState {
    pub remote: Remote<Vec<PatientRow>>,
    pub search: String,
    pub filter: ReportFilter,
    pub dialog: Option<(ReportDialog, i64)>,
    pub saving: bool,
    pub dialog_error: Option<String>,
}

impl PatientsState {
    pub fn rows(&self) -> &[PatientRow] {
        self.remote.data.as_deref().unwrap_or_default()
    }

    pub fn visible(&self) -> Vec<PatientRow> {
        self.rows().iter().filter(|r| r.matches_search(&self.search) && self.filter.matches(r)).cloned().collect()
    }

    pub fn with_report_count(&self) -> usize {
        self.rows().iter().filter(|r| r.has_report).count()
    }

    pub fn without_report_count(&self) -> usize {
        self.rows().len() - self.with_report_count()
    }

    pub fn row(&self, user_id: i64) -> Option<&PatientRow> {
        self.rows().iter().find(|r| r.user_id == user_id)
    }

    fn row_mut(&mut self, user_id: i64) -> Option<&mut PatientRow> {
        self.remote.data.as_mut()?.iter_mut().find(|r| r.user_id == user_id)
    }

    pub fn open_dialog(&mut self, dialog: ReportDialog, user_id: i64) {
        self.dialog = Some((dialog, user_id));
        self.dialog_error = None;
        self.saving = false;
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.dialog_error = None;
        self.saving = false;
    }

    /// Patient targeted by the open dialog.
    pub fn dialog_row(&self) -> Option<&PatientRow> {
        self.dialog.and_then(|(_, id)| self.row(id))
    }

    pub fn mark_uploaded(&mut self, user_id: i64, filename: &str, date: &str) {
        if let Some(row) = self.row_mut(user_id) {
            row.has_report = true;
            row.report_name = Some(filename.to_owned());
            row.report_date = Some(date.to_owned());
        }
    }

    pub fn mark_deleted(&mut self, user_id: i64) {
        if let Some(row) = self.row_mut(user_id) {
            row.has_report = false;
            row.report_name = None;
            row.report_date = None;
        }
    }

    pub fn set_service_status(&mut self, user_id: i64, status: ServiceStatus) {
        if let Some(row) = self.row_mut(user_id) {
            row.service_status = status.effective();
        }
    }
}

/// Success text after a genotype upload.
pub fn upload_message(snps: i64) -> String {
    format!("Archivo procesado correctamente. {snps} variantes genéticas agregadas.")
}
