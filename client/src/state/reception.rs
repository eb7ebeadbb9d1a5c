//! Reception desk workflow state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Staff search a patient by sample code, tick the identity, consent and
//! labelling checklist, then mark the sample pending. A profile already in
//! `PENDING` service status shows a read-only notice instead of the
//! checklist.

#[cfg(test)]
#[path = "reception_test.rs"]
mod reception_test;

use schema::ServiceStatus;
use schema::admin::ReceptionProfile;

use super::request::RequestSeq;

pub const SEARCH_EMPTY: &str = "Ingresa un SampleID para buscar.";
pub const NOT_FOUND: &str = "No se encontraron usuarios con ese SampleID.";
pub const CHECKLIST_INCOMPLETE: &str = "Marca todas las verificaciones antes de continuar.";
pub const NO_SELECTION: &str = "Selecciona un Sample ID primero.";
pub const MARKED_PENDING: &str = "Estado actualizado a pendiente.";

/// `(key, label)` checklist items in display order.
pub const CHECKLIST_ITEMS: [(&str, &str); 6] = [
    ("rut", "RUT Coincide"),
    ("nombre", "Nombre y Apellido Coinciden"),
    ("consentimiento", "Consentimiento Informado Firmado"),
    ("entiende", "Paciente entiende el procedimiento"),
    ("muestra", "Muestra biológica recepcionada"),
    ("etiqueta", "Etiqueta con SampleID impresa y adherida"),
];

/// `(group title, item range)` for rendering the checklist in sections.
pub const CHECKLIST_GROUPS: [(&str, std::ops::Range<usize>); 3] = [
    ("Verificación de Identidad (Cédula vs. Sistema)", 0..2),
    ("Verificación de Consentimiento", 2..4),
    ("Etiquetado de Muestra", 4..6),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checklist([bool; 6]);

impl Checklist {
    fn index(key: &str) -> Option<usize> {
        CHECKLIST_ITEMS.iter().position(|(k, _)| *k == key)
    }

    pub fn is_checked(self, key: &str) -> bool {
        Self::index(key).is_some_and(|i| self.0[i])
    }

    pub fn toggle(&mut self, key: &str) {
        if let Some(i) = Self::index(key) {
            self.0[i] = !self.0[i];
        }
    }

    pub fn is_complete(self) -> bool {
        self.0.iter().all(|checked| *checked)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReceptionState {
    pub search: String,
    pub searching: bool,
    pub saving: bool,
    pub selected: Option<ReceptionProfile>,
    pub checklist: Checklist,
    pub error: Option<String>,
    pub info: Option<String>,
    seq: RequestSeq,
}

impl ReceptionState {
    /// Clear banners and the checklist.
    pub fn reset_messages(&mut self) {
        self.error = None;
        self.info = None;
        self.checklist = Checklist::default();
    }

    /// Start a search; returns the ticket and trimmed code, or `None` when
    /// the input is blank.
    pub fn begin_search(&mut self) -> Option<(u64, String)> {
        self.reset_messages();
        let code = self.search.trim().to_owned();
        if code.is_empty() {
            self.error = Some(SEARCH_EMPTY.to_owned());
            return None;
        }
        self.searching = true;
        Some((self.seq.begin(), code))
    }

    /// Exactly one match selects it; anything else clears the selection.
    pub fn finish_search<E: std::fmt::Display>(&mut self, ticket: u64, result: Result<Vec<ReceptionProfile>, E>) {
        if !self.seq.is_current(ticket) {
            return;
        }
        self.searching = false;
        match result {
            Ok(mut found) if found.len() == 1 => self.selected = found.pop(),
            Ok(_) => {
                self.selected = None;
                self.info = Some(NOT_FOUND.to_owned());
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn toggle_check(&mut self, key: &str) {
        self.checklist.toggle(key);
    }

    pub fn is_pending(&self) -> bool {
        self.selected.as_ref().is_some_and(|p| p.service_status.effective() == ServiceStatus::Pending)
    }

    /// Validate the checklist before marking pending; returns the target user.
    pub fn begin_complete(&mut self) -> Option<i64> {
        let Some(user_id) = self.selected.as_ref().map(|p| p.user_id).filter(|id| *id > 0) else {
            self.error = Some(NO_SELECTION.to_owned());
            return None;
        };
        if !self.checklist.is_complete() {
            self.error = Some(CHECKLIST_INCOMPLETE.to_owned());
            return None;
        }
        self.reset_messages();
        self.saving = true;
        Some(user_id)
    }

    /// Selected user id for follow-up actions that need no checklist.
    pub fn begin_action(&mut self) -> Option<i64> {
        let Some(user_id) = self.selected.as_ref().map(|p| p.user_id) else {
            self.error = Some(NO_SELECTION.to_owned());
            return None;
        };
        self.error = None;
        self.info = None;
        self.saving = true;
        Some(user_id)
    }

    /// Apply the profile returned by a reception action.
    pub fn apply_profile(&mut self, profile: ReceptionProfile, message: &str) {
        self.saving = false;
        self.selected = Some(profile);
        self.info = Some(message.to_owned());
    }

    pub fn fail(&mut self, message: String) {
        self.saving = false;
        self.error = Some(message);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.reset_messages();
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Printable sample label body, or `None` without a sample code.
pub fn label_html(profile: &ReceptionProfile) -> Option<String> {
    let code = profile.sample_code.trim();
    if code.is_empty() {
        return None;
    }
    let name = profile.full_name();
    let name = if name.is_empty() { "Usuario".to_owned() } else { name };
    Some(format!(
        "<div class=\"label-card\"><div>SampleCode</div><div class=\"label-code\">{}</div>\
         <div class=\"label-meta\">{}</div><div class=\"label-meta\">{}</div></div>",
        escape_html(code),
        escape_html(&name),
        escape_html(profile.rut.trim()),
    ))
}
