//! Multi-step registration wizard state.
//!
//! The wizard walks `Account -> Security -> Terms`. Each step validates its
//! own fields into `field_errors`; the wizard never advances while that map
//! is non-empty.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::collections::BTreeMap;

use schema::auth::RegisterRequest;

use crate::util::validation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegisterStep {
    #[default]
    Account,
    Security,
    Terms,
}

impl RegisterStep {
    pub const ALL: [Self; 3] = [Self::Account, Self::Security, Self::Terms];

    pub fn index(self) -> usize {
        match self {
            Self::Account => 0,
            Self::Security => 1,
            Self::Terms => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Account => "Tus datos",
            Self::Security => "Seguridad",
            Self::Terms => "Términos",
        }
    }

    /// Class of this step's indicator while `current` is showing.
    pub fn indicator_class(self, current: Self) -> &'static str {
        match self.index().cmp(&current.index()) {
            std::cmp::Ordering::Less => "wizard-steps__item wizard-steps__item--done",
            std::cmp::Ordering::Equal => "wizard-steps__item wizard-steps__item--active",
            std::cmp::Ordering::Greater => "wizard-steps__item",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Account => Some(Self::Security),
            Self::Security => Some(Self::Terms),
            Self::Terms => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            Self::Account => None,
            Self::Security => Some(Self::Account),
            Self::Terms => Some(Self::Security),
        }
    }
}

/// Form field keys, matching the backend's validation-error keys.
pub mod field {
    pub const NOMBRE: &str = "nombre";
    pub const CORREO: &str = "correo";
    pub const TELEFONO: &str = "telefono";
    pub const PASSWORD: &str = "contraseña";
    pub const CONFIRM: &str = "repetirContraseña";
    pub const TERMINOS: &str = "terminos";
}

#[derive(Clone, Debug, Default)]
pub struct RegisterState {
    pub step: RegisterStep,
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
    pub password: String,
    pub password_confirm: String,
    pub terminos: bool,
    pub field_errors: BTreeMap<String, String>,
    pub global_error: String,
    pub loading: bool,
    /// Message for the "check your inbox" modal after a successful signup.
    pub verification_message: Option<String>,
    pub success: bool,
}

impl RegisterState {
    /// Update a text field and clear its error.
    pub fn set_text(&mut self, key: &str, value: String) {
        match key {
            field::NOMBRE => self.nombre = value,
            field::CORREO => self.correo = value,
            field::TELEFONO => self.telefono = value,
            field::PASSWORD => self.password = value,
            field::CONFIRM => self.password_confirm = value,
            _ => return,
        }
        self.field_errors.remove(key);
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.terminos = accepted;
        self.field_errors.remove(field::TERMINOS);
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.field_errors.get(key).map(String::as_str)
    }

    /// Validate the current step; returns true when it has no errors.
    pub fn validate_step(&mut self) -> bool {
        self.field_errors = errors_for(self, self.step);
        self.field_errors.is_empty()
    }

    /// Advance one step if the current one validates.
    pub fn next(&mut self) -> bool {
        if !self.validate_step() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        if let Some(step) = self.step.prev() {
            self.step = step;
            self.field_errors.clear();
        }
    }

    /// Validate every step and build the request body. On failure the wizard
    /// jumps to the first step with errors.
    pub fn submit(&mut self) -> Option<RegisterRequest> {
        for step in RegisterStep::ALL {
            let errors = errors_for(self, step);
            if !errors.is_empty() {
                self.step = step;
                self.field_errors = errors;
                return None;
            }
        }
        self.field_errors.clear();
        self.global_error.clear();
        Some(RegisterRequest {
            nombre: self.nombre.trim().to_owned(),
            correo: self.correo.trim().to_owned(),
            telefono: self.telefono.trim().to_owned(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
            terminos: self.terminos,
        })
    }

    /// Merge backend validation errors and jump to the first affected step.
    pub fn apply_backend_errors(&mut self, message: String, fields: &BTreeMap<String, String>) {
        self.global_error = message;
        self.field_errors.clone_from(fields);
        if let Some(step) = RegisterStep::ALL.into_iter().find(|s| fields.keys().any(|k| step_of(k) == Some(*s))) {
            self.step = step;
        }
    }
}

/// Text for the verification modal: percent-decoded, surrounding quotes
/// removed, with a default when blank.
pub fn clean_message(message: &str) -> String {
    let decoded = urlencoding::decode(message).map_or_else(|_| message.to_owned(), |m| m.into_owned());
    let trimmed = decoded.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| trimmed.strip_prefix(*q).and_then(|m| m.strip_suffix(*q)))
        .unwrap_or(trimmed);
    if unquoted.trim().is_empty() { "Tu cuenta fue verificada correctamente.".to_owned() } else { unquoted.to_owned() }
}

fn step_of(key: &str) -> Option<RegisterStep> {
    match key {
        field::NOMBRE | field::CORREO | field::TELEFONO => Some(RegisterStep::Account),
        field::PASSWORD | field::CONFIRM => Some(RegisterStep::Security),
        field::TERMINOS => Some(RegisterStep::Terms),
        _ => None,
    }
}

fn errors_for(state: &RegisterState, step: RegisterStep) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    let mut put = |key: &str, msg: &str| {
        errors.insert(key.to_owned(), msg.to_owned());
    };
    match step {
        RegisterStep::Account => {
            if let Err(msg) = validation::required(&state.nombre, "Ingresa tu nombre") {
                put(field::NOMBRE, msg);
            }
            if !validation::is_valid_email(&state.correo) {
                put(field::CORREO, "Ingresa un correo válido");
            }
            if let Err(msg) = validation::required(&state.telefono, "Ingresa tu teléfono")
                .and_then(|()| validation::validate_phone(&state.telefono))
            {
                put(field::TELEFONO, msg);
            }
        }
        RegisterStep::Security => {
            if let Err(msg) = validation::validate_password(&state.password) {
                put(field::PASSWORD, msg);
            }
            if !validation::passwords_match(&state.password, &state.password_confirm) {
                put(field::CONFIRM, validation::PASSWORD_MISMATCH);
            }
        }
        RegisterStep::Terms => {
            if !state.terminos {
                put(field::TERMINOS, "Debes aceptar los términos y condiciones");
            }
        }
    }
    errors
}
