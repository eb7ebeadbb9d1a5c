//! Login form state and backend error mapping.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use schema::ApiResponse;

pub const LOGIN_FAILED: &str = "No se pudo iniciar sesión";
pub const BACKEND_UNREACHABLE: &str = "Error de conexión con el servidor. Verifica que el backend esté ejecutándose.";

/// Marker placed on a field that should render red without its own text.
pub const FIELD_MARKER: &str = "error";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: String,
    pub password: String,
    pub global: String,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty() && self.global.is_empty()
    }

    /// Field text worth showing under the input (markers render as styling only).
    pub fn visible(field: &str) -> Option<&str> {
        (!field.is_empty() && field != FIELD_MARKER).then_some(field)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { token: String },
    Failed(LoginErrors),
}

#[derive(Clone, Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub errors: LoginErrors,
    pub loading: bool,
    /// Set after a successful login while the success modal is visible.
    pub success: bool,
}

impl LoginState {
    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => {
                self.email = value;
                self.errors.email.clear();
            }
            LoginField::Password => {
                self.password = value;
                self.errors.password.clear();
            }
        }
    }

    /// Client-side check before any request; fills `errors` on failure.
    pub fn validate(&mut self) -> bool {
        self.errors = LoginErrors::default();
        if self.email.trim().is_empty() {
            self.errors.email = "Ingresa tu correo electrónico".to_owned();
        }
        if self.password.is_empty() {
            self.errors.password = "Ingresa tu contraseña".to_owned();
        }
        self.errors.is_empty()
    }
}

/// Map the login envelope to a token or per-field errors.
pub fn interpret_login(resp: &ApiResponse) -> LoginOutcome {
    if resp.is_connection_error() {
        return LoginOutcome::Failed(LoginErrors { global: BACKEND_UNREACHABLE.to_owned(), ..LoginErrors::default() });
    }
    if resp.ok && resp.flag("success") {
        if let Some(token) = resp.str_field("token").filter(|t| !t.trim().is_empty()) {
            return LoginOutcome::Success { token: token.to_owned() };
        }
    }

    let fields = resp.field_errors();
    let mut errors = LoginErrors::default();
    if let Some(msg) = fields.get("username") {
        errors.email.clone_from(msg);
    }
    if let Some(msg) = fields.get("email") {
        errors.email.clone_from(msg);
    }
    if let Some(msg) = fields.get("password") {
        errors.password.clone_from(msg);
    }

    let specific = !errors.email.is_empty() || !errors.password.is_empty();
    if matches!(resp.status, 400 | 401) && !specific {
        errors.email = FIELD_MARKER.to_owned();
        errors.password = FIELD_MARKER.to_owned();
    }
    if errors.email.is_empty() && errors.password.is_empty() {
        let joined = resp.messages().join(" ");
        let joined = joined.trim();
        errors.global = if joined.is_empty() { LOGIN_FAILED.to_owned() } else { joined.to_owned() };
    }
    LoginOutcome::Failed(errors)
}
