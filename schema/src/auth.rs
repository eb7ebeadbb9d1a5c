//! Request bodies for the authentication endpoints.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// `POST login/`. The backend authenticates by email under the `username` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
    #[serde(rename = "contraseña")]
    pub password: String,
    #[serde(rename = "repetirContraseña")]
    pub password_confirm: String,
    pub terminos: bool,
}

/// Successful registration outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub requires_verification: bool,
    pub message: String,
}

/// `POST password-reset/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// `POST password-reset-confirm/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetConfirm {
    pub token: String,
    pub new_password: String,
}

/// `POST verify-email/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

/// `POST contact/` from the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub nombre: String,
    pub correo: String,
    pub mensaje: String,
}
