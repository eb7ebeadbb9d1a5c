//! Client-side form validation.
//!
//! Every rule runs before any network call; failures are user-facing Spanish
//! messages rendered next to the offending field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use super::config::MAX_UPLOAD_BYTES;

pub const PASSWORD_MIN_LEN: usize = 10;
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";
pub const PHONE_MAX_DIGITS: usize = 11;
pub const UPLOAD_EXTENSIONS: [&str; 5] = [".vcf", ".txt", ".csv", ".zip", ".rar"];

pub const PASSWORD_INVALID: &str = "La contraseña no cumple con todos los requisitos";
pub const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";

static RUT_IN_FILENAME: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"_([0-9]+[Kk]?)\.txt$").ok());

/// Outcome of each password rule, for the live checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordRules {
    pub min_length: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl PasswordRules {
    pub fn check(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= PASSWORD_MIN_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
        }
    }

    pub fn all(self) -> bool {
        self.min_length && self.uppercase && self.digit && self.symbol
    }

    /// `(label, satisfied)` rows in display order.
    pub fn items(self) -> [(&'static str, bool); 4] {
        [
            ("Mínimo 10 caracteres", self.min_length),
            ("Al menos una mayúscula", self.uppercase),
            ("Al menos un número", self.digit),
            ("Al menos un símbolo", self.symbol),
        ]
    }
}

/// # Errors
///
/// Returns [`PASSWORD_INVALID`] unless every rule holds.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if PasswordRules::check(password).all() { Ok(()) } else { Err(PASSWORD_INVALID) }
}

pub fn passwords_match(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && password == confirm
}

/// Rules for choosing a new password with a confirmation field.
///
/// # Errors
///
/// Returns [`PASSWORD_INVALID`] or [`PASSWORD_MISMATCH`].
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    validate_password(password)?;
    if passwords_match(password, confirm) { Ok(()) } else { Err(PASSWORD_MISMATCH) }
}

/// # Errors
///
/// Returns the message for the first violated phone rule.
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let phone = phone.trim();
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("Solo se permiten números.");
    }
    if phone.len() > PHONE_MAX_DIGITS {
        return Err("Máximo 11 dígitos.");
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// # Errors
///
/// Returns `message` when `value` is blank.
pub fn required<'a>(value: &str, message: &'a str) -> Result<(), &'a str> {
    if value.trim().is_empty() { Err(message) } else { Ok(()) }
}

/// Lowercased extension including the dot, e.g. `.vcf`.
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| format!(".{}", ext.to_ascii_lowercase()))
}

/// Check a file picked in the upload modal.
///
/// # Errors
///
/// Returns the user-facing reason the file is rejected.
pub fn validate_upload(name: &str, size: u64) -> Result<(), String> {
    let allowed = file_extension(name).is_some_and(|ext| UPLOAD_EXTENSIONS.iter().any(|allowed| *allowed == ext));
    if !allowed {
        return Err(format!("Tipo de archivo no permitido. Formatos aceptados: {}", UPLOAD_EXTENSIONS.join(", ")));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err("El archivo es demasiado grande. Tamaño máximo: 100MB".to_owned());
    }
    Ok(())
}

/// RUT embedded in a genotype filename such as `fayala_205165851.txt`.
pub fn rut_from_filename(name: &str) -> Option<String> {
    let re = RUT_IN_FILENAME.as_ref()?;
    re.captures(name).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_ascii_uppercase())
}

/// RUT with every dot, dash and space removed, uppercased.
pub fn normalize_rut(rut: &str) -> String {
    rut.chars().filter(|c| !matches!(c, '.' | '-') && !c.is_whitespace()).collect::<String>().to_ascii_uppercase()
}

/// Validate a genotype file for a patient before it is read and uploaded.
/// Returns the RUT parsed from the filename.
///
/// # Errors
///
/// Returns the user-facing reason the file cannot be used.
pub fn validate_genetic_file(filename: &str, sample_code: Option<&str>, patient_rut: &str) -> Result<String, String> {
    if let Some(code) = sample_code.filter(|c| !c.is_empty()) {
        let stem = filename.rsplit_once('.').map_or(filename, |(stem, _)| stem);
        if stem != code {
            return Err(format!("El archivo debe llamarse exactamente {code}.txt para este Sample ID."));
        }
    }
    let Some(rut) = rut_from_filename(filename) else {
        return Err("El nombre del archivo debe tener formato: nombre_rut.txt (ej: fayala_205165851.txt)".to_owned());
    };
    let patient = patient_rut.trim();
    if !patient.is_empty() && patient != "N/A" && normalize_rut(patient) != rut {
        return Err(format!(
            "El RUT del archivo ({rut}) no coincide con el RUT del paciente ({patient}). Por favor, verifica el archivo."
        ));
    }
    Ok(rut)
}
