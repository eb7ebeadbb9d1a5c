//! REST API operations for every backend endpoint the client consumes.
//!
//! Each function shapes one request, sends it through [`super::http`], and
//! maps the envelope to a typed result. Outside the browser the transport is
//! stubbed, so these resolve to [`ApiError::Network`].
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, ApiError>` instead of panics; pages render the
//! error's `Display` text and stay on the current view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schema::admin::{
    AdminStats, AnalystGrant, AnalystGrantResult, GeneticFileDeleted, GeneticFileUpload, GeneticFileUploaded,
    PatientVariants, ReceptionProfile, ReceptionSearchResults, SampleCodeRequest, SampleStatusRequest,
    ServiceStatusUpdate, UserReportStatus, UserTarget,
};
use schema::auth::{
    ContactMessage, LoginRequest, PasswordResetConfirm, PasswordResetRequest, RegisterRequest, Registration,
    VerifyEmailRequest,
};
use schema::report::{AncestryData, BiomarkersData, BiometricsData, DiseaseGroups, DrugSystem, IndigenousData, TraitsData};
use schema::user::SampleAction;
use schema::{ApiResponse, NewVariant, ServiceStatus, User, Variant};

use super::endpoints as ep;
use super::error::ApiError;
use super::http::{self, ensure_ok, ensure_success};

// =============================================================================
// SESSION
// =============================================================================

/// Submit credentials. The raw envelope is returned because the login form
/// maps field-level errors itself.
pub async fn login(email: &str, password: &str) -> ApiResponse {
    let body = LoginRequest { username: email.trim().to_owned(), password: password.to_owned() };
    http::post(ep::LOGIN, &body).await
}

/// Fetch the profile behind the stored token.
///
/// # Errors
///
/// Returns [`ApiError::Http`] with status 401 when no token is stored, or
/// the backend error otherwise.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    if crate::util::token::get_token().is_none() {
        return Err(ApiError::Http {
            status: 401,
            message: "Sesión no iniciada".to_owned(),
            fields: std::collections::BTreeMap::new(),
        });
    }
    let resp = ensure_ok(http::get(ep::ME).await, "No se pudo obtener el usuario")?;
    Ok(User::from_me_payload(&resp.data)?)
}

/// Invalidate the session server-side and drop the local token.
pub async fn logout() {
    let resp = http::post_empty(ep::LOGOUT).await;
    if !resp.ok {
        log::debug!("logout returned status {}", resp.status);
    }
    crate::util::token::clear_token();
}

/// Create an account.
///
/// # Errors
///
/// Returns the backend error, falling back to `Error en el registro`.
pub async fn register(body: &RegisterRequest) -> Result<Registration, ApiError> {
    registration_from_response(http::post(ep::REGISTER, body).await)
}

fn registration_from_response(resp: ApiResponse) -> Result<Registration, ApiError> {
    let resp = ensure_success(resp, "Error en el registro")?;
    Ok(Registration {
        requires_verification: resp.flag("requires_verification"),
        message: resp.str_field("mensaje").unwrap_or("Usuario registrado exitosamente.").to_owned(),
    })
}

/// Confirm an email address from the link token.
///
/// # Errors
///
/// Returns the backend error, falling back to `Error verificando el email`.
pub async fn verify_email(token: &str) -> Result<String, ApiError> {
    let body = VerifyEmailRequest { token: token.trim().to_owned() };
    message_from_response(http::post(ep::VERIFY_EMAIL, &body).await, "Email verificado exitosamente", "Error verificando el email")
}

/// Send a fresh verification link.
///
/// # Errors
///
/// Returns the backend error if the address is unknown or already verified.
pub async fn resend_verification(email: &str) -> Result<(), ApiError> {
    let body = PasswordResetRequest { email: email.trim().to_owned() };
    ensure_ok(http::post(ep::RESEND_VERIFICATION, &body).await, "No se pudo reenviar el correo").map(|_| ())
}

/// Email a password-reset link.
///
/// # Errors
///
/// Returns the backend error, falling back to a generic send failure.
pub async fn request_password_reset(email: &str) -> Result<String, ApiError> {
    let body = PasswordResetRequest { email: email.trim().to_owned() };
    message_from_response(
        http::post(ep::PASSWORD_RESET, &body).await,
        "Te enviamos un correo con instrucciones para restablecer tu contraseña.",
        "Error al enviar el correo de recuperación",
    )
}

/// Set a new password using the emailed token.
///
/// # Errors
///
/// Returns the backend error, e.g. for an expired token.
pub async fn confirm_password_reset(token: &str, new_password: &str) -> Result<(), ApiError> {
    let body = PasswordResetConfirm { token: token.trim().to_owned(), new_password: new_password.to_owned() };
    ensure_ok(http::post(ep::PASSWORD_RESET_CONFIRM, &body).await, "Error al restablecer la contraseña").map(|_| ())
}

/// Submit the landing-page contact form.
///
/// # Errors
///
/// Returns the backend error if the message is rejected.
pub async fn send_contact(message: &ContactMessage) -> Result<(), ApiError> {
    ensure_ok(http::post(ep::CONTACT, message).await, "No se pudo enviar el mensaje").map(|_| ())
}

fn message_from_response(resp: ApiResponse, success: &str, fallback: &str) -> Result<String, ApiError> {
    let resp = ensure_ok(resp, fallback)?;
    Ok(resp
        .str_field("message")
        .or_else(|| resp.str_field("mensaje"))
        .unwrap_or(success)
        .to_owned())
}

// =============================================================================
// PATIENT REPORT SECTIONS
// =============================================================================

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_diseases() -> Result<DiseaseGroups, ApiError> {
    let resp = ensure_ok(http::get(ep::DISEASES).await, "No se pudieron cargar las enfermedades")?;
    Ok(DiseaseGroups::from_payload(&resp.data)?)
}

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_ancestry() -> Result<AncestryData, ApiError> {
    let resp = ensure_ok(http::get(ep::ANCESTRY).await, "No se pudo cargar la ancestría")?;
    Ok(resp.decode_payload()?)
}

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_indigenous() -> Result<IndigenousData, ApiError> {
    let resp = ensure_ok(http::get(ep::INDIGENOUS).await, "No se pudieron cargar los pueblos originarios")?;
    Ok(resp.decode_payload()?)
}

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_traits() -> Result<TraitsData, ApiError> {
    let resp = ensure_ok(http::get(ep::TRAITS).await, "No se pudieron cargar los rasgos")?;
    Ok(resp.decode_payload()?)
}

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_biometrics() -> Result<BiometricsData, ApiError> {
    let resp = ensure_ok(http::get(ep::BIOMETRICS).await, "No se pudieron cargar las biométricas")?;
    Ok(resp.decode_payload()?)
}

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_biomarkers() -> Result<BiomarkersData, ApiError> {
    let resp = ensure_ok(http::get(ep::BIOMARKERS).await, "No se pudieron cargar los biomarcadores")?;
    Ok(resp.decode_payload()?)
}

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_pharmacogenetics() -> Result<Vec<DrugSystem>, ApiError> {
    let resp = ensure_ok(http::get(ep::PHARMACOGENETICS).await, "No se pudo cargar la farmacogenética")?;
    Ok(resp.decode_payload()?)
}

// =============================================================================
// VARIANT DATABASE
// =============================================================================

/// # Errors
///
/// Returns the backend error or [`ApiError::Decode`] when `data` is not a list.
pub async fn list_variants() -> Result<Vec<Variant>, ApiError> {
    let resp = http::get(ep::VARIANTS).await;
    let fallback = format!("No se pudieron cargar las variantes. Status: {}", resp.status);
    let resp = ensure_ok(resp, &fallback)?;
    Ok(resp.decode_field("data")?)
}

/// # Errors
///
/// Returns the backend error, falling back to `Error desconocido del servidor`.
pub async fn create_variant(variant: &NewVariant) -> Result<(), ApiError> {
    ensure_success(http::post(ep::VARIANTS, variant).await, "Error desconocido del servidor").map(|_| ())
}

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_patient_variants(user_id: i64) -> Result<Vec<Variant>, ApiError> {
    let resp = ensure_success(http::get(&ep::patient_variants_path(user_id)).await, "Error desconocido")?;
    let payload: PatientVariants = resp.decode_payload()?;
    Ok(payload.variants)
}

// =============================================================================
// BACK OFFICE
// =============================================================================

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    let resp = ensure_ok(http::get(ep::USERS).await, "No se pudieron cargar los usuarios")?;
    Ok(schema::admin::users_from_payload(&resp.data)?)
}

/// Grant or revoke the analyst role; returns the role state the backend
/// settled on.
///
/// # Errors
///
/// Returns the backend error, falling back to `No se pudo actualizar el permiso`.
pub async fn set_analyst(user_id: i64, grant: bool) -> Result<bool, ApiError> {
    let resp = ensure_ok(
        http::post(ep::ADMIN_ANALYSTS, &AnalystGrant { user_id, grant }).await,
        "No se pudo actualizar el permiso",
    )?;
    let result: AnalystGrantResult = resp.decode()?;
    Ok(result.is_analyst)
}

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_user_report_status(user_id: i64) -> Result<UserReportStatus, ApiError> {
    let resp = ensure_ok(http::get(&ep::user_report_status_path(user_id)).await, "Estado de reporte no disponible")?;
    Ok(resp.decode()?)
}

/// Upload a raw genotype file for a patient; returns the parsed SNP count.
///
/// # Errors
///
/// Returns the backend error, falling back to `Error al subir el archivo`.
pub async fn upload_genetic_file(upload: &GeneticFileUpload) -> Result<i64, ApiError> {
    let resp = ensure_ok(http::post(ep::UPLOAD_GENETIC_FILE, upload).await, "Error al subir el archivo")?;
    let uploaded: GeneticFileUploaded = resp.decode()?;
    Ok(uploaded.snps_count)
}

/// Remove a patient's genotype data; returns how many variants were dropped.
///
/// # Errors
///
/// Returns the backend error, falling back to `Error al eliminar el archivo`.
pub async fn delete_genetic_file(user_id: i64) -> Result<i64, ApiError> {
    let resp =
        ensure_ok(http::post(ep::DELETE_GENETIC_FILE, &UserTarget { user_id }).await, "Error al eliminar el archivo")?;
    let deleted: GeneticFileDeleted = resp.decode()?;
    Ok(deleted.deleted_count)
}

/// # Errors
///
/// Returns the backend error, falling back to `Error al actualizar el estado`.
pub async fn update_service_status(user_id: i64, status: ServiceStatus) -> Result<(), ApiError> {
    let body = ServiceStatusUpdate { user_id, status: status.effective() };
    ensure_ok(http::post(ep::UPDATE_SERVICE_STATUS, &body).await, "Error al actualizar el estado").map(|_| ())
}

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn fetch_admin_stats() -> Result<AdminStats, ApiError> {
    let resp = ensure_ok(http::get(ep::ADMIN_STATS).await, "No se pudieron cargar las estadísticas")?;
    Ok(resp.decode_payload()?)
}

// =============================================================================
// RECEPTION DESK
// =============================================================================

/// # Errors
///
/// Returns the backend error or a decode failure.
pub async fn reception_search(sample_code: &str) -> Result<Vec<ReceptionProfile>, ApiError> {
    let resp = ensure_ok(http::get(&ep::reception_search_path(sample_code)).await, "Error al buscar")?;
    let results: ReceptionSearchResults = resp.decode()?;
    Ok(results.results)
}

/// Record that the patient is physically at the desk.
///
/// # Errors
///
/// Returns the backend error or [`ApiError::Decode`] without a `user`.
pub async fn reception_arrival(user_id: i64) -> Result<ReceptionProfile, ApiError> {
    profile_from_response(http::post(ep::RECEPTION_ARRIVAL, &UserTarget { user_id }).await)
}

/// Fetch (and optionally re-email) the sample code.
///
/// # Errors
///
/// Returns the backend error or [`ApiError::Decode`] without a `user`.
pub async fn reception_sample_code(user_id: i64, resend: bool) -> Result<ReceptionProfile, ApiError> {
    profile_from_response(http::post(ep::RECEPTION_SAMPLE_CODE, &SampleCodeRequest { user_id, resend }).await)
}

/// Advance the sample lifecycle.
///
/// # Errors
///
/// Returns the backend error or [`ApiError::Decode`] without a `user`.
pub async fn reception_sample_status(user_id: i64, action: SampleAction) -> Result<ReceptionProfile, ApiError> {
    profile_from_response(http::post(ep::RECEPTION_SAMPLE_STATUS, &SampleStatusRequest { user_id, action }).await)
}

fn profile_from_response(resp: ApiResponse) -> Result<ReceptionProfile, ApiError> {
    let resp = ensure_ok(resp, "No se pudo actualizar el estado")?;
    Ok(resp.decode_field("user")?)
}

/// Multipart upload of a patient's raw file from the upload modal.
///
/// # Errors
///
/// Returns the backend `message`/`error`, or a browser failure building the
/// form.
#[cfg(feature = "csr")]
pub async fn upload_user_file(file: &web_sys::File, user_email: &str) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Browser("FormData no disponible".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Browser("No se pudo adjuntar el archivo".to_owned()))?;
    form.append_with_str("userEmail", user_email)
        .map_err(|_| ApiError::Browser("No se pudo adjuntar el correo".to_owned()))?;
    let resp = http::upload_form(&ep::url(ep::UPLOAD_FILE), form).await;
    ensure_ok(resp, "Error al subir el archivo").map(|_| ())
}

/// Read a picked file as UTF-8 text.
///
/// # Errors
///
/// Returns [`ApiError::Browser`] when the browser cannot read the file.
#[cfg(feature = "csr")]
pub async fn read_file_text(file: &web_sys::File) -> Result<String, ApiError> {
    let value = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|_| ApiError::Browser("No se pudo leer el archivo".to_owned()))?;
    value.as_string().ok_or_else(|| ApiError::Browser("El archivo no contiene texto".to_owned()))
}
