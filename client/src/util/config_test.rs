use super::*;

#[test]
fn defaults_apply_when_unset() {
    let cfg = ClientConfig::from_parts(None, None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.pdf_timeout, Duration::from_secs(DEFAULT_PDF_TIMEOUT_SECS));
}

#[test]
fn base_url_trailing_slashes_are_trimmed() {
    let cfg = ClientConfig::from_parts(Some("https://api.sequoh.cl/api/auth//"), None);
    assert_eq!(cfg.api_base_url, "https://api.sequoh.cl/api/auth");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let cfg = ClientConfig::from_parts(Some("   "), None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn invalid_or_zero_timeout_falls_back_to_default() {
    assert_eq!(ClientConfig::from_parts(None, Some("abc")).pdf_timeout, Duration::from_secs(120));
    assert_eq!(ClientConfig::from_parts(None, Some("0")).pdf_timeout, Duration::from_secs(120));
    assert_eq!(ClientConfig::from_parts(None, Some(" 30 ")).pdf_timeout, Duration::from_secs(30));
}

#[test]
fn origin_strips_auth_suffix() {
    let cfg = ClientConfig::from_parts(Some("http://localhost:8000/api/auth"), None);
    assert_eq!(cfg.origin(), "http://localhost:8000");
    let cfg = ClientConfig::from_parts(Some("http://proxy/other"), None);
    assert_eq!(cfg.origin(), "http://proxy/other");
}
