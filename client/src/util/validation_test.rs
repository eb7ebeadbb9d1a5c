use super::*;

// =============================================================
// Passwords
// =============================================================

#[test]
fn password_accepted_only_when_all_rules_hold() {
    assert!(validate_password("Secreta123!").is_ok());
    assert_eq!(validate_password("secreta123!"), Err(PASSWORD_INVALID));
    assert_eq!(validate_password("Secretaaa!!"), Err(PASSWORD_INVALID));
    assert_eq!(validate_password("Secreta1234"), Err(PASSWORD_INVALID));
    assert_eq!(validate_password("Sec12!"), Err(PASSWORD_INVALID));
}

#[test]
fn password_rules_report_each_rule() {
    let rules = PasswordRules::check("abc");
    assert_eq!(rules, PasswordRules::default());
    let rules = PasswordRules::check("A1{");
    assert!(rules.uppercase && rules.digit && rules.symbol && !rules.min_length);
    assert_eq!(rules.items().iter().filter(|(_, ok)| *ok).count(), 3);
}

#[test]
fn password_symbols_include_quote_and_braces() {
    for symbol in ['"', '{', '}', '|', '<', '>'] {
        assert!(PasswordRules::check(&symbol.to_string()).symbol, "{symbol}");
    }
    assert!(!PasswordRules::check("-_=+").symbol);
}

#[test]
fn confirmation_must_be_non_empty_and_equal() {
    assert!(passwords_match("abc", "abc"));
    assert!(!passwords_match("abc", "abd"));
    assert!(!passwords_match("", ""));
}

#[test]
fn new_password_checks_rules_before_confirmation() {
    assert_eq!(validate_new_password("short", "short"), Err(PASSWORD_INVALID));
    assert_eq!(validate_new_password("Secreto123!", "Secreto123?"), Err(PASSWORD_MISMATCH));
    assert_eq!(validate_new_password("Secreto123!", "Secreto123!"), Ok(()));
}

// =============================================================
// Contact fields
// =============================================================

#[test]
fn phone_rules() {
    assert!(validate_phone("56912345678").is_ok());
    assert!(validate_phone("").is_ok());
    assert_eq!(validate_phone("+569"), Err("Solo se permiten números."));
    assert_eq!(validate_phone("569123456789"), Err("Máximo 11 dígitos."));
}

#[test]
fn email_shape() {
    assert!(is_valid_email(" ana@sequoh.cl "));
    assert!(!is_valid_email("ana@sequoh"));
    assert!(!is_valid_email("@sequoh.cl"));
    assert!(!is_valid_email("ana@@sequoh.cl"));
    assert!(!is_valid_email("ana perez@sequoh.cl"));
    assert!(!is_valid_email(""));
}

#[test]
fn required_rejects_blank() {
    assert_eq!(required("  ", "Campo requerido"), Err("Campo requerido"));
    assert!(required("x", "Campo requerido").is_ok());
}

// =============================================================
// Uploads
// =============================================================

#[test]
fn upload_extension_is_case_insensitive() {
    assert!(validate_upload("genoma.VCF", 10).is_ok());
    assert!(validate_upload("genoma.rar", 10).is_ok());
    assert!(validate_upload("genoma.pdf", 10).unwrap_err().starts_with("Tipo de archivo no permitido"));
    assert!(validate_upload("sin_extension", 10).is_err());
}

#[test]
fn upload_size_limit() {
    assert!(validate_upload("a.txt", MAX_UPLOAD_BYTES).is_ok());
    assert!(validate_upload("a.txt", MAX_UPLOAD_BYTES + 1).unwrap_err().contains("100MB"));
}

#[test]
fn rut_extracted_from_filename() {
    assert_eq!(rut_from_filename("fayala_205165851.txt").as_deref(), Some("205165851"));
    assert_eq!(rut_from_filename("fayala_20516585k.txt").as_deref(), Some("20516585K"));
    assert_eq!(rut_from_filename("fayala-205165851.txt"), None);
    assert_eq!(rut_from_filename("fayala_205165851.csv"), None);
}

#[test]
fn rut_normalization_strips_every_separator() {
    assert_eq!(normalize_rut("20.516.585-1"), "205165851");
    assert_eq!(normalize_rut("12.345.678-k"), "12345678K");
}

#[test]
fn genetic_file_must_match_patient() {
    assert_eq!(validate_genetic_file("ana_205165851.txt", None, "20.516.585-1").unwrap(), "205165851");
    assert!(validate_genetic_file("ana_111.txt", None, "20.516.585-1").unwrap_err().contains("no coincide"));
    assert!(validate_genetic_file("ana_111.txt", None, "N/A").is_ok());
    assert!(validate_genetic_file("ana.txt", None, "").unwrap_err().contains("nombre_rut.txt"));
}

#[test]
fn genetic_file_must_match_sample_code() {
    let err = validate_genetic_file("ana_205165851.txt", Some("SQ_205165851"), "").unwrap_err();
    assert!(err.contains("SQ_205165851.txt"));
    assert!(validate_genetic_file("SQ_205165851.txt", Some("SQ_205165851"), "").is_ok());
}
