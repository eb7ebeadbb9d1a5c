#![cfg(not(feature = "csr"))]

use super::*;
use crate::test_util::block_on;

#[test]
fn report_filename_sanitizes_name() {
    assert_eq!(report_filename("ana.perez"), "Reporte_Genetico_ana_perez.pdf");
    assert_eq!(report_filename("José Núñez"), "Reporte_Genetico_Jos__N__ez.pdf");
    assert_eq!(report_filename("  "), "Reporte_Genetico_usuario.pdf");
    assert_eq!(report_filename("p-001"), "Reporte_Genetico_p-001.pdf");
}

#[test]
fn cancel_is_observed_by_pending_download() {
    let handle = DownloadHandle::new();
    assert!(!handle.is_cancelled());
    let clone = handle.clone();
    clone.cancel();
    assert!(handle.is_cancelled());
    assert_eq!(block_on(download_report(&handle, "x")).unwrap_err(), ApiError::Cancelled);
}

#[test]
fn failures_show_generic_message_except_cancel() {
    let http = ApiError::Http { status: 500, message: "Error al generar el reporte".to_owned(), fields: Default::default() };
    assert_eq!(failure_message(&http), DOWNLOAD_FAILED);
    assert_eq!(failure_message(&ApiError::Timeout), DOWNLOAD_FAILED);
    assert_eq!(failure_message(&ApiError::Cancelled), "Descarga cancelada.");
}

#[test]
fn offline_download_reports_network_error() {
    let handle = DownloadHandle::new();
    assert_eq!(block_on(download_report(&handle, "x")).unwrap_err(), ApiError::Network);
}
