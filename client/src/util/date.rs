//! Calendar dates for form defaults and optimistic table updates.

/// `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
pub fn date_part(iso: &str) -> &str {
    iso.split_once('T').map_or(iso, |(date, _)| date)
}

/// Today's date in the browser, `YYYY-MM-DD`.
#[cfg(feature = "csr")]
pub fn today() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    date_part(&iso).to_owned()
}

#[cfg(not(feature = "csr"))]
pub fn today() -> String {
    String::new()
}
