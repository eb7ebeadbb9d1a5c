#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn get_token_is_none_outside_browser() {
    set_token("ignored");
    assert_eq!(get_token(), None);
    clear_token();
}
