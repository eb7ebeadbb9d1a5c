use super::*;

#[test]
fn newest_ticket_wins() {
    let mut seq = RequestSeq::default();
    let first = seq.begin();
    let second = seq.begin();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
}

#[test]
fn remote_drops_stale_responses() {
    let mut remote: Remote<u32> = Remote::default();
    let old = remote.begin();
    let new = remote.begin();
    assert!(remote.finish::<String>(new, Ok(2)));
    assert!(!remote.finish::<String>(old, Ok(1)));
    assert_eq!(remote.data, Some(2));
    assert!(!remote.loading);
}

#[test]
fn remote_keeps_previous_data_on_error() {
    let mut remote: Remote<u32> = Remote::default();
    let t = remote.begin();
    remote.finish::<String>(t, Ok(5));
    let t = remote.begin();
    assert!(remote.loading);
    remote.finish(t, Err("Error de conexión con el servidor"));
    assert_eq!(remote.data, Some(5));
    assert_eq!(remote.error.as_deref(), Some("Error de conexión con el servidor"));
}
