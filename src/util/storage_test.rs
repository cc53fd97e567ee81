#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_session_is_empty_in_non_hydrate_tests() {
    assert_eq!(load_session(), SessionState::default());
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    let session = SessionState {
        access_token: Some("acceso".to_owned()),
        refresh_token: Some("refresco".to_owned()),
        expiration: None,
    };
    save_session(&session);
    clear_session();
    assert_eq!(load_session(), SessionState::default());
}
