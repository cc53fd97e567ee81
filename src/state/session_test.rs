use super::*;

fn jwt() -> Jwt {
    Jwt {
        access_token: "acceso-123".to_owned(),
        refresh_token: "refresco-456".to_owned(),
        expiration: "2026-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn from_jwt_stores_the_exact_token_pair() {
    let session = SessionState::from_jwt(&jwt());
    assert_eq!(session.access_token.as_deref(), Some("acceso-123"));
    assert_eq!(session.refresh_token.as_deref(), Some("refresco-456"));
    assert_eq!(session.expiration.as_deref(), Some("2026-01-01T00:00:00Z"));
}

#[test]
fn token_exposes_access_token_only() {
    let session = SessionState::from_jwt(&jwt());
    assert_eq!(session.token(), Some("acceso-123"));
    assert_eq!(SessionState::default().token(), None);
}

#[test]
fn default_session_is_unauthenticated() {
    assert!(!SessionState::default().is_authenticated());
    assert!(SessionState::from_jwt(&jwt()).is_authenticated());
}

#[test]
fn clear_drops_all_fields() {
    let mut session = SessionState::from_jwt(&jwt());
    session.clear();
    assert_eq!(session, SessionState::default());
}
