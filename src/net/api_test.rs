use super::*;

#[test]
fn endpoint_url_joins_base_and_name() {
    assert_eq!(
        endpoint_url(CONSULTAR_CLIENTES),
        "http://localhost:6061/api/v1/consultar-clientes"
    );
    assert_eq!(
        endpoint_url(OBTENER_KARDEX_VALORIZADO),
        "http://localhost:6061/api/v1/obtener-kardex-valorizado"
    );
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn http_failure_message_prefixes_status() {
    assert_eq!(
        http_failure_message(500, "No se pudieron obtener los clientes."),
        "Error 500: No se pudieron obtener los clientes."
    );
}

#[test]
fn require_token_accepts_present_token() {
    assert_eq!(require_token(Some("abc123")), Ok("abc123"));
}

#[test]
fn require_token_rejects_missing_token() {
    assert_eq!(require_token(None), Err(ApiError::NoToken));
}

#[test]
fn require_token_rejects_empty_token() {
    assert_eq!(require_token(Some("")), Err(ApiError::NoToken));
}
