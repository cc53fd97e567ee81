use super::*;

fn respuesta_ok() -> Respuesta {
    Respuesta {
        codigo: "200".to_owned(),
        mensaje: String::new(),
        es_exitosa: true,
        existe_excepcion: false,
    }
}

fn respuesta_fallida(mensaje: &str) -> Respuesta {
    Respuesta {
        codigo: "400".to_owned(),
        mensaje: mensaje.to_owned(),
        es_exitosa: false,
        existe_excepcion: false,
    }
}

#[test]
fn respuesta_deserializes_wire_field_names() {
    let json = r#"{
        "codigo": "200",
        "mensaje": "ok",
        "esExitosa": true,
        "existeExcepcion": false
    }"#;
    let respuesta: Respuesta = serde_json::from_str(json).expect("respuesta");
    assert_eq!(respuesta.codigo, "200");
    assert_eq!(respuesta.mensaje, "ok");
    assert!(respuesta.es_exitosa);
    assert!(!respuesta.existe_excepcion);
}

#[test]
fn exigir_exito_passes_on_success() {
    assert_eq!(respuesta_ok().exigir_exito("fallback"), Ok(()));
}

#[test]
fn exigir_exito_rejects_with_backend_mensaje() {
    let err = respuesta_fallida("Cliente no encontrado.")
        .exigir_exito("fallback")
        .expect_err("should reject");
    assert_eq!(err, ApiError::Rejected("Cliente no encontrado.".to_owned()));
}

#[test]
fn exigir_exito_uses_fallback_when_mensaje_blank() {
    let err = respuesta_fallida("   ")
        .exigir_exito("Error al consultar.")
        .expect_err("should reject");
    assert_eq!(err, ApiError::Rejected("Error al consultar.".to_owned()));
}

#[test]
fn envelope_unwraps_resultado_on_success() {
    let json = r#"{
        "respuesta": {"codigo": "200", "mensaje": "", "esExitosa": true, "existeExcepcion": false},
        "resultado": {"base64": "QQ==", "nombreArchivo": "kardex.xlsx"}
    }"#;
    let envelope: Envelope<ArchivoReporte> = serde_json::from_str(json).expect("envelope");
    let archivo = envelope.into_resultado("fallback").expect("resultado");
    assert_eq!(archivo.nombre_archivo, "kardex.xlsx");
}

#[test]
fn envelope_rejection_wins_over_present_resultado() {
    let json = r#"{
        "respuesta": {"codigo": "409", "mensaje": "Duplicado.", "esExitosa": false, "existeExcepcion": false},
        "resultado": {"base64": "QQ==", "nombreArchivo": "kardex.xlsx"}
    }"#;
    let envelope: Envelope<ArchivoReporte> = serde_json::from_str(json).expect("envelope");
    let err = envelope.into_resultado("fallback").expect_err("should reject");
    assert_eq!(err, ApiError::Rejected("Duplicado.".to_owned()));
}

#[test]
fn envelope_missing_resultado_is_transport_class() {
    let json = r#"{
        "respuesta": {"codigo": "200", "mensaje": "", "esExitosa": true, "existeExcepcion": false}
    }"#;
    let envelope: Envelope<ArchivoReporte> = serde_json::from_str(json).expect("envelope");
    let err = envelope
        .into_resultado("Error al obtener el producto.")
        .expect_err("should fail");
    assert_eq!(
        err,
        ApiError::Transport("Error al obtener el producto.".to_owned())
    );
}

#[test]
fn list_envelope_preserves_rows_and_order() {
    let json = r#"{
        "respuesta": {"codigo": "200", "mensaje": "", "esExitosa": true, "existeExcepcion": false},
        "resultados": [3, 1, 2]
    }"#;
    let envelope: ListEnvelope<i64> = serde_json::from_str(json).expect("envelope");
    let rows = envelope.into_resultados("fallback").expect("resultados");
    assert_eq!(rows, vec![3, 1, 2]);
}

#[test]
fn list_envelope_missing_resultados_is_empty() {
    let json = r#"{
        "respuesta": {"codigo": "200", "mensaje": "", "esExitosa": true, "existeExcepcion": false}
    }"#;
    let envelope: ListEnvelope<i64> = serde_json::from_str(json).expect("envelope");
    let rows = envelope.into_resultados("fallback").expect("resultados");
    assert!(rows.is_empty());
}

#[test]
fn list_envelope_rejects_even_with_rows() {
    let json = r#"{
        "respuesta": {"codigo": "500", "mensaje": "", "esExitosa": false, "existeExcepcion": true},
        "resultados": [1]
    }"#;
    let envelope: ListEnvelope<i64> = serde_json::from_str(json).expect("envelope");
    let err = envelope
        .into_resultados("La respuesta del servidor indica un error.")
        .expect_err("should reject");
    assert_eq!(
        err,
        ApiError::Rejected("La respuesta del servidor indica un error.".to_owned())
    );
}

#[test]
fn archivo_round_trips_ten_bytes() {
    let archivo = ArchivoReporte {
        base64: "AAECAwQFBgcICQ==".to_owned(),
        nombre_archivo: "kardex.xlsx".to_owned(),
    };
    let bytes = archivo.bytes().expect("decode");
    assert_eq!(bytes, (0u8..10).collect::<Vec<_>>());
}

#[test]
fn archivo_rejects_invalid_base64() {
    let archivo = ArchivoReporte {
        base64: "no-es-base64!!".to_owned(),
        nombre_archivo: "kardex.xlsx".to_owned(),
    };
    let err = archivo.bytes().expect_err("should fail");
    assert_eq!(err, ApiError::InvalidFile);
    assert_eq!(
        err.to_string(),
        "El archivo del reporte no se pudo decodificar."
    );
}

#[test]
fn archivo_deserializes_wire_field_names() {
    let json = r#"{"base64": "QQ==", "nombreArchivo": "reporte.xlsx"}"#;
    let archivo: ArchivoReporte = serde_json::from_str(json).expect("archivo");
    assert_eq!(archivo.base64, "QQ==");
    assert_eq!(archivo.nombre_archivo, "reporte.xlsx");
}

#[test]
fn error_mensaje_prefers_nested_respuesta() {
    let body = r#"{"respuesta": {"mensaje": "Credenciales incorrectas."}, "mensaje": "otro"}"#;
    assert_eq!(
        error_mensaje(body),
        Some("Credenciales incorrectas.".to_owned())
    );
}

#[test]
fn error_mensaje_falls_back_to_flat_field() {
    let body = r#"{"mensaje": "Producto en uso."}"#;
    assert_eq!(error_mensaje(body), Some("Producto en uso.".to_owned()));
}

#[test]
fn error_mensaje_skips_blank_nested_mensaje() {
    let body = r#"{"respuesta": {"mensaje": "  "}, "mensaje": "Detalle plano."}"#;
    assert_eq!(error_mensaje(body), Some("Detalle plano.".to_owned()));
}

#[test]
fn error_mensaje_ignores_unparseable_bodies() {
    assert_eq!(error_mensaje("<html>502</html>"), None);
    assert_eq!(error_mensaje(""), None);
    assert_eq!(error_mensaje(r#"{"mensaje": ""}"#), None);
}

#[test]
fn no_token_display_matches_ui_message() {
    assert_eq!(
        ApiError::NoToken.to_string(),
        "No hay token de acceso disponible."
    );
}
