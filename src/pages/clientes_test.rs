use super::*;

// ============================================================================
// Route id parsing
// ============================================================================

#[test]
fn parse_ruta_id_reads_a_numeric_segment() {
    assert_eq!(parse_ruta_id(Some("42".to_owned())), Some(42));
}

#[test]
fn parse_ruta_id_trims_surrounding_whitespace() {
    assert_eq!(parse_ruta_id(Some(" 7 ".to_owned())), Some(7));
}

#[test]
fn parse_ruta_id_rejects_missing_or_garbage_segments() {
    assert_eq!(parse_ruta_id(None), None);
    assert_eq!(parse_ruta_id(Some(String::new())), None);
    assert_eq!(parse_ruta_id(Some("abc".to_owned())), None);
}

// ============================================================================
// Tax type parsing
// ============================================================================

#[test]
fn parse_tipo_impuesto_accepts_both_options() {
    assert_eq!(parse_tipo_impuesto("0"), 0);
    assert_eq!(parse_tipo_impuesto("1"), 1);
}

#[test]
fn parse_tipo_impuesto_falls_back_to_one() {
    assert_eq!(parse_tipo_impuesto(""), 1);
    assert_eq!(parse_tipo_impuesto("x"), 1);
}

// ============================================================================
// Payload builders
// ============================================================================

#[test]
fn build_cliente_nuevo_trims_fields_and_parses_the_tax_type() {
    let cliente = build_cliente_nuevo(" 0912345678 ", " Acme S.A. ", " Mayorista ", "0");

    assert_eq!(cliente.numero_identificacion, "0912345678");
    assert_eq!(cliente.razon_social, "Acme S.A.");
    assert_eq!(cliente.descripcion, "Mayorista");
    assert_eq!(cliente.tipo_impuesto, 0);
}

#[test]
fn build_cliente_actualizar_keeps_the_row_id() {
    let cliente = build_cliente_actualizar(9, "0912345678", "Acme S.A.", "Mayorista");

    assert_eq!(cliente.id, 9);
    assert_eq!(cliente.numero_identificacion, "0912345678");
    assert_eq!(cliente.razon_social, "Acme S.A.");
    assert_eq!(cliente.descripcion, "Mayorista");
}
