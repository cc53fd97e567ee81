use super::*;

// ============================================================================
// Route id parsing
// ============================================================================

#[test]
fn parse_ruta_id_reads_a_numeric_segment() {
    assert_eq!(parse_ruta_id(Some("15".to_owned())), Some(15));
}

#[test]
fn parse_ruta_id_rejects_missing_or_garbage_segments() {
    assert_eq!(parse_ruta_id(None), None);
    assert_eq!(parse_ruta_id(Some("  ".to_owned())), None);
    assert_eq!(parse_ruta_id(Some("1.5".to_owned())), None);
}

// ============================================================================
// Payload builders
// ============================================================================

#[test]
fn build_producto_nuevo_trims_both_fields() {
    let producto = build_producto_nuevo(" Balanza digital ", " 30kg, 1g de precisión ");

    assert_eq!(producto.nombre_producto, "Balanza digital");
    assert_eq!(producto.descripcion_producto, "30kg, 1g de precisión");
}

#[test]
fn build_producto_actualizar_keeps_the_row_id() {
    let producto = build_producto_actualizar(3, "Balanza digital", "30kg");

    assert_eq!(producto.id, 3);
    assert_eq!(producto.nombre_producto, "Balanza digital");
    assert_eq!(producto.descripcion_producto, "30kg");
}
