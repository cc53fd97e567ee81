use super::*;

// ============================================================================
// Lookup id parsing
// ============================================================================

#[test]
fn parse_factura_id_reads_a_typed_number() {
    assert_eq!(parse_factura_id("12"), Some(12));
    assert_eq!(parse_factura_id(" 3 "), Some(3));
}

#[test]
fn parse_factura_id_rejects_empty_and_garbage_input() {
    assert_eq!(parse_factura_id(""), None);
    assert_eq!(parse_factura_id("doce"), None);
}

// ============================================================================
// Estado badge
// ============================================================================

#[test]
fn badge_class_marks_deleted_invoices_as_errors() {
    assert_eq!(badge_class("Eliminada"), "insignia insignia--error");
}

#[test]
fn badge_class_keeps_every_other_estado_green() {
    assert_eq!(badge_class("Activa"), "insignia insignia--exito");
    assert_eq!(badge_class(""), "insignia insignia--exito");
}

// ============================================================================
// Line item editing
// ============================================================================

#[test]
fn agregar_detalle_appends_a_fresh_row() {
    let mut detalles = Vec::new();

    agregar_detalle(&mut detalles);
    agregar_detalle(&mut detalles);

    assert_eq!(
        detalles,
        vec![
            DetalleNuevo { id_producto: 0, cantidad: 1 },
            DetalleNuevo { id_producto: 0, cantidad: 1 },
        ]
    );
}

#[test]
fn quitar_detalle_removes_exactly_the_indexed_row() {
    let mut detalles = vec![
        DetalleNuevo { id_producto: 1, cantidad: 1 },
        DetalleNuevo { id_producto: 2, cantidad: 2 },
        DetalleNuevo { id_producto: 3, cantidad: 3 },
    ];

    quitar_detalle(&mut detalles, 1);

    assert_eq!(
        detalles,
        vec![
            DetalleNuevo { id_producto: 1, cantidad: 1 },
            DetalleNuevo { id_producto: 3, cantidad: 3 },
        ]
    );
}

#[test]
fn quitar_detalle_ignores_an_out_of_range_index() {
    let mut detalles = vec![DetalleNuevo { id_producto: 1, cantidad: 1 }];

    quitar_detalle(&mut detalles, 5);

    assert_eq!(detalles.len(), 1);
}

#[test]
fn parse_cantidad_keeps_the_previous_value_while_the_field_is_empty() {
    assert_eq!(parse_cantidad("", 4), 4);
    assert_eq!(parse_cantidad("  ", 4), 4);
}

#[test]
fn parse_cantidad_applies_a_parsed_value() {
    assert_eq!(parse_cantidad("9", 4), 9);
}

// ============================================================================
// Payload building
// ============================================================================

#[test]
fn build_factura_preserves_line_item_order() {
    let detalles = vec![
        DetalleNuevo { id_producto: 5, cantidad: 2 },
        DetalleNuevo { id_producto: 3, cantidad: 7 },
    ];

    let factura = build_factura("4", "2026-02-10T09:00", "Venta mostrador", &detalles);

    assert_eq!(factura.id_cliente, 4);
    assert_eq!(factura.fecha_factura, "2026-02-10T09:00");
    assert_eq!(factura.glosa, "Venta mostrador");
    assert_eq!(factura.detalles, detalles);
}

#[test]
fn build_factura_maps_a_missing_client_selection_to_zero() {
    let factura = build_factura("", "2026-02-10T09:00", "", &[]);

    assert_eq!(factura.id_cliente, 0);
    assert!(factura.detalles.is_empty());
}
