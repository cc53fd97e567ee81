use super::*;

// ============================================================================
// Field parsing
// ============================================================================

#[test]
fn parse_entero_reads_a_select_value() {
    assert_eq!(parse_entero("3"), 3);
    assert_eq!(parse_entero(" 12 "), 12);
}

#[test]
fn parse_entero_maps_the_placeholder_and_garbage_to_zero() {
    assert_eq!(parse_entero("0"), 0);
    assert_eq!(parse_entero(""), 0);
    assert_eq!(parse_entero("abc"), 0);
}

#[test]
fn parse_decimal_accepts_fractions() {
    assert!((parse_decimal("2.5") - 2.5).abs() < f64::EPSILON);
    assert!((parse_decimal(" 10 ") - 10.0).abs() < f64::EPSILON);
}

#[test]
fn parse_decimal_maps_empty_input_to_zero() {
    assert!(parse_decimal("").abs() < f64::EPSILON);
}

// ============================================================================
// Payload builder
// ============================================================================

#[test]
fn build_stock_combines_the_three_fields() {
    let stock = build_stock("7", "2.5", "10.75");

    assert_eq!(stock.id_producto, 7);
    assert!((stock.cantidad - 2.5).abs() < f64::EPSILON);
    assert!((stock.precio_unitario - 10.75).abs() < f64::EPSILON);
}

#[test]
fn build_stock_leaves_zeroes_for_untouched_fields() {
    let stock = build_stock("0", "", "");

    assert_eq!(stock.id_producto, 0);
    assert!(stock.cantidad.abs() < f64::EPSILON);
    assert!(stock.precio_unitario.abs() < f64::EPSILON);
}
