use super::*;

// ============================================================================
// Filter building
// ============================================================================

#[test]
fn build_filtro_requires_a_selected_product() {
    assert_eq!(build_filtro("0", "", ""), None);
    assert_eq!(build_filtro("", "", ""), None);
    assert_eq!(build_filtro("abc", "2026-01-01", "2026-01-31"), None);
}

#[test]
fn build_filtro_sends_empty_dates_as_null() {
    let filtro = build_filtro("4", "", "  ");

    assert_eq!(
        filtro,
        Some(KardexFiltro {
            id_producto: 4,
            fecha_inicio: None,
            fecha_fin: None,
        })
    );
}

#[test]
fn build_filtro_keeps_a_chosen_range() {
    let filtro = build_filtro("4", "2026-01-01", "2026-01-31");

    assert_eq!(
        filtro,
        Some(KardexFiltro {
            id_producto: 4,
            fecha_inicio: Some("2026-01-01".to_owned()),
            fecha_fin: Some("2026-01-31".to_owned()),
        })
    );
}

#[test]
fn build_filtro_allows_a_single_open_end() {
    let filtro = build_filtro("9", "2026-01-01", "");

    assert_eq!(
        filtro,
        Some(KardexFiltro {
            id_producto: 9,
            fecha_inicio: Some("2026-01-01".to_owned()),
            fecha_fin: None,
        })
    );
}
