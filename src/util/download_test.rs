#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn excel_mime_is_the_xlsx_content_type() {
    assert_eq!(
        EXCEL_MIME,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}

#[test]
fn save_file_is_noop_but_callable() {
    save_file("kardex.xlsx", &[0, 1, 2]);
    save_file("", &[]);
}
