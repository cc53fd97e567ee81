use super::*;

#[test]
fn begin_clears_previous_outcome() {
    let mut estado = FormState::default();
    estado.fail("falló".to_owned());
    estado.begin();
    assert!(estado.saving);
    assert_eq!(estado.error, None);
    assert_eq!(estado.success, None);
}

#[test]
fn fail_stops_saving_and_records_message() {
    let mut estado = FormState::default();
    estado.begin();
    estado.fail("Error al crear el cliente.".to_owned());
    assert!(!estado.saving);
    assert_eq!(estado.error.as_deref(), Some("Error al crear el cliente."));
}

#[test]
fn succeed_replaces_error_with_success() {
    let mut estado = FormState::default();
    estado.fail("falló".to_owned());
    estado.begin();
    estado.succeed("Stock agregado exitosamente.".to_owned());
    assert!(!estado.saving);
    assert_eq!(estado.error, None);
    assert_eq!(estado.success.as_deref(), Some("Stock agregado exitosamente."));
}

#[test]
fn finish_only_releases_the_submit_button() {
    let mut estado = FormState::default();
    estado.begin();
    estado.finish();
    assert!(!estado.saving);
    assert_eq!(estado.error, None);
    assert_eq!(estado.success, None);
}
