use super::*;

#[test]
fn build_credenciales_always_remembers_session() {
    let credenciales = build_credenciales("ana@example.com", "secreta");
    assert!(credenciales.recordar_sesion);
}

#[test]
fn build_credenciales_trims_usuario_only() {
    let credenciales = build_credenciales("  ana@example.com  ", " secreta ");
    assert_eq!(credenciales.usuario, "ana@example.com");
    // Passwords may legitimately contain spaces.
    assert_eq!(credenciales.clave, " secreta ");
}
