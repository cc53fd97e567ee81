use super::*;

#[test]
fn build_usuario_nuevo_fixes_backend_flags() {
    let usuario = build_usuario_nuevo("Ana", "Vera", "ana@example.com", "secreta", "0999");
    assert!(!usuario.is_super_user);
    assert_eq!(usuario.tipo_2fa, 0);
}

#[test]
fn build_usuario_nuevo_sends_password_untrimmed() {
    let usuario = build_usuario_nuevo(" Ana ", " Vera ", " ana@example.com ", " secreta ", " 0999 ");
    assert_eq!(usuario.first_name, "Ana");
    assert_eq!(usuario.email, "ana@example.com");
    assert_eq!(usuario.password_hash, " secreta ");
}
