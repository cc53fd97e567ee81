//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetch/submit orchestration and keeps
//! the pure input handling (parsing, payload building) in plain functions
//! so that logic stays natively testable.

pub mod clientes;
pub mod facturas;
pub mod home;
pub mod kardex;
pub mod login;
pub mod productos;
pub mod signup;
pub mod stock;
