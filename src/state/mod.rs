//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! One model per concern: `session` holds the token pair every request
//! reads, while `list` and `form` capture the loading/error lifecycle
//! every page follows, so transitions are testable without a browser.

pub mod form;
pub mod list;
pub mod session;
