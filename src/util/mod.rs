//! Utility helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser/environment concerns (localStorage, abort controllers, blob
//! downloads, dates) live here behind the `hydrate` feature so pages and
//! state stay natively testable.

pub mod abort;
pub mod download;
pub mod fecha;
pub mod storage;
