//! Shared presentational components.
//!
//! ARCHITECTURE
//! ============
//! Pages own fetching and state; components here are stateless building
//! blocks reused across routes.

pub mod page_header;
