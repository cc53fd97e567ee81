//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the request cores every page calls (authenticated POST with
//! envelope unwrapping) plus one thin wrapper per endpoint, and `types`
//! defines the request/response DTOs shared with the backend.

pub mod api;
pub mod types;
