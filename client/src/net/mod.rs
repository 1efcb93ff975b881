//! Networking modules for the clinic REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (auth headers, timeout, error mapping) and
//! `types` defines the request/response schema.

pub mod api;
pub mod types;
