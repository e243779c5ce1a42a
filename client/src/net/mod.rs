//! Networking modules for the console's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the session, login and runtime-config endpoints, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
