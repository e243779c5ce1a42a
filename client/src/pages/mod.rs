//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session redirects) and
//! delegates rendering details to `components`.

pub mod customers;
pub mod home;
pub mod login;
pub mod settings;
