//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`nav`, `session`) so components depend on small
//! focused models. The two modules never read each other.

pub mod nav;
pub mod session;
