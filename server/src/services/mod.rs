//! Service layer for sessions and backend credential checks.
//!
//! DESIGN
//! ======
//! Route handlers stay thin; anything with state or upstream I/O lives here.

pub mod backend;
pub mod session;
