//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome while reading/writing shared state from
//! Leptos context providers.

pub mod sidebar;
