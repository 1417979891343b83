//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `profile`) so components depend on small
//! focused models provided through Leptos context.

pub mod profile;
pub mod ui;
