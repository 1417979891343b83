//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns loading orchestration and delegates rendering details to
//! `components`.

pub mod resume;
