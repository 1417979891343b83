//! Networking modules for loading the profile document.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single document fetch and `types` defines the profile
//! schema it deserializes into.

pub mod api;
pub mod types;
