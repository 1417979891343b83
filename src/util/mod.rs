//! Utility helpers shared across the page and its components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and profile-to-view
//! mapping from component markup to improve reuse and testability.

pub mod browser;
pub mod markdown;
pub mod profile_view;
pub mod scroll;
pub mod theme;
