//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and resume sections while reading/writing
//! shared state from Leptos context providers.

pub mod card_list;
pub mod contact_list;
pub mod section_nav;
pub mod site_footer;
pub mod site_header;
pub mod tag_list;
pub mod theme_toggle;
