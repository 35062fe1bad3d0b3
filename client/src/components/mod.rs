//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components provide the chrome around pages (guards, layout, navbar,
//! notifications, dialogs) while reading shared state from Leptos context.

pub mod confirm_dialog;
pub mod flash_banner;
pub mod loading_overlay;
pub mod navbar;
pub mod root_layout;
pub mod route_guard;
