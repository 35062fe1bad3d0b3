//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session and flash banner are app-wide and provided through context;
//! `resource` is instantiated per management page.

pub mod auth;
pub mod flash;
pub mod resource;
pub mod token_store;
