//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route gating, display formatting, and user-facing text live here so pages
//! stay focused on wiring state to views.

pub mod format;
pub mod guard;
pub mod messages;
pub mod task;
