//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and request orchestration; the list
//! screens share theirs through `crud`.

pub(crate) mod crud;
pub mod home;
pub mod login;
pub mod manage_categories;
pub mod manage_content;
pub mod manage_posts;
pub mod manage_tags;
pub mod posts;
pub mod profile;
pub mod register;
