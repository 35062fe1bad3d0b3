//! Networking modules for the remote CMS REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the request issuer and envelope normalization, `api` maps
//! endpoints to typed calls, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
