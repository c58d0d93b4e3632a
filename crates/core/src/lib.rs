//! Shuk Core - Shared types library.
//!
//! This crate provides common types used across all Shuk components:
//! - `server` - Storefront feed endpoint and admin session API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, the permission set, and the admin identity

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
