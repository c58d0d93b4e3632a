//! Shuk server library.
//!
//! Hosts two request-scoped components over the hosted `PostgreSQL` backend:
//!
//! - the admin session API: issues, verifies, and revokes signed session
//!   cookies for administrator accounts
//! - the catalog feed: renders visible products as a merchant-compatible
//!   RSS document
//!
//! Both are stateless per-request computations; there is no shared cache,
//! lock, or background work in this crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
