//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check (wired in main)
//! GET  /health/ready           - Readiness check (wired in main)
//!
//! # Catalog feed
//! GET  /feed.xml               - Merchant product feed (public, shared-cacheable)
//!
//! # Admin session
//! POST /api/auth/login         - Issue session cookie from credentials
//! POST /api/auth/logout        - Clear session cookie (idempotent)
//! GET  /api/auth/me            - Current admin identity
//!
//! # Admin accounts
//! GET  /api/admin/users        - List admin accounts (requires admins.manage)
//! GET  /api/admin/users/{id}   - Admin account detail (super admin only)
//! ```

pub mod admin_users;
pub mod auth;
pub mod feed;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/feed.xml", get(feed::product_feed))
        .route("/api/admin/users", get(admin_users::list))
        .route("/api/admin/users/{id}", get(admin_users::get_one))
        .nest("/api/auth", auth_routes())
}

/// Create the admin session routes router.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}
