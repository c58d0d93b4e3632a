//! Admin account management route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use shuk_core::{AdminIdentity, AdminUserId};

use crate::db::AdminUserRepository;
use crate::error::AppError;
use crate::middleware::{RequireAdmin, RequireSuperAdmin};
use crate::state::AppState;

/// Capability required to view the admin account list.
const MANAGE_ADMINS: &str = "admins.manage";

/// One account in the listing. Credentials never leave the server.
#[derive(Debug, Serialize)]
pub struct AdminSummary {
    pub id: String,
    pub username: String,
    pub is_super_admin: bool,
    pub is_active: bool,
}

/// List all admin accounts.
///
/// Requires the `admins.manage` capability (super admins always pass).
pub async fn list(
    RequireAdmin(identity): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminSummary>>, AppError> {
    if !identity.has_permission(MANAGE_ADMINS) {
        return Err(AppError::Forbidden(
            "Missing the admins.manage permission".to_string(),
        ));
    }

    let accounts = AdminUserRepository::new(state.pool()).list().await?;

    Ok(Json(
        accounts
            .into_iter()
            .map(|account| AdminSummary {
                id: account.id.to_string(),
                username: account.username,
                is_super_admin: account.is_super_admin,
                is_active: account.is_active,
            })
            .collect(),
    ))
}

/// Fetch one admin account, permission set included.
///
/// Super admins only: the permission map is account detail the listing
/// deliberately omits.
pub async fn get_one(
    RequireSuperAdmin(_): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdminIdentity>, AppError> {
    let account = AdminUserRepository::new(state.pool())
        .get_by_id(AdminUserId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Admin account not found".to_string()))?;

    Ok(Json(account.identity()))
}
