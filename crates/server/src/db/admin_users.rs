//! Admin account repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use shuk_core::{AdminUserId, PermissionSet};

use super::RepositoryError;
use crate::models::AdminAccount;

const SELECT_COLUMNS: &str = r"
    SELECT id,
           username,
           password_hash,
           is_super_admin,
           is_active,
           permissions::text AS permissions,
           created_at,
           updated_at
    FROM admin_user
";

/// One raw account row. Permissions are stored as a JSONB map of
/// capability name to boolean and parsed during conversion.
#[derive(Debug, sqlx::FromRow)]
struct AdminAccountRow {
    id: AdminUserId,
    username: String,
    password_hash: String,
    is_super_admin: bool,
    is_active: bool,
    permissions: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AdminAccountRow {
    fn into_account(self) -> Result<AdminAccount, RepositoryError> {
        let permissions: PermissionSet = match self.permissions.as_deref() {
            Some(json) => serde_json::from_str(json).map_err(|e| {
                RepositoryError::DataCorruption(format!(
                    "invalid permission map for admin {}: {e}",
                    self.id
                ))
            })?,
            None => PermissionSet::new(),
        };

        Ok(AdminAccount {
            id: self.id,
            username: self.username,
            password_hash: self.password_hash,
            is_super_admin: self.is_super_admin,
            is_active: self.is_active,
            permissions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for admin account operations.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an account by username (the login lookup).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if the stored permission map is
    /// not a valid capability-to-boolean object.
    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, RepositoryError> {
        let query = format!("{SELECT_COLUMNS} WHERE username = $1");
        let row: Option<AdminAccountRow> = sqlx::query_as(&query)
            .bind(username)
            .fetch_optional(self.pool)
            .await?;

        row.map(AdminAccountRow::into_account).transpose()
    }

    /// List every account, active or not, ordered by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored permission map is
    /// not a valid capability-to-boolean object.
    pub async fn list(&self) -> Result<Vec<AdminAccount>, RepositoryError> {
        let query = format!("{SELECT_COLUMNS} ORDER BY username");
        let rows: Vec<AdminAccountRow> = sqlx::query_as(&query).fetch_all(self.pool).await?;

        rows.into_iter()
            .map(AdminAccountRow::into_account)
            .collect()
    }

    /// Get an account by ID (the per-request identity lookup).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if the stored permission map is
    /// not a valid capability-to-boolean object.
    pub async fn get_by_id(
        &self,
        id: AdminUserId,
    ) -> Result<Option<AdminAccount>, RepositoryError> {
        let query = format!("{SELECT_COLUMNS} WHERE id = $1");
        let row: Option<AdminAccountRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.map(AdminAccountRow::into_account).transpose()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn test_row(permissions: Option<&str>) -> AdminAccountRow {
        AdminAccountRow {
            id: AdminUserId::new(Uuid::new_v4()),
            username: "dana".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            is_super_admin: false,
            is_active: true,
            permissions: permissions.map(String::from),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_permission_map_parses() {
        let account = test_row(Some(r#"{"orders.write": true, "products.read": false}"#))
            .into_account()
            .expect("valid row");

        assert!(account.permissions.allows("orders.write"));
        assert!(!account.permissions.allows("products.read"));
    }

    #[test]
    fn test_null_permissions_means_empty_set() {
        let account = test_row(None).into_account().expect("valid row");
        assert!(account.permissions.is_empty());
        assert!(!account.permissions.allows("anything"));
    }

    #[test]
    fn test_malformed_permissions_is_data_corruption() {
        let result = test_row(Some("not json")).into_account();
        assert!(matches!(
            result,
            Err(RepositoryError::DataCorruption(_))
        ));
    }
}
