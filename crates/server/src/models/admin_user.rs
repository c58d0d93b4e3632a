//! Administrator account records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shuk_core::{AdminIdentity, AdminUserId, PermissionSet};

/// An administrator account as stored in the account store.
///
/// This is the durable record behind [`AdminIdentity`]: the login flow reads
/// it to check credentials, and the auth extractors read it on every request
/// to attach the current `is_active` flag and permission set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    pub id: AdminUserId,
    pub username: String,
    /// Argon2 PHC-format password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_super_admin: bool,
    pub is_active: bool,
    pub permissions: PermissionSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdminAccount {
    /// Project this record into a request-scoped identity.
    #[must_use]
    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            id: self.id,
            username: self.username.clone(),
            is_super_admin: self.is_super_admin,
            is_active: self.is_active,
            permissions: self.permissions.clone(),
        }
    }
}
