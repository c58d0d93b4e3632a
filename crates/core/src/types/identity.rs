//! The authenticated administrator identity.

use serde::{Deserialize, Serialize};

use crate::types::id::AdminUserId;
use crate::types::permissions::PermissionSet;

/// An authenticated administrator, valid for the duration of one request.
///
/// Constructed by verifying a session token and attaching the permission set
/// from the backing account record. Never persisted; the account store owns
/// the durable record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: AdminUserId,
    pub username: String,
    /// Super admins pass every permission check regardless of the explicit set.
    pub is_super_admin: bool,
    /// Deactivated accounts keep their record but may not authenticate.
    pub is_active: bool,
    pub permissions: PermissionSet,
}

impl AdminIdentity {
    /// Authorization decision for one named capability.
    ///
    /// Pure and total: super admins are always allowed, everyone else is
    /// allowed only when the permission set explicitly grants the key.
    /// Unknown keys evaluate to `false`.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.is_super_admin || self.permissions.allows(permission)
    }
}
