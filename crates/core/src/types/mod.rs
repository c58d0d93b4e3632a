//! Shared type definitions.

pub mod id;
pub mod identity;
pub mod permissions;

pub use id::AdminUserId;
pub use identity::AdminIdentity;
pub use permissions::PermissionSet;
