//! Named-capability permission sets for admin accounts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A mapping from named capability (e.g. `"orders.write"`) to whether the
/// account holds it.
///
/// The set is total over the key domain: a key that was never granted simply
/// evaluates to `false`. Only explicit `true` grants a capability, so a stored
/// `false` and an absent key behave identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashMap<String, bool>);

impl PermissionSet {
    /// Create an empty permission set (no capabilities granted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the named capability is explicitly granted.
    #[must_use]
    pub fn allows(&self, permission: &str) -> bool {
        self.0.get(permission).copied().unwrap_or(false)
    }

    /// Grant or revoke a capability.
    pub fn set(&mut self, permission: impl Into<String>, granted: bool) {
        self.0.insert(permission.into(), granted);
    }

    /// Whether the set contains no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<HashMap<String, bool>> for PermissionSet {
    fn from(map: HashMap<String, bool>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_true_allows() {
        let perms: PermissionSet = [("orders.write", true)].into_iter().collect();
        assert!(perms.allows("orders.write"));
    }

    #[test]
    fn test_explicit_false_denies() {
        let perms: PermissionSet = [("orders.write", false)].into_iter().collect();
        assert!(!perms.allows("orders.write"));
    }

    #[test]
    fn test_absent_key_denies() {
        let perms = PermissionSet::new();
        assert!(!perms.allows("anything.at.all"));
    }

    #[test]
    fn test_set_then_allows() {
        let mut perms = PermissionSet::new();
        perms.set("products.read", true);
        assert!(perms.allows("products.read"));
        perms.set("products.read", false);
        assert!(!perms.allows("products.read"));
    }

    #[test]
    fn test_serde_transparent_map() {
        let perms: PermissionSet = [("a", true), ("b", false)].into_iter().collect();
        let json = serde_json::to_value(&perms).expect("serialize");
        assert_eq!(json["a"], true);
        assert_eq!(json["b"], false);

        let back: PermissionSet = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, perms);
    }
}
