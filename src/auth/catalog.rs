//! Resource Catalog
//! Mission: Static role → resource-list mapping, read-only after startup

use std::collections::BTreeMap;

/// Fixed mapping from role name to an ordered list of resource labels.
///
/// Unrecognized roles resolve to an empty list, never an error.
pub struct ResourceCatalog {
    entries: BTreeMap<String, Vec<String>>,
}

impl ResourceCatalog {
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Resources visible to `role`, in catalog order. Empty for unknown roles.
    pub fn resources(&self, role: &str) -> &[String] {
        self.entries.get(role).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "admin".to_string(),
            vec![
                "Dashboard Admin".to_string(),
                "User Management".to_string(),
                "System Settings".to_string(),
                "Reports".to_string(),
            ],
        );
        entries.insert(
            "user".to_string(),
            vec![
                "User Dashboard".to_string(),
                "My Profile".to_string(),
                "Documents".to_string(),
            ],
        );
        entries.insert("guest".to_string(), vec!["Public View".to_string()]);
        Self::new(entries)
    }
}
