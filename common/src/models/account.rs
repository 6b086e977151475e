use std::collections::BTreeSet;

/// Anything that can be asked about its activity and permissions.
pub trait User {
    fn is_active(&self) -> bool;
    fn has_permission(&self, permission: &str) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub is_active: bool,
    pub permissions: BTreeSet<String>,
}

impl Account {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
            permissions: BTreeSet::new(),
        }
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.insert(permission.into());
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl User for Account {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_active_without_permissions() {
        let account = Account::new(1, "ada");
        assert!(account.is_active());
        assert!(account.permissions.is_empty());
    }

    #[test]
    fn test_with_permission() {
        let account = Account::new(1, "ada").with_permission("access_resource");
        assert!(account.has_permission("access_resource"));
        assert!(!account.has_permission("delete_users"));
    }

    #[test]
    fn test_deactivated() {
        let account = Account::new(7, "bob").deactivated();
        assert!(!account.is_active());
    }
}
