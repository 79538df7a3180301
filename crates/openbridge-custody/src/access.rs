//! Admin / manager identity and permission checks.
//!
//! A single admin, set at initialization and transferable only by the
//! current admin, plus a set of managers the admin grants settlement rights
//! to (completion and refund). Every check is a pure predicate consulted
//! before any mutation: check-then-act, so a failed authorization leaves
//! state untouched.

use std::collections::HashSet;

use openbridge_types::{AccountId, BridgeError, Result};

/// Admin and manager registry for privileged transitions.
pub struct AccessControl {
    admin: AccountId,
    managers: HashSet<AccountId>,
}

impl AccessControl {
    /// Create with the initial admin and no managers.
    #[must_use]
    pub fn new(admin: AccountId) -> Self {
        Self {
            admin,
            managers: HashSet::new(),
        }
    }

    #[must_use]
    pub fn is_admin(&self, identity: &AccountId) -> bool {
        self.admin == *identity
    }

    #[must_use]
    pub fn is_manager(&self, identity: &AccountId) -> bool {
        self.managers.contains(identity)
    }

    /// Whether the identity may execute completion/refund transitions.
    #[must_use]
    pub fn can_settle(&self, identity: &AccountId) -> bool {
        self.is_admin(identity) || self.is_manager(identity)
    }

    /// Guard a settlement-privileged operation.
    ///
    /// # Errors
    /// Returns [`BridgeError::Unauthorized`] if the caller is neither admin
    /// nor manager.
    pub fn authorize_settlement(
        &self,
        caller: &AccountId,
        operation: &'static str,
    ) -> Result<()> {
        if self.can_settle(caller) {
            Ok(())
        } else {
            Err(BridgeError::Unauthorized {
                caller: *caller,
                operation,
            })
        }
    }

    fn authorize_admin(&self, caller: &AccountId, operation: &'static str) -> Result<()> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(BridgeError::Unauthorized {
                caller: *caller,
                operation,
            })
        }
    }

    /// Transfer the admin role. Callable only by the current admin.
    pub fn set_admin(&mut self, caller: &AccountId, new_admin: AccountId) -> Result<()> {
        self.authorize_admin(caller, "transfer admin role")?;
        self.admin = new_admin;
        Ok(())
    }

    /// Grant settlement rights. Callable only by the admin.
    pub fn add_manager(&mut self, caller: &AccountId, manager: AccountId) -> Result<()> {
        self.authorize_admin(caller, "add manager")?;
        self.managers.insert(manager);
        Ok(())
    }

    /// Revoke settlement rights. Callable only by the admin.
    pub fn remove_manager(&mut self, caller: &AccountId, manager: &AccountId) -> Result<()> {
        self.authorize_admin(caller, "remove manager")?;
        self.managers.remove(manager);
        Ok(())
    }

    #[must_use]
    pub fn admin(&self) -> AccountId {
        self.admin
    }

    #[must_use]
    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: AccountId = AccountId([1u8; 32]);
    const MANAGER: AccountId = AccountId([2u8; 32]);
    const STRANGER: AccountId = AccountId([9u8; 32]);

    #[test]
    fn admin_can_settle() {
        let ac = AccessControl::new(ADMIN);
        assert!(ac.is_admin(&ADMIN));
        assert!(ac.can_settle(&ADMIN));
        assert!(ac.authorize_settlement(&ADMIN, "refund order").is_ok());
    }

    #[test]
    fn manager_grant_and_revoke() {
        let mut ac = AccessControl::new(ADMIN);
        assert!(!ac.can_settle(&MANAGER));

        ac.add_manager(&ADMIN, MANAGER).unwrap();
        assert!(ac.is_manager(&MANAGER));
        assert!(ac.can_settle(&MANAGER));
        assert_eq!(ac.manager_count(), 1);

        ac.remove_manager(&ADMIN, &MANAGER).unwrap();
        assert!(!ac.can_settle(&MANAGER));
        assert_eq!(ac.manager_count(), 0);
    }

    #[test]
    fn stranger_cannot_settle() {
        let ac = AccessControl::new(ADMIN);
        let err = ac
            .authorize_settlement(&STRANGER, "complete order")
            .unwrap_err();
        assert!(matches!(err, BridgeError::Unauthorized { .. }));
    }

    #[test]
    fn non_admin_cannot_mutate_and_state_unchanged() {
        let mut ac = AccessControl::new(ADMIN);

        assert!(ac.add_manager(&STRANGER, MANAGER).is_err());
        assert_eq!(ac.manager_count(), 0);

        assert!(ac.set_admin(&STRANGER, STRANGER).is_err());
        assert_eq!(ac.admin(), ADMIN);

        ac.add_manager(&ADMIN, MANAGER).unwrap();
        assert!(ac.remove_manager(&MANAGER, &MANAGER).is_err());
        assert!(ac.is_manager(&MANAGER));
    }

    #[test]
    fn admin_transfer_moves_rights() {
        let mut ac = AccessControl::new(ADMIN);
        ac.set_admin(&ADMIN, MANAGER).unwrap();

        assert!(ac.is_admin(&MANAGER));
        assert!(!ac.is_admin(&ADMIN));
        // Old admin keeps nothing.
        assert!(!ac.can_settle(&ADMIN));
        // New admin controls the manager set.
        assert!(ac.add_manager(&MANAGER, STRANGER).is_ok());
        assert!(ac.add_manager(&ADMIN, STRANGER).is_err());
    }
}
