//! Access gate — the two flat roles.
//!
//! ## Design Principles
//!
//! - **Injected, not global**: the gate is a value owned by the marketplace,
//!   so business logic is testable against any pair of credentials
//! - **Always staffed**: both roles are set at construction and a rotation
//!   replaces, never clears — there is no state with an unset role
//! - **Full revocation**: rotating the service revokes the old credential
//!   immediately; there is no grace period and no multi-service support

use openmart_types::{AccountId, MartError, Result, Role};

/// Holds the owner and service credentials and answers role predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    owner: AccountId,
    service: AccountId,
}

impl AccessGate {
    /// Create a gate with both roles set.
    #[must_use]
    pub fn new(owner: AccountId, service: AccountId) -> Self {
        Self { owner, service }
    }

    /// Whether `caller` holds the owner role.
    #[must_use]
    pub fn is_owner(&self, caller: AccountId) -> bool {
        caller == self.owner
    }

    /// Whether `caller` holds the service role.
    #[must_use]
    pub fn is_service(&self, caller: AccountId) -> bool {
        caller == self.service
    }

    /// Require the owner role.
    ///
    /// # Errors
    /// Returns [`MartError::Unauthorized`] for any other caller.
    pub fn require_owner(&self, caller: AccountId) -> Result<()> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            Err(MartError::Unauthorized {
                required: Role::Owner,
            })
        }
    }

    /// Require the service role.
    ///
    /// # Errors
    /// Returns [`MartError::Unauthorized`] for any other caller.
    pub fn require_service(&self, caller: AccountId) -> Result<()> {
        if self.is_service(caller) {
            Ok(())
        } else {
            Err(MartError::Unauthorized {
                required: Role::Service,
            })
        }
    }

    /// Rotate the service credential. Owner-only.
    ///
    /// Returns the revoked credential on success.
    ///
    /// # Errors
    /// Returns [`MartError::Unauthorized`] if `caller` is not the owner.
    pub fn set_service(&mut self, caller: AccountId, new_service: AccountId) -> Result<AccountId> {
        self.require_owner(caller)?;
        let previous = self.service;
        self.service = new_service;
        Ok(previous)
    }

    /// The owner credential.
    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// The current service credential.
    #[must_use]
    pub fn service(&self) -> AccountId {
        self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (AccessGate, AccountId, AccountId) {
        let owner = AccountId::new();
        let service = AccountId::new();
        (AccessGate::new(owner, service), owner, service)
    }

    #[test]
    fn predicates_match_construction() {
        let (gate, owner, service) = setup();
        assert!(gate.is_owner(owner));
        assert!(gate.is_service(service));
        assert!(!gate.is_owner(service));
        assert!(!gate.is_service(owner));
    }

    #[test]
    fn require_service_rejects_others() {
        let (gate, owner, _) = setup();
        let err = gate.require_service(owner).unwrap_err();
        assert!(matches!(
            err,
            MartError::Unauthorized {
                required: Role::Service
            }
        ));
    }

    #[test]
    fn owner_rotates_service() {
        let (mut gate, owner, old_service) = setup();
        let new_service = AccountId::new();
        let revoked = gate.set_service(owner, new_service).unwrap();
        assert_eq!(revoked, old_service);
        assert!(gate.is_service(new_service));
        // Old credential is fully revoked, no grace period.
        assert!(!gate.is_service(old_service));
    }

    #[test]
    fn non_owner_cannot_rotate_service() {
        let (mut gate, _, service) = setup();
        let err = gate.set_service(service, AccountId::new()).unwrap_err();
        assert!(matches!(
            err,
            MartError::Unauthorized {
                required: Role::Owner
            }
        ));
        // Gate unchanged.
        assert!(gate.is_service(service));
    }

    #[test]
    fn owner_may_appoint_itself_service() {
        let (mut gate, owner, _) = setup();
        gate.set_service(owner, owner).unwrap();
        assert!(gate.is_owner(owner));
        assert!(gate.is_service(owner));
    }
}
