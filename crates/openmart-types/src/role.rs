//! The two flat roles recognized by the access gate.

use serde::{Deserialize, Serialize};

/// Platform-level credential kind.
///
/// OpenMart deliberately has no richer authorization substrate: the *owner*
/// holds platform authority (fee recipient, service rotation) and the
/// *service* is the sole creator of collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Contract owner: receives the platform fee, may rotate the service.
    Owner,
    /// Designated service: the only caller allowed to create collections.
    Service,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owner => write!(f, "OWNER"),
            Self::Service => write!(f, "SERVICE"),
        }
    }
}
