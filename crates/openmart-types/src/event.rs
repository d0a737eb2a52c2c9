//! Marketplace event log entries.
//!
//! Events are appended to the marketplace's in-process event log as part of
//! the same atomic unit as the state changes they report: a rolled-back call
//! leaves no event behind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, CollectionId, TokenId};

/// A notification emitted by a completed marketplace operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// A collection was created, minted, and registered.
    CollectionCreated {
        service: AccountId,
        collection: CollectionId,
        at: DateTime<Utc>,
    },
    /// A purchase settled: value split executed and tokens released.
    TokenPurchased {
        buyer: AccountId,
        collection: CollectionId,
        token_id: TokenId,
        amount: u128,
        at: DateTime<Utc>,
    },
    /// The owner rotated the service credential.
    ServiceChanged {
        previous: AccountId,
        current: AccountId,
        at: DateTime<Utc>,
    },
}

impl std::fmt::Display for MarketEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CollectionCreated {
                service,
                collection,
                ..
            } => write!(f, "COLLECTION_CREATED {collection} by {service}"),
            Self::TokenPurchased {
                buyer,
                collection,
                token_id,
                amount,
                ..
            } => write!(
                f,
                "TOKEN_PURCHASED {amount} of {collection} token {token_id} by {buyer}"
            ),
            Self::ServiceChanged {
                previous, current, ..
            } => write!(f, "SERVICE_CHANGED {previous} -> {current}"),
        }
    }
}
