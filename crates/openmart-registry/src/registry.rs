//! Authoritative registry of sellable collections.
//!
//! Three maps keyed by collection handle: the registration record (created
//! once, never mutated, never deleted), the per-token price table, and the
//! seller payout address. Pure data — no fee math, no transfers, no role
//! checks. Mutators are `pub` on the type, but the marketplace aggregate
//! owns the only live `Registry` and never hands out `&mut`, so external
//! actors reach mutation exclusively through factory/settlement
//! orchestration.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use openmart_types::{AccountId, CollectionId, MartError, Result, TokenId};

/// Immutable registration record of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    /// The collection handle.
    pub id: CollectionId,
    /// Human-readable name, as supplied to the factory.
    pub name: String,
    /// Metadata locator, as supplied to the factory.
    pub metadata_uri: String,
    /// When the collection was registered.
    pub created_at: DateTime<Utc>,
}

/// The registry: records, price table, payout map, and the creation sequence
/// used for deterministic collection handles.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: HashMap<CollectionId, CollectionRecord>,
    prices: HashMap<(CollectionId, TokenId), u128>,
    payouts: HashMap<CollectionId, AccountId>,
    sequence: u64,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next creation sequence number.
    pub fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }

    /// Record a collection. Records are write-once.
    ///
    /// # Errors
    /// Returns [`MartError::CollectionExists`] if the handle is taken.
    pub fn register(&mut self, record: CollectionRecord) -> Result<()> {
        if self.records.contains_key(&record.id) {
            return Err(MartError::CollectionExists(record.id));
        }
        self.records.insert(record.id, record);
        Ok(())
    }

    /// Whether a collection is registered.
    #[must_use]
    pub fn is_registered(&self, collection: CollectionId) -> bool {
        self.records.contains_key(&collection)
    }

    /// The registration record, if any.
    #[must_use]
    pub fn record(&self, collection: CollectionId) -> Option<&CollectionRecord> {
        self.records.get(&collection)
    }

    /// Set the unit price of a token lot. Overwrites at this layer; whether
    /// an overwrite is *permitted* is marketplace policy, enforced upstream.
    ///
    /// # Errors
    /// Returns [`MartError::UnknownCollection`] for unregistered collections.
    pub fn set_price(
        &mut self,
        collection: CollectionId,
        token_id: TokenId,
        price: u128,
    ) -> Result<()> {
        if !self.is_registered(collection) {
            return Err(MartError::UnknownCollection(collection));
        }
        self.prices.insert((collection, token_id), price);
        Ok(())
    }

    /// Unit price of a token lot. Total over all inputs: unknown entries
    /// read as 0, and 0 means "not for sale".
    #[must_use]
    pub fn price(&self, collection: CollectionId, token_id: TokenId) -> u128 {
        self.prices
            .get(&(collection, token_id))
            .copied()
            .unwrap_or(0)
    }

    /// Set the seller payout address for a collection.
    ///
    /// # Errors
    /// Returns [`MartError::UnknownCollection`] for unregistered collections.
    pub fn set_payout(&mut self, collection: CollectionId, payout: AccountId) -> Result<()> {
        if !self.is_registered(collection) {
            return Err(MartError::UnknownCollection(collection));
        }
        self.payouts.insert(collection, payout);
        Ok(())
    }

    /// The seller payout address, if set.
    #[must_use]
    pub fn payout(&self, collection: CollectionId) -> Option<AccountId> {
        self.payouts.get(&collection).copied()
    }

    /// Number of registered collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no collections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
