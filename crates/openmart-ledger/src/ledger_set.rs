//! Collection → ledger map.
//!
//! The factory instantiates one [`TokenLedger`] per collection; every later
//! operation addresses it by [`CollectionId`]. Lookups on unknown collections
//! fail with [`MartError::UnknownCollection`] rather than creating state.

use std::collections::HashMap;

use openmart_types::{AccountId, CollectionId, MartError, Result, TokenId};

use crate::token_ledger::TokenLedger;

/// All collection ledgers known to the marketplace.
#[derive(Debug, Clone, Default)]
pub struct LedgerSet {
    ledgers: HashMap<CollectionId, TokenLedger>,
}

impl LedgerSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate a fresh ledger for `collection`.
    ///
    /// # Errors
    /// Returns [`MartError::CollectionExists`] if a ledger for this handle
    /// already exists.
    pub fn create(&mut self, collection: CollectionId) -> Result<()> {
        if self.ledgers.contains_key(&collection) {
            return Err(MartError::CollectionExists(collection));
        }
        self.ledgers.insert(collection, TokenLedger::new());
        Ok(())
    }

    /// Whether a ledger exists for `collection`.
    #[must_use]
    pub fn contains(&self, collection: CollectionId) -> bool {
        self.ledgers.contains_key(&collection)
    }

    /// Borrow the ledger for `collection`.
    ///
    /// # Errors
    /// Returns [`MartError::UnknownCollection`] on miss.
    pub fn get(&self, collection: CollectionId) -> Result<&TokenLedger> {
        self.ledgers
            .get(&collection)
            .ok_or(MartError::UnknownCollection(collection))
    }

    /// Mint into a collection's ledger.
    ///
    /// # Errors
    /// Returns [`MartError::UnknownCollection`] on miss.
    pub fn mint(
        &mut self,
        collection: CollectionId,
        to: AccountId,
        token_id: TokenId,
        amount: u128,
    ) -> Result<()> {
        self.ledgers
            .get_mut(&collection)
            .ok_or(MartError::UnknownCollection(collection))?
            .mint(to, token_id, amount);
        Ok(())
    }

    /// Transfer within a collection's ledger.
    ///
    /// # Errors
    /// Returns [`MartError::UnknownCollection`] on miss, or the ledger's own
    /// error on insufficient holdings.
    pub fn transfer(
        &mut self,
        collection: CollectionId,
        from: AccountId,
        to: AccountId,
        token_id: TokenId,
        amount: u128,
    ) -> Result<()> {
        self.ledgers
            .get_mut(&collection)
            .ok_or(MartError::UnknownCollection(collection))?
            .transfer(from, to, token_id, amount)
    }

    /// Balance query, total over all inputs (0 for unknown collections).
    #[must_use]
    pub fn balance(&self, collection: CollectionId, account: AccountId, token_id: TokenId) -> u128 {
        self.ledgers
            .get(&collection)
            .map_or(0, |ledger| ledger.balance(account, token_id))
    }

    /// Iterate over all (collection, ledger) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&CollectionId, &TokenLedger)> {
        self.ledgers.iter()
    }

    /// Number of ledgers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    /// Whether no ledgers exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }
}
