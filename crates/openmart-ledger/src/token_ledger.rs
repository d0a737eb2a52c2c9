//! Per-collection multi-token balance store.
//!
//! One `TokenLedger` holds the (owner, token id) → units balances of a single
//! collection. Minting credits an owner and the per-token supply log;
//! transfers move units between owners without touching supply.

use std::collections::HashMap;

use openmart_types::{AccountId, MartError, Result, TokenId};

/// Balance store for one collection's token ids.
#[derive(Debug, Clone, Default)]
pub struct TokenLedger {
    /// Per-(owner, token id) balances.
    balances: HashMap<(AccountId, TokenId), u128>,
    /// Units minted per token id since creation.
    minted: HashMap<TokenId, u128>,
}

impl TokenLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint `amount` units of `token_id` to `to`.
    ///
    /// Minting is unconditional at this layer; who may mint is the
    /// marketplace's concern, not the ledger's.
    pub fn mint(&mut self, to: AccountId, token_id: TokenId, amount: u128) {
        *self.balances.entry((to, token_id)).or_default() += amount;
        *self.minted.entry(token_id).or_default() += amount;
    }

    /// Move `amount` units of `token_id` from `from` to `to`.
    ///
    /// A self-transfer is a no-op.
    ///
    /// # Errors
    /// Returns [`MartError::InsufficientTokens`] if `from` holds fewer than
    /// `amount` units; no balance changes on failure.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        token_id: TokenId,
        amount: u128,
    ) -> Result<()> {
        let held = self.balances.entry((from, token_id)).or_default();
        if *held < amount {
            return Err(MartError::InsufficientTokens {
                needed: amount,
                held: *held,
            });
        }
        if from == to {
            return Ok(());
        }
        *held -= amount;
        *self.balances.entry((to, token_id)).or_default() += amount;
        Ok(())
    }

    /// Units of `token_id` held by `account` (0 for unknown pairs).
    #[must_use]
    pub fn balance(&self, account: AccountId, token_id: TokenId) -> u128 {
        self.balances
            .get(&(account, token_id))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all live balances of `token_id`.
    #[must_use]
    pub fn token_supply(&self, token_id: TokenId) -> u128 {
        self.balances
            .iter()
            .filter(|((_, t), _)| *t == token_id)
            .map(|(_, units)| units)
            .sum()
    }

    /// Units of `token_id` minted since creation.
    #[must_use]
    pub fn minted(&self, token_id: TokenId) -> u128 {
        self.minted.get(&token_id).copied().unwrap_or(0)
    }

    /// All token ids that have ever been minted.
    #[must_use]
    pub fn token_ids(&self) -> Vec<TokenId> {
        let mut ids: Vec<TokenId> = self.minted.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Verify that live balances of `token_id` match the mint log.
    ///
    /// There is no burn operation, so the live supply must equal the minted
    /// total at all times.
    ///
    /// # Errors
    /// Returns [`MartError::ConservationViolation`] if actual ≠ minted.
    pub fn verify_conservation(&self, token_id: TokenId) -> Result<()> {
        let actual = self.token_supply(token_id);
        let expected = self.minted(token_id);
        if actual != expected {
            return Err(MartError::ConservationViolation {
                reason: format!("token {token_id} supply {actual} != minted {expected}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_credits_owner_and_supply() {
        let mut ledger = TokenLedger::new();
        let owner = AccountId::new();
        ledger.mint(owner, 1, 100);
        assert_eq!(ledger.balance(owner, 1), 100);
        assert_eq!(ledger.minted(1), 100);
        assert_eq!(ledger.token_supply(1), 100);
        assert!(ledger.verify_conservation(1).is_ok());
    }

    #[test]
    fn transfer_moves_units() {
        let mut ledger = TokenLedger::new();
        let a = AccountId::new();
        let b = AccountId::new();
        ledger.mint(a, 1, 100);
        ledger.transfer(a, b, 1, 10).unwrap();
        assert_eq!(ledger.balance(a, 1), 90);
        assert_eq!(ledger.balance(b, 1), 10);
        assert!(ledger.verify_conservation(1).is_ok());
    }

    #[test]
    fn transfer_insufficient_fails_cleanly() {
        let mut ledger = TokenLedger::new();
        let a = AccountId::new();
        let b = AccountId::new();
        ledger.mint(a, 1, 5);
        let err = ledger.transfer(a, b, 1, 6).unwrap_err();
        assert!(matches!(
            err,
            MartError::InsufficientTokens { needed: 6, held: 5 }
        ));
        assert_eq!(ledger.balance(a, 1), 5);
        assert_eq!(ledger.balance(b, 1), 0);
    }

    #[test]
    fn token_ids_are_independent() {
        let mut ledger = TokenLedger::new();
        let a = AccountId::new();
        ledger.mint(a, 1, 10);
        ledger.mint(a, 2, 20);
        assert_eq!(ledger.balance(a, 1), 10);
        assert_eq!(ledger.balance(a, 2), 20);
        assert_eq!(ledger.token_ids(), vec![1, 2]);
    }

    #[test]
    fn repeated_mint_accumulates() {
        let mut ledger = TokenLedger::new();
        let a = AccountId::new();
        ledger.mint(a, 7, 3);
        ledger.mint(a, 7, 4);
        assert_eq!(ledger.balance(a, 7), 7);
        assert_eq!(ledger.minted(7), 7);
    }

    #[test]
    fn self_transfer_is_noop() {
        let mut ledger = TokenLedger::new();
        let a = AccountId::new();
        ledger.mint(a, 1, 10);
        ledger.transfer(a, a, 1, 10).unwrap();
        assert_eq!(ledger.balance(a, 1), 10);
    }
}
