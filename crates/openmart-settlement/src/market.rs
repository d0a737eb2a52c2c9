//! The marketplace aggregate.
//!
//! `Marketplace` owns every piece of mutable state — registry, bank, token
//! ledgers, event log — plus the injected access gate and configuration. All
//! public operations run one at a time to completion; the only way external
//! code runs mid-call is through receiver hooks, and those execute strictly
//! after internal state is consistent with the call's intended outcome.

use chrono::Utc;

use openmart_ledger::{Bank, LedgerSet};
use openmart_registry::{AccessGate, CollectionRecord, Registry};
use openmart_types::{
    AccountId, CollectionId, MarketConfig, MarketEvent, MartError, RepricePolicy, Result, TokenId,
};

/// The mutable state covered by the unit-of-work snapshot.
///
/// The event log lives here so a rolled-back call leaves no event behind.
#[derive(Debug, Clone, Default)]
pub(crate) struct MarketState {
    pub(crate) registry: Registry,
    pub(crate) bank: Bank,
    pub(crate) ledgers: LedgerSet,
    pub(crate) events: Vec<MarketEvent>,
}

/// Marketplace registry with escrowed settlement.
///
/// Construction wires in the two credentials — owner and service are both
/// always set — and allocates the holding account that escrows minted tokens
/// and absorbs treasury value.
pub struct Marketplace {
    pub(crate) state: MarketState,
    pub(crate) gate: AccessGate,
    pub(crate) config: MarketConfig,
    pub(crate) holding: AccountId,
}

impl Marketplace {
    /// Create a marketplace with the default (reference-behavior) config.
    #[must_use]
    pub fn new(owner: AccountId, service: AccountId) -> Self {
        Self::with_config(owner, service, MarketConfig::default())
            .expect("default config is valid")
    }

    /// Create a marketplace with an explicit configuration.
    ///
    /// # Errors
    /// Returns [`MartError::InvalidFeeConfig`] if the fee exceeds 100%.
    pub fn with_config(
        owner: AccountId,
        service: AccountId,
        config: MarketConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: MarketState::default(),
            gate: AccessGate::new(owner, service),
            config,
            holding: AccountId::new(),
        })
    }

    // -----------------------------------------------------------------
    // Admin
    // -----------------------------------------------------------------

    /// Rotate the service credential. Owner-only; the old service is fully
    /// revoked the moment this returns.
    ///
    /// # Errors
    /// Returns [`MartError::Unauthorized`] if `caller` is not the owner.
    pub fn set_service_address(&mut self, caller: AccountId, new_service: AccountId) -> Result<()> {
        let previous = self.gate.set_service(caller, new_service)?;
        self.state.events.push(MarketEvent::ServiceChanged {
            previous,
            current: new_service,
            at: Utc::now(),
        });
        tracing::info!(%previous, current = %new_service, "Service credential rotated");
        Ok(())
    }

    /// Overwrite the unit price of a token lot. Service-only, subject to the
    /// configured [`RepricePolicy`].
    ///
    /// # Errors
    /// - [`MartError::Unauthorized`] for non-service callers
    /// - [`MartError::UnknownCollection`] for unregistered collections
    /// - [`MartError::RepriceDisabled`] when the policy is `Frozen` and the
    ///   token already carries a positive price
    pub fn reprice(
        &mut self,
        caller: AccountId,
        collection: CollectionId,
        token_id: TokenId,
        price: u128,
    ) -> Result<()> {
        self.gate.require_service(caller)?;
        if !self.state.registry.is_registered(collection) {
            return Err(MartError::UnknownCollection(collection));
        }
        if self.config.reprice == RepricePolicy::Frozen
            && self.state.registry.price(collection, token_id) != 0
        {
            return Err(MartError::RepriceDisabled);
        }
        self.state.registry.set_price(collection, token_id, price)
    }

    // -----------------------------------------------------------------
    // Funding surface for the in-process bank
    // -----------------------------------------------------------------

    /// Deposit native currency into an account.
    pub fn deposit(&mut self, account: AccountId, amount: u128) {
        self.state.bank.deposit(account, amount);
    }

    /// Withdraw native currency from an account.
    ///
    /// # Errors
    /// Returns [`MartError::InsufficientFunds`] if the balance cannot cover
    /// the withdrawal.
    pub fn withdraw(&mut self, account: AccountId, amount: u128) -> Result<()> {
        self.state.bank.withdraw(account, amount)
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    /// Unit price of a token lot (0 means "unavailable for sale").
    #[must_use]
    pub fn price(&self, collection: CollectionId, token_id: TokenId) -> u128 {
        self.state.registry.price(collection, token_id)
    }

    /// Whether a collection is registered.
    #[must_use]
    pub fn is_registered(&self, collection: CollectionId) -> bool {
        self.state.registry.is_registered(collection)
    }

    /// The seller payout address of a collection, if set.
    #[must_use]
    pub fn payout_of(&self, collection: CollectionId) -> Option<AccountId> {
        self.state.registry.payout(collection)
    }

    /// The registration record of a collection, if any.
    #[must_use]
    pub fn collection_record(&self, collection: CollectionId) -> Option<&CollectionRecord> {
        self.state.registry.record(collection)
    }

    /// Native-currency balance of an account.
    #[must_use]
    pub fn bank_balance(&self, account: AccountId) -> u128 {
        self.state.bank.balance(account)
    }

    /// Token balance (0 for unknown collections or pairs).
    #[must_use]
    pub fn token_balance(
        &self,
        collection: CollectionId,
        account: AccountId,
        token_id: TokenId,
    ) -> u128 {
        self.state.ledgers.balance(collection, account, token_id)
    }

    /// The marketplace's own holding account (escrow + treasury).
    #[must_use]
    pub fn holding_account(&self) -> AccountId {
        self.holding
    }

    /// The contract owner (platform fee recipient).
    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.gate.owner()
    }

    /// The current service credential.
    #[must_use]
    pub fn service(&self) -> AccountId {
        self.gate.service()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// All events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[MarketEvent] {
        &self.state.events
    }

    /// Verify value and token conservation across the whole marketplace.
    ///
    /// # Errors
    /// Returns [`MartError::ConservationViolation`] if any supply diverges
    /// from its deposit/mint log.
    pub fn verify_conservation(&self) -> Result<()> {
        self.state.bank.verify_conservation()?;
        for (_, ledger) in self.state.ledgers.iter() {
            for token_id in ledger.token_ids() {
                ledger.verify_conservation(token_id)?;
            }
        }
        Ok(())
    }
}
