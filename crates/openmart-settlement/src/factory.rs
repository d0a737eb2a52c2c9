//! Collection factory orchestration.
//!
//! `create_collection` is the one write path that brings a collection into
//! existence: ledger instantiation, registration, the one-time initial mint
//! into the marketplace holding account, price-table population, and payout
//! assignment — as a single atomic unit. Only the service role may call it.
//!
//! The collection is registered *before* the initial mint so the
//! marketplace's own receipt validator accepts the inbound tokens; the unit
//! of work makes the internal ordering unobservable on failure.

use chrono::Utc;

use openmart_registry::CollectionRecord;
use openmart_types::{AccountId, CollectionId, MarketEvent, MartError, Result, TokenId};

use crate::market::Marketplace;
use crate::receipt;
use crate::unit_of_work::UnitOfWork;

/// Inputs to [`Marketplace::create_collection`].
///
/// `token_ids`, `initial_amounts`, and `prices` are parallel sequences; the
/// payout address cannot be null by construction.
#[derive(Debug, Clone)]
pub struct CollectionParams {
    /// Human-readable collection name.
    pub name: String,
    /// Metadata locator for the collection.
    pub metadata_uri: String,
    /// Token ids to mint.
    pub token_ids: Vec<TokenId>,
    /// Units of each token id to mint into the holding account.
    pub initial_amounts: Vec<u128>,
    /// Unit price of each token id (0 means "not for sale").
    pub prices: Vec<u128>,
    /// Account entitled to the seller share of proceeds.
    pub payout: AccountId,
}

impl Marketplace {
    /// Create, mint, register, price, and assign payout for a new
    /// collection. Service-only.
    ///
    /// # Errors
    /// - [`MartError::Unauthorized`] for non-service callers
    /// - [`MartError::ArityMismatch`] if the input sequences differ in length
    ///
    /// Either every side effect lands or none do.
    pub fn create_collection(
        &mut self,
        caller: AccountId,
        params: CollectionParams,
    ) -> Result<CollectionId> {
        self.gate.require_service(caller)?;
        if params.token_ids.len() != params.initial_amounts.len()
            || params.token_ids.len() != params.prices.len()
        {
            return Err(MartError::ArityMismatch {
                token_ids: params.token_ids.len(),
                amounts: params.initial_amounts.len(),
                prices: params.prices.len(),
            });
        }

        let uow = UnitOfWork::begin(&self.state);
        match self.build_collection(caller, params) {
            Ok(collection) => {
                uow.commit();
                tracing::info!(service = %caller, %collection, "Collection created");
                Ok(collection)
            }
            Err(err) => {
                uow.rollback(&mut self.state);
                tracing::warn!(service = %caller, error = %err, "Collection creation rolled back");
                Err(err)
            }
        }
    }

    fn build_collection(
        &mut self,
        service: AccountId,
        params: CollectionParams,
    ) -> Result<CollectionId> {
        let sequence = self.state.registry.next_sequence();
        let collection = CollectionId::deterministic(service, sequence);

        self.state.ledgers.create(collection)?;
        self.state.registry.register(CollectionRecord {
            id: collection,
            name: params.name,
            metadata_uri: params.metadata_uri,
            created_at: Utc::now(),
        })?;

        // Initial mint flows into the holding account and is subject to the
        // same inbound validation as any other transfer.
        receipt::validate_inbound(&self.state.registry, collection)?;
        for ((&token_id, &amount), &price) in params
            .token_ids
            .iter()
            .zip(&params.initial_amounts)
            .zip(&params.prices)
        {
            self.state
                .ledgers
                .mint(collection, self.holding, token_id, amount)?;
            self.state.registry.set_price(collection, token_id, price)?;
        }
        self.state.registry.set_payout(collection, params.payout)?;

        self.state.events.push(MarketEvent::CollectionCreated {
            service,
            collection,
            at: Utc::now(),
        });
        Ok(collection)
    }
}
