//! Inbound receipt validation.
//!
//! The marketplace holding account accepts tokens only from collections the
//! registry recognizes. Anything else fails with `UnrecognizedSender` before
//! any state is touched, so unrelated transfers can neither be silently
//! absorbed nor spoof settlement bookkeeping.

use openmart_registry::Registry;
use openmart_types::{AccountId, CollectionId, MartError, Result, TokenId};

use crate::market::Marketplace;
use crate::unit_of_work::UnitOfWork;

/// Accept an inbound transfer only from a registered collection.
pub(crate) fn validate_inbound(registry: &Registry, collection: CollectionId) -> Result<()> {
    if registry.is_registered(collection) {
        Ok(())
    } else {
        Err(MartError::UnrecognizedSender(collection))
    }
}

impl Marketplace {
    /// Inbound hook for a single token transfer into the holding account.
    ///
    /// # Errors
    /// - [`MartError::UnrecognizedSender`] if the collection is unregistered
    /// - [`MartError::InsufficientTokens`] if `from` does not hold enough
    pub fn receive_tokens(
        &mut self,
        from: AccountId,
        collection: CollectionId,
        token_id: TokenId,
        amount: u128,
    ) -> Result<()> {
        validate_inbound(&self.state.registry, collection)?;
        self.state
            .ledgers
            .transfer(collection, from, self.holding, token_id, amount)?;
        tracing::debug!(%from, %collection, token_id, amount, "Inbound tokens accepted");
        Ok(())
    }

    /// Inbound hook for a batch token transfer into the holding account.
    ///
    /// The batch is atomic: if any leg fails, none of the batch lands.
    ///
    /// # Errors
    /// - [`MartError::UnrecognizedSender`] if the collection is unregistered
    /// - [`MartError::InsufficientTokens`] if any leg is short
    pub fn receive_token_batch(
        &mut self,
        from: AccountId,
        collection: CollectionId,
        transfers: &[(TokenId, u128)],
    ) -> Result<()> {
        validate_inbound(&self.state.registry, collection)?;

        let uow = UnitOfWork::begin(&self.state);
        for &(token_id, amount) in transfers {
            if let Err(err) =
                self.state
                    .ledgers
                    .transfer(collection, from, self.holding, token_id, amount)
            {
                uow.rollback(&mut self.state);
                tracing::warn!(%from, %collection, error = %err, "Inbound batch rolled back");
                return Err(err);
            }
        }
        uow.commit();
        tracing::debug!(%from, %collection, legs = transfers.len(), "Inbound batch accepted");
        Ok(())
    }
}
