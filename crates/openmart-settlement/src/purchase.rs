//! Purchase settlement — the atomic value-for-tokens exchange.
//!
//! `purchase` follows checks-effects-interactions:
//! 1. Preconditions, in a fixed order, with no state change on failure
//! 2. Internal bookkeeping (charge the buyer into the holding account)
//! 3. External calls last: value to seller and platform, token release to
//!    the buyer — each of which may run a receiver hook
//!
//! Any failure during or after an external call unwinds the whole call via
//! the unit of work: the value transfers already sent are rolled back as if
//! the call never executed. A hostile hook that re-enters mid-settlement
//! observes internally consistent state (all bookkeeping for this purchase
//! is already final) and cannot cause double payment or double release.

use chrono::Utc;

use openmart_types::{
    AccountId, CollectionId, MarketEvent, MartError, OverpaymentPolicy, PaymentKind,
    PaymentNotice, Result, TokenId, TokenReceipt,
};

use crate::fees::FeeSplit;
use crate::market::Marketplace;
use crate::receiver::ReceiverSet;
use crate::unit_of_work::UnitOfWork;

impl Marketplace {
    /// Buy `amount` units of `token_id` from `collection`, attaching
    /// `paid_value` units of native currency. Callable by anyone.
    ///
    /// # Errors
    /// Preconditions are checked in order; the first failure aborts with no
    /// state change and no value movement:
    /// 1. [`MartError::NoPayment`] — `paid_value` is zero
    /// 2. [`MartError::UnknownCollection`] — collection not registered
    /// 3. [`MartError::NoSeller`] — no payout address on record
    /// 4. [`MartError::NotForSale`] — unit price is zero
    /// 5. [`MartError::InsufficientPayment`] — `paid_value` below total cost
    ///
    /// After the preconditions, any failure (insufficient buyer funds, a
    /// short holding balance, a hook rejection) rolls the whole call back.
    pub fn purchase(
        &mut self,
        receivers: &mut ReceiverSet,
        buyer: AccountId,
        collection: CollectionId,
        token_id: TokenId,
        amount: u128,
        paid_value: u128,
    ) -> Result<()> {
        if paid_value == 0 {
            return Err(MartError::NoPayment);
        }
        if !self.state.registry.is_registered(collection) {
            return Err(MartError::UnknownCollection(collection));
        }
        let seller = self
            .state
            .registry
            .payout(collection)
            .ok_or(MartError::NoSeller(collection))?;
        let unit_price = self.state.registry.price(collection, token_id);
        if unit_price == 0 {
            return Err(MartError::NotForSale {
                collection,
                token_id,
            });
        }
        let total_cost = unit_price
            .checked_mul(amount)
            .ok_or(MartError::ArithmeticOverflow)?;
        if paid_value < total_cost {
            return Err(MartError::InsufficientPayment {
                needed: total_cost,
                paid: paid_value,
            });
        }

        let split = FeeSplit::compute(total_cost, self.config.platform_fee_bps)?;
        // Under Absorb (reference behavior) the buyer is charged the full
        // attached value and the excess stays in the treasury; under Refund
        // only the total cost ever leaves the buyer.
        let charge = match self.config.overpayment {
            OverpaymentPolicy::Absorb => paid_value,
            OverpaymentPolicy::Refund => total_cost,
        };

        let uow = UnitOfWork::begin(&self.state);
        match self.settle(receivers, buyer, seller, collection, token_id, amount, charge, &split) {
            Ok(()) => {
                uow.commit();
                tracing::info!(
                    %buyer,
                    %collection,
                    token_id,
                    amount,
                    total_cost,
                    seller_share = split.seller_share,
                    platform_share = split.platform_share,
                    "Purchase settled"
                );
                Ok(())
            }
            Err(err) => {
                uow.rollback(&mut self.state);
                tracing::warn!(%buyer, %collection, token_id, error = %err, "Purchase rolled back");
                Err(err)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn settle(
        &mut self,
        receivers: &mut ReceiverSet,
        buyer: AccountId,
        seller: AccountId,
        collection: CollectionId,
        token_id: TokenId,
        amount: u128,
        charge: u128,
        split: &FeeSplit,
    ) -> Result<()> {
        // Internal bookkeeping: the attached value moves into the holding
        // account before any external code runs.
        self.state.bank.transfer(buyer, self.holding, charge)?;

        // External calls last.
        self.pay(receivers, seller, split.seller_share, PaymentKind::SellerProceeds)?;
        self.pay(
            receivers,
            self.gate.owner(),
            split.platform_share,
            PaymentKind::PlatformFee,
        )?;

        self.state
            .ledgers
            .transfer(collection, self.holding, buyer, token_id, amount)?;
        let receipt = TokenReceipt {
            operator: buyer,
            from: self.holding,
            to: buyer,
            collection,
            token_id,
            amount,
        };
        receivers.notify_tokens(&mut *self, &receipt)?;

        self.state.events.push(MarketEvent::TokenPurchased {
            buyer,
            collection,
            token_id,
            amount,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Credit native currency and notify the recipient's hook, if any.
    fn pay(
        &mut self,
        receivers: &mut ReceiverSet,
        to: AccountId,
        amount: u128,
        kind: PaymentKind,
    ) -> Result<()> {
        self.state.bank.transfer(self.holding, to, amount)?;
        let notice = PaymentNotice {
            from: self.holding,
            to,
            amount,
            kind,
        };
        receivers.notify_payment(&mut *self, &notice)
    }
}
