//! Receiver hooks — the reentrancy surface.
//!
//! A recipient of value or tokens may run arbitrary logic when credited,
//! including calling back into the marketplace. Hooks are stored *outside*
//! the marketplace in a [`ReceiverSet`]; dispatch temporarily removes the
//! hook being called (take-call-replace), which hands the hook `&mut` access
//! to both the marketplace and the remaining receivers. A receiver is
//! therefore never re-notified while one of its own callbacks is on the
//! stack, which bounds recursion.
//!
//! A hook returning an error fails the transfer it was notified about, and
//! the enclosing call's unit of work unwinds every prior effect.

use std::collections::HashMap;

use openmart_types::{AccountId, PaymentNotice, Result, TokenReceipt};

use crate::market::Marketplace;

/// Callbacks run when an account is credited. All default to accepting.
pub trait Receiver {
    /// Native currency was credited to this account.
    fn on_payment(
        &mut self,
        market: &mut Marketplace,
        receivers: &mut ReceiverSet,
        notice: &PaymentNotice,
    ) -> Result<()> {
        let _ = (market, receivers, notice);
        Ok(())
    }

    /// Tokens were credited to this account.
    fn on_tokens(
        &mut self,
        market: &mut Marketplace,
        receivers: &mut ReceiverSet,
        receipt: &TokenReceipt,
    ) -> Result<()> {
        let _ = (market, receivers, receipt);
        Ok(())
    }
}

/// Account → hook map, owned by the caller and passed into settlement calls.
#[derive(Default)]
pub struct ReceiverSet {
    hooks: HashMap<AccountId, Box<dyn Receiver>>,
}

impl ReceiverSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a hook to an account, replacing any existing one.
    pub fn register(&mut self, account: AccountId, hook: Box<dyn Receiver>) {
        self.hooks.insert(account, hook);
    }

    /// Detach and return the hook for an account.
    pub fn remove(&mut self, account: AccountId) -> Option<Box<dyn Receiver>> {
        self.hooks.remove(&account)
    }

    /// Whether an account has a hook attached.
    #[must_use]
    pub fn contains(&self, account: AccountId) -> bool {
        self.hooks.contains_key(&account)
    }

    pub(crate) fn notify_payment(
        &mut self,
        market: &mut Marketplace,
        notice: &PaymentNotice,
    ) -> Result<()> {
        self.dispatch(notice.to, market, |hook, market, receivers| {
            hook.on_payment(market, receivers, notice)
        })
    }

    pub(crate) fn notify_tokens(
        &mut self,
        market: &mut Marketplace,
        receipt: &TokenReceipt,
    ) -> Result<()> {
        self.dispatch(receipt.to, market, |hook, market, receivers| {
            hook.on_tokens(market, receivers, receipt)
        })
    }

    /// Take-call-replace dispatch: the hook runs with itself removed from
    /// the set, then is reinstated regardless of outcome.
    fn dispatch<F>(&mut self, account: AccountId, market: &mut Marketplace, call: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Receiver, &mut Marketplace, &mut ReceiverSet) -> Result<()>,
    {
        let Some(mut hook) = self.hooks.remove(&account) else {
            return Ok(());
        };
        let result = call(hook.as_mut(), market, self);
        self.hooks.insert(account, hook);
        result
    }
}
