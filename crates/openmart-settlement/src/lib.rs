//! # openmart-settlement
//!
//! **Settlement plane**: the marketplace aggregate — factory orchestration,
//! escrowed purchase settlement, and receipt validation.
//!
//! ## Architecture
//!
//! The [`Marketplace`] owns the registry, the bank, and the collection
//! ledgers, and executes one call at a time:
//! 1. **Factory** ([`Marketplace::create_collection`]): service-only; mints
//!    initial supply into the holding account, registers the collection,
//!    populates the price table, assigns the payout address — atomically
//! 2. **Settlement** ([`Marketplace::purchase`]): validates registration,
//!    price, and payment; splits value between seller and platform; releases
//!    tokens to the buyer — all-or-nothing
//! 3. **Receipt validation** ([`Marketplace::receive_tokens`]): inbound
//!    transfers are accepted only from registered collections
//!
//! ## Call Flow
//!
//! ```text
//! buyer → purchase() → preconditions → charge buyer → pay seller/platform
//!       → release tokens → notify hooks → commit (or roll back everything)
//! ```
//!
//! The only way external code runs mid-call is through [`Receiver`] hooks,
//! which execute strictly after internal bookkeeping is final. Every hook
//! failure unwinds the enclosing call through the unit-of-work snapshot.

pub mod factory;
pub mod fees;
pub mod market;
pub mod purchase;
pub mod receipt;
pub mod receiver;

mod unit_of_work;

pub use factory::CollectionParams;
pub use fees::FeeSplit;
pub use market::Marketplace;
pub use receiver::{Receiver, ReceiverSet};
