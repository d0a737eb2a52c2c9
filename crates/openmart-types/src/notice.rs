//! Transfer notices delivered to receiver hooks.
//!
//! Whenever settlement moves value or tokens to an account, the recipient's
//! hook (if any) receives one of these notices. The notice is descriptive
//! only — by the time a hook runs, the balances it describes are already
//! applied, and a hook failure unwinds the enclosing call.

use serde::{Deserialize, Serialize};

use crate::{AccountId, CollectionId, TokenId};

/// Why a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    /// The seller's share of a purchase.
    SellerProceeds,
    /// The platform's share of a purchase.
    PlatformFee,
}

/// Notice of a native-currency credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentNotice {
    /// Account the value came from (the marketplace holding account).
    pub from: AccountId,
    /// Account the value was credited to.
    pub to: AccountId,
    /// Units credited.
    pub amount: u128,
    /// What the payment settles.
    pub kind: PaymentKind,
}

/// Notice of a single-token transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReceipt {
    /// Account that initiated the enclosing call.
    pub operator: AccountId,
    /// Sending account.
    pub from: AccountId,
    /// Receiving account.
    pub to: AccountId,
    /// Collection the token belongs to.
    pub collection: CollectionId,
    /// The token id transferred.
    pub token_id: TokenId,
    /// Units transferred.
    pub amount: u128,
}
