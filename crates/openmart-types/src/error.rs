//! Error types for the OpenMart marketplace registry.
//!
//! All errors use the `MART_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Access errors
//! - 2xx: Factory errors
//! - 3xx: Registry errors
//! - 4xx: Payment errors
//! - 5xx: Token ledger errors
//! - 6xx: Receipt validation errors
//! - 7xx: Configuration / invariant errors
//!
//! Every error is a precondition failure detected before any side effect, or
//! a failure that causes the enclosing call to roll back to zero state
//! change. There is no internal retry; retry is the caller's responsibility.

use thiserror::Error;

use crate::{CollectionId, Role, TokenId};

/// Central error enum for all OpenMart operations.
#[derive(Debug, Error)]
pub enum MartError {
    // =================================================================
    // Access Errors (1xx)
    // =================================================================
    /// The caller does not hold the role the operation requires.
    #[error("MART_ERR_100: Unauthorized: {required} role required")]
    Unauthorized { required: Role },

    // =================================================================
    // Factory Errors (2xx)
    // =================================================================
    /// The factory input sequences are not all the same length.
    #[error(
        "MART_ERR_200: Arity mismatch: {token_ids} token ids, {amounts} amounts, {prices} prices"
    )]
    ArityMismatch {
        token_ids: usize,
        amounts: usize,
        prices: usize,
    },

    /// A collection with this handle is already registered.
    #[error("MART_ERR_201: Collection already exists: {0}")]
    CollectionExists(CollectionId),

    // =================================================================
    // Registry Errors (3xx)
    // =================================================================
    /// The collection is not in the registry.
    #[error("MART_ERR_300: Unknown collection: {0}")]
    UnknownCollection(CollectionId),

    /// The token has no positive price (0 means "not for sale").
    #[error("MART_ERR_301: Not for sale: {collection} token {token_id}")]
    NotForSale {
        collection: CollectionId,
        token_id: TokenId,
    },

    /// The collection has no payout address on record.
    #[error("MART_ERR_302: No seller payout recorded for {0}")]
    NoSeller(CollectionId),

    /// Re-pricing is disabled by market policy.
    #[error("MART_ERR_303: Re-pricing disabled by policy")]
    RepriceDisabled,

    // =================================================================
    // Payment Errors (4xx)
    // =================================================================
    /// No value was attached to the purchase call.
    #[error("MART_ERR_400: No payment attached")]
    NoPayment,

    /// The attached value does not cover the total cost.
    #[error("MART_ERR_401: Insufficient payment: need {needed}, paid {paid}")]
    InsufficientPayment { needed: u128, paid: u128 },

    /// The payer's bank balance cannot cover the attached value.
    #[error("MART_ERR_402: Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u128, available: u128 },

    /// Cost computation overflowed the money type.
    #[error("MART_ERR_403: Arithmetic overflow computing total cost")]
    ArithmeticOverflow,

    // =================================================================
    // Token Ledger Errors (5xx)
    // =================================================================
    /// The sending account does not hold enough of the token.
    #[error("MART_ERR_500: Insufficient tokens: need {needed}, hold {held}")]
    InsufficientTokens { needed: u128, held: u128 },

    // =================================================================
    // Receipt Validation Errors (6xx)
    // =================================================================
    /// An inbound token transfer came from a collection the registry does
    /// not recognize.
    #[error("MART_ERR_600: Unrecognized sending collection: {0}")]
    UnrecognizedSender(CollectionId),

    /// A receiver hook refused the transfer.
    #[error("MART_ERR_601: Transfer rejected by recipient: {reason}")]
    TransferRejected { reason: String },

    // =================================================================
    // Configuration / Invariant Errors (7xx)
    // =================================================================
    /// The fee configuration is out of range.
    #[error("MART_ERR_700: Invalid fee configuration: {bps} bps exceeds denominator")]
    InvalidFeeConfig { bps: u16 },

    /// Supply conservation invariant violated — critical safety alert.
    #[error("MART_ERR_701: Conservation violation: {reason}")]
    ConservationViolation { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, MartError>;
