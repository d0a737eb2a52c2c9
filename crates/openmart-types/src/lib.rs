//! # openmart-types
//!
//! Shared types, errors, and configuration for the **OpenMart** marketplace
//! registry.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`CollectionId`], [`TokenId`]
//! - **Roles**: [`Role`]
//! - **Events**: [`MarketEvent`]
//! - **Transfer notices**: [`PaymentNotice`], [`TokenReceipt`]
//! - **Configuration**: [`MarketConfig`], [`OverpaymentPolicy`], [`RepricePolicy`]
//! - **Errors**: [`MartError`] with `MART_ERR_` prefix codes
//! - **Constants**: fee denominator and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod notice;
pub mod role;

// Re-export all primary types at crate root for ergonomic imports:
//   use openmart_types::{AccountId, CollectionId, MartError, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use notice::*;
pub use role::*;

// Constants are accessed via `openmart_types::constants::FOO`
// (not re-exported to avoid name collisions).
