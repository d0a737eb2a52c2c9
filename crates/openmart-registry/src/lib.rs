//! # openmart-registry
//!
//! The registry data component and the access gate.
//!
//! ## Architecture
//!
//! - **Registry**: collection records, the per-token price table, and the
//!   seller payout map. Reads are total (`price` returns 0, not an error,
//!   for unknown entries); mutation is reserved to factory/settlement
//!   orchestration by ownership, not by visibility tricks.
//! - **AccessGate**: the owner and service credentials, injected into the
//!   marketplace and testable in isolation.
//!
//! Neither component performs transfers or fee math — that lives in
//! `openmart-settlement`.

pub mod gate;
pub mod registry;

pub use gate::AccessGate;
pub use registry::{CollectionRecord, Registry};
