//! System-wide constants for the OpenMart marketplace registry.

/// Basis-point denominator for the fee split (100% = 10_000 bps).
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Default platform fee in basis points (10%).
pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 1_000;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenMart";
