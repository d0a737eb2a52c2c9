//! Configuration for a marketplace instance.
//!
//! The fee split and the two reference-behavior policies are explicit,
//! serializable configuration rather than hard-coded constants, so deployments
//! can document the behavior they actually run with.

use serde::{Deserialize, Serialize};

use crate::{MartError, Result, constants};

/// What happens to value paid above the total cost of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverpaymentPolicy {
    /// The excess is kept in the marketplace treasury (reference behavior:
    /// overpayment is not refunded).
    Absorb,
    /// Only the total cost is charged; the excess never leaves the buyer.
    Refund,
}

/// Whether an already-priced token may be re-priced after registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepricePolicy {
    /// The price table accepts overwrites (reference interface behavior).
    Permitted,
    /// Prices are write-once; overwrites fail with `RepriceDisabled`.
    Frozen,
}

/// Configuration for a single marketplace instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Platform share of every purchase, in basis points of the total cost.
    pub platform_fee_bps: u16,
    /// Overpayment handling.
    pub overpayment: OverpaymentPolicy,
    /// Re-pricing policy.
    pub reprice: RepricePolicy,
}

impl MarketConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns [`MartError::InvalidFeeConfig`] if the fee exceeds 100%.
    pub fn validate(&self) -> Result<()> {
        if self.platform_fee_bps > constants::BPS_DENOMINATOR {
            return Err(MartError::InvalidFeeConfig {
                bps: self.platform_fee_bps,
            });
        }
        Ok(())
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            platform_fee_bps: constants::DEFAULT_PLATFORM_FEE_BPS,
            overpayment: OverpaymentPolicy::Absorb,
            reprice: RepricePolicy::Permitted,
        }
    }
}
