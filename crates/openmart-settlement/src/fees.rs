//! Fee split computation.
//!
//! The platform share is expressed in basis points of the total cost. The
//! seller share is floored, and the remainder — at most a few smallest units
//! — goes to the platform, so `seller_share + platform_share == total`
//! exactly, always.

use openmart_types::{MartError, Result, constants};

/// The two shares of a purchase's total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    /// Value owed to the seller payout address.
    pub seller_share: u128,
    /// Value owed to the contract owner.
    pub platform_share: u128,
}

impl FeeSplit {
    /// Split `total` according to `platform_fee_bps`.
    ///
    /// `seller_share = ⌊total · (10_000 − fee_bps) / 10_000⌋`,
    /// `platform_share = total − seller_share`. At the default 1_000 bps
    /// this reproduces `⌊total · 90 / 100⌋`.
    ///
    /// # Errors
    /// - [`MartError::InvalidFeeConfig`] if `platform_fee_bps` exceeds the
    ///   denominator
    /// - [`MartError::ArithmeticOverflow`] if the intermediate product
    ///   overflows `u128`
    pub fn compute(total: u128, platform_fee_bps: u16) -> Result<Self> {
        if platform_fee_bps > constants::BPS_DENOMINATOR {
            return Err(MartError::InvalidFeeConfig {
                bps: platform_fee_bps,
            });
        }
        let seller_bps = u128::from(constants::BPS_DENOMINATOR - platform_fee_bps);
        let seller_share = total
            .checked_mul(seller_bps)
            .ok_or(MartError::ArithmeticOverflow)?
            / u128::from(constants::BPS_DENOMINATOR);
        Ok(Self {
            seller_share,
            platform_share: total - seller_share,
        })
    }

    /// The total this split was computed from.
    #[must_use]
    pub fn total(&self) -> u128 {
        self.seller_share + self.platform_share
    }
}
