//! Protocol-wide bonding-curve parameters.

use serde::{Deserialize, Serialize};

use crate::domain::Address;
use crate::error::{Result, TradeError};

/// Protocol configuration account governing every bonding curve.
///
/// Fetched from the chain rather than hard-coded: the protocol authority
/// can retune the initial reserves and fee, and a client baked against
/// old constants would quote wrong prices. See [`ConfigCache`](super::ConfigCache)
/// for the refresh policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Whether the account has been initialized on chain.
    pub initialized: bool,
    /// Authority allowed to update the configuration.
    pub authority: Address,
    /// Account that collects protocol fees.
    pub fee_recipient: Address,
    /// Virtual token reserves seeded into every new curve.
    pub initial_virtual_token_reserves: u64,
    /// Virtual SOL reserves seeded into every new curve.
    pub initial_virtual_sol_reserves: u64,
    /// Real token reserves available for purchase on a new curve.
    pub initial_real_token_reserves: u64,
    /// Total token supply minted per curve.
    pub token_total_supply: u64,
    /// Protocol fee charged on curve trades.
    pub fee_basis_points: u64,
}

impl GlobalConfig {
    /// Checks the account is initialized and its parameters are usable
    /// for pricing.
    ///
    /// # Errors
    ///
    /// - [`TradeError::InvalidReserves`] if the account is uninitialized
    ///   or any seed reserve is zero.
    /// - [`TradeError::InvalidAmount`] if the fee is 10 000 bps or more.
    pub const fn validate(&self) -> Result<()> {
        if !self.initialized {
            return Err(TradeError::InvalidReserves(
                "global config is not initialized",
            ));
        }
        if self.initial_virtual_token_reserves == 0
            || self.initial_virtual_sol_reserves == 0
            || self.initial_real_token_reserves == 0
        {
            return Err(TradeError::InvalidReserves(
                "global config seed reserves must be positive",
            ));
        }
        if self.initial_virtual_token_reserves <= self.initial_real_token_reserves {
            return Err(TradeError::InvalidReserves(
                "virtual token seed must exceed the purchasable reserve",
            ));
        }
        if self.fee_basis_points >= 10_000 {
            return Err(TradeError::InvalidAmount(
                "global config fee consumes entire input",
            ));
        }
        Ok(())
    }
}
