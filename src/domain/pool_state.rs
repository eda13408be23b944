//! Snapshot of a constant-product liquidity pool.

use serde::{Deserialize, Serialize};

use super::{Address, BasisPoints};
use crate::error::{Result, TradeError};

/// Point-in-time snapshot of a two-sided constant-product pool.
///
/// Like [`CurveState`](super::CurveState), this is fetched fresh per trade.
/// The invariant `k = reserve_a × reserve_b` is recomputed on demand and
/// never stored, so it cannot go stale after a reserve update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    /// Mint of token A.
    pub mint_a: Address,
    /// Mint of token B.
    pub mint_b: Address,
    /// Current reserve of token A.
    pub reserve_a: u128,
    /// Current reserve of token B.
    pub reserve_b: u128,
    /// Outstanding LP token supply.
    pub total_lp_supply: u128,
    /// Swap fee charged on the input side.
    pub fee_bps: BasisPoints,
}

impl PoolState {
    /// The constant-product invariant `k = reserve_a × reserve_b`,
    /// recomputed from current reserves.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::CalculationError`] if the product overflows.
    pub fn constant_product(&self) -> Result<u128> {
        self.reserve_a
            .checked_mul(self.reserve_b)
            .ok_or(TradeError::CalculationError("constant product overflow"))
    }

    /// Returns `true` if `mint` is one of the pool's two tokens.
    #[must_use]
    pub fn contains(&self, mint: &Address) -> bool {
        self.mint_a == *mint || self.mint_b == *mint
    }

    /// Orients the reserves for a swap selling `token_in`.
    ///
    /// Returns `(reserve_in, reserve_out, a_to_b)`, or `None` if
    /// `token_in` is not part of the pool.
    #[must_use]
    pub fn orient(&self, token_in: &Address) -> Option<(u128, u128, bool)> {
        if self.mint_a == *token_in {
            Some((self.reserve_a, self.reserve_b, true))
        } else if self.mint_b == *token_in {
            Some((self.reserve_b, self.reserve_a, false))
        } else {
            None
        }
    }

    /// Spot price of one side in terms of the other:
    /// `reserve_out / reserve_in`. Display metric; `0.0` when either
    /// reserve is empty.
    #[must_use]
    pub fn spot_price(&self, a_to_b: bool) -> f64 {
        if self.reserve_a == 0 || self.reserve_b == 0 {
            return 0.0;
        }
        if a_to_b {
            self.reserve_b as f64 / self.reserve_a as f64
        } else {
            self.reserve_a as f64 / self.reserve_b as f64
        }
    }

    /// Applies a completed swap to the snapshot, producing the post-trade
    /// reserve state. The input reserve grows by the full `amount_in`
    /// (fees stay in the pool); the output reserve shrinks by `amount_out`.
    ///
    /// # Errors
    ///
    /// - [`TradeError::CalculationError`] if the input reserve overflows.
    /// - [`TradeError::OutputExceedsReserves`] if `amount_out` would drain
    ///   or exceed the output reserve.
    pub fn apply_trade(&self, amount_in: u128, amount_out: u128, a_to_b: bool) -> Result<Self> {
        let (reserve_in, reserve_out) = if a_to_b {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        };

        let new_in = reserve_in
            .checked_add(amount_in)
            .ok_or(TradeError::CalculationError("reserve overflow after trade"))?;
        if amount_out >= reserve_out {
            return Err(TradeError::OutputExceedsReserves);
        }
        let new_out = reserve_out - amount_out;

        let mut next = *self;
        if a_to_b {
            next.reserve_a = new_in;
            next.reserve_b = new_out;
        } else {
            next.reserve_b = new_in;
            next.reserve_a = new_out;
        }
        Ok(next)
    }
}
