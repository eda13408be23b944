//! Snapshot of a bonding-curve account.

use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of one token's bonding-curve account.
///
/// Fetched fresh from the chain before every quote — the pricing engine
/// never caches a snapshot, because a stale snapshot produces a stale
/// price. Field widths match the on-chain account layout (`u64` reserves).
///
/// `complete` transitions `false → true` exactly once, when the real token
/// reserves are exhausted to the protocol floor; the off-chain engine only
/// ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveState {
    /// Protocol-seeded token reserves plus remaining real tokens.
    pub virtual_token_reserves: u64,
    /// Protocol-seeded SOL reserves plus deposited SOL.
    pub virtual_sol_reserves: u64,
    /// Tokens still held by the curve and available for purchase.
    pub real_token_reserves: u64,
    /// SOL deposited into the curve by buyers.
    pub real_sol_reserves: u64,
    /// Total token supply minted at curve creation.
    pub token_total_supply: u64,
    /// Terminal flag: the curve has sold out and migrated.
    pub complete: bool,
}

impl CurveState {
    /// Marginal token price in SOL, derived from the virtual reserves.
    ///
    /// Display metric only — trade amounts always come from the integer
    /// engine, never from this float. Returns `0.0` for a degenerate
    /// snapshot with no virtual token reserves.
    #[must_use]
    pub fn spot_price(&self) -> f64 {
        if self.virtual_token_reserves == 0 {
            return 0.0;
        }
        let sol = self.virtual_sol_reserves as f64 / 1e9;
        let tokens = self.virtual_token_reserves as f64 / 1e6;
        sol / tokens
    }

    /// Completion progress in `0.0..=100.0`: share of the total supply
    /// already bought off the curve. Clamped for display.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.token_total_supply == 0 {
            return 0.0;
        }
        let bought = self.token_total_supply.saturating_sub(self.real_token_reserves);
        let pct = bought as f64 / self.token_total_supply as f64 * 100.0;
        pct.min(100.0)
    }

    /// Market capitalization in SOL: spot price times the decimal-adjusted
    /// total supply. Display metric.
    #[must_use]
    pub fn market_cap(&self, decimals: u8) -> f64 {
        let supply = self.token_total_supply as f64 / 10f64.powi(i32::from(decimals));
        self.spot_price() * supply
    }
}
