//! Constant-product pool engine.

use crate::curve::price_impact_bps;
use crate::domain::{Amount, PoolState, Quote, ReservePair};
use crate::error::{Result, TradeError};
use crate::math::{get_amount_in, get_amount_out, isqrt};

/// LP tokens permanently locked on first deposit so the pool can never
/// be fully drained.
pub const MINIMUM_LIQUIDITY: u128 = 1_000;

/// Ratio mismatch below which a holding is considered already balanced.
const RATIO_TOLERANCE: f64 = 0.01;

/// Prices swaps and liquidity operations on migrated constant-product
/// pools.
///
/// Stateless: every method takes a [`PoolState`] snapshot and reads
/// nothing else, so two engines are always interchangeable.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmmEngine;

impl AmmEngine {
    /// Creates an engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Quotes an exact-input swap against the pool.
    ///
    /// The price impact compares the marginal price before and after the
    /// trade, with the post-trade reserves re-derived by applying the
    /// quoted amounts to the snapshot.
    ///
    /// # Errors
    ///
    /// Propagates [`get_amount_out`] failures.
    pub fn simulate_swap(&self, amount_in: u128, pool: &PoolState, a_to_b: bool) -> Result<Quote> {
        let pair = oriented_pair(pool, a_to_b)?;
        let amount_out =
            get_amount_out(amount_in, pair.reserve_in(), pair.reserve_out(), pool.fee_bps)?;
        let post = pair.apply(amount_in, amount_out)?;

        let price_before = pair.reserve_out() as f64 / pair.reserve_in() as f64;
        let price_after = post.reserve_out() as f64 / post.reserve_in() as f64;
        let impact = price_impact_bps(price_before, price_after);
        let effective = amount_out as f64 / amount_in as f64;
        Quote::new(
            Amount::new(amount_in),
            Amount::new(amount_out),
            impact,
            effective,
        )
    }

    /// Quotes an exact-output swap: the input required for the pool to
    /// pay out exactly `amount_out`.
    ///
    /// # Errors
    ///
    /// Propagates [`get_amount_in`](crate::math::get_amount_in) failures.
    pub fn simulate_swap_exact_out(
        &self,
        amount_out: u128,
        pool: &PoolState,
        a_to_b: bool,
    ) -> Result<Quote> {
        let pair = oriented_pair(pool, a_to_b)?;
        let amount_in =
            get_amount_in(amount_out, pair.reserve_in(), pair.reserve_out(), pool.fee_bps)?;
        let post = pair.apply(amount_in, amount_out)?;

        let price_before = pair.reserve_out() as f64 / pair.reserve_in() as f64;
        let price_after = post.reserve_out() as f64 / post.reserve_in() as f64;
        let impact = price_impact_bps(price_before, price_after);
        let effective = amount_out as f64 / amount_in as f64;
        Quote::new(
            Amount::new(amount_in),
            Amount::new(amount_out),
            impact,
            effective,
        )
    }

    /// LP tokens minted for a deposit of `(amount_a, amount_b)`.
    ///
    /// The first deposit mints `isqrt(a × b) - MINIMUM_LIQUIDITY`, with
    /// the locked remainder left in the pool forever. Later deposits mint
    /// pro rata on the scarcer side, so an unbalanced deposit donates its
    /// excess to existing holders.
    ///
    /// # Errors
    ///
    /// - [`TradeError::InvalidAmount`] if either deposit amount is zero.
    /// - [`TradeError::InvalidReserves`] if the pool has supply but an
    ///   empty reserve.
    /// - [`TradeError::CalculationError`] on intermediate overflow.
    /// - [`TradeError::InsufficientOutput`] if the minted amount is zero,
    ///   including a first deposit below the minimum-liquidity floor.
    pub fn lp_tokens_to_mint(
        &self,
        amount_a: u128,
        amount_b: u128,
        pool: &PoolState,
    ) -> Result<u128> {
        if amount_a == 0 || amount_b == 0 {
            return Err(TradeError::InvalidAmount(
                "deposit amounts must be positive",
            ));
        }

        if pool.total_lp_supply == 0 {
            let product = amount_a
                .checked_mul(amount_b)
                .ok_or(TradeError::CalculationError("deposit product overflow"))?;
            let minted = isqrt(product);
            if minted <= MINIMUM_LIQUIDITY {
                return Err(TradeError::InsufficientOutput);
            }
            return Ok(minted - MINIMUM_LIQUIDITY);
        }

        if pool.reserve_a == 0 || pool.reserve_b == 0 {
            return Err(TradeError::InvalidReserves(
                "pool has supply but an empty reserve",
            ));
        }
        let from_a = amount_a
            .checked_mul(pool.total_lp_supply)
            .ok_or(TradeError::CalculationError("lp mint overflow"))?
            / pool.reserve_a;
        let from_b = amount_b
            .checked_mul(pool.total_lp_supply)
            .ok_or(TradeError::CalculationError("lp mint overflow"))?
            / pool.reserve_b;
        let minted = from_a.min(from_b);
        if minted == 0 {
            return Err(TradeError::InsufficientOutput);
        }
        Ok(minted)
    }

    /// Underlying value of `lp_amount` LP tokens as `(amount_a, amount_b)`,
    /// each floored.
    ///
    /// # Errors
    ///
    /// - [`TradeError::InvalidReserves`] if the pool has no LP supply.
    /// - [`TradeError::InvalidAmount`] if `lp_amount` exceeds the supply.
    /// - [`TradeError::CalculationError`] on intermediate overflow.
    pub fn lp_share_value(&self, lp_amount: u128, pool: &PoolState) -> Result<(u128, u128)> {
        if pool.total_lp_supply == 0 {
            return Err(TradeError::InvalidReserves("pool has no LP supply"));
        }
        if lp_amount > pool.total_lp_supply {
            return Err(TradeError::InvalidAmount(
                "lp_amount exceeds outstanding supply",
            ));
        }
        let value_a = lp_amount
            .checked_mul(pool.reserve_a)
            .ok_or(TradeError::CalculationError("lp share overflow"))?
            / pool.total_lp_supply;
        let value_b = lp_amount
            .checked_mul(pool.reserve_b)
            .ok_or(TradeError::CalculationError("lp share overflow"))?
            / pool.total_lp_supply;
        Ok((value_a, value_b))
    }

    /// Deposit amounts `(a, b)` that put a two-sided holding in exact
    /// proportion to the pool reserves.
    ///
    /// When the holding's `b/a` ratio is already within [`RATIO_TOLERANCE`]
    /// of the pool's, the holding is returned unchanged. Otherwise the
    /// target is the closed-form solve of
    /// `total_value_in_a = user_a + user_b / pool_ratio`,
    /// `a = total_value_in_a / (1 + pool_ratio)`, `b = a × pool_ratio`,
    /// each floored.
    ///
    /// A drained pool or a single-sided holding has no meaningful ratio to
    /// match; those cases pass the deposit through unchanged (with the
    /// empty side zeroed) rather than failing.
    #[must_use]
    pub fn optimal_swap_split(
        &self,
        user_a: u128,
        user_b: u128,
        pool: &PoolState,
    ) -> (u128, u128) {
        if pool.reserve_a == 0 || pool.reserve_b == 0 {
            return (user_a, user_b);
        }
        if user_a == 0 {
            return (0, user_b);
        }
        if user_b == 0 {
            return (user_a, 0);
        }

        let pool_ratio = pool.reserve_b as f64 / pool.reserve_a as f64;
        let user_ratio = user_b as f64 / user_a as f64;
        if (user_ratio - pool_ratio).abs() < RATIO_TOLERANCE {
            return (user_a, user_b);
        }

        let total_value_in_a = user_a as f64 + user_b as f64 / pool_ratio;
        let optimal_a = total_value_in_a / (1.0 + pool_ratio);
        let optimal_b = optimal_a * pool_ratio;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let split = (optimal_a as u128, optimal_b as u128);
        split
    }
}

fn oriented_pair(pool: &PoolState, a_to_b: bool) -> Result<ReservePair> {
    if a_to_b {
        ReservePair::new(pool.reserve_a, pool.reserve_b)
    } else {
        ReservePair::new(pool.reserve_b, pool.reserve_a)
    }
}
