//! Constant-product reserve math.
//!
//! Pure integer kernel shared by the pool engine and the routing layer.
//! All intermediate products are `u128` and checked; rounding always
//! favors the pool — outputs round down, required inputs round up.

use crate::domain::{BasisPoints, MAX_BPS};
use crate::error::{Result, TradeError};

/// Expected output for an exact-input swap against `(reserve_in, reserve_out)`
/// with the fee taken from the input side.
///
/// `floor(amount_in_with_fee * reserve_out / (reserve_in * 10_000 + amount_in_with_fee))`
/// where `amount_in_with_fee = amount_in * (10_000 - fee_bps)`.
///
/// # Errors
///
/// - [`TradeError::InvalidAmount`] if `amount_in` is zero.
/// - [`TradeError::InvalidReserves`] if either reserve is zero or the fee
///   consumes the whole input.
/// - [`TradeError::CalculationError`] on intermediate overflow.
/// - [`TradeError::InsufficientOutput`] if the floored output is zero.
pub fn get_amount_out(
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: BasisPoints,
) -> Result<u128> {
    if amount_in == 0 {
        return Err(TradeError::InvalidAmount("amount_in must be positive"));
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(TradeError::InvalidReserves("reserves must be positive"));
    }
    if fee_bps.get() >= MAX_BPS {
        return Err(TradeError::InvalidReserves("fee consumes entire input"));
    }

    let fee_factor = u128::from(MAX_BPS - fee_bps.get());
    let amount_in_with_fee = amount_in
        .checked_mul(fee_factor)
        .ok_or(TradeError::CalculationError("fee-adjusted input overflow"))?;
    let numerator = amount_in_with_fee
        .checked_mul(reserve_out)
        .ok_or(TradeError::CalculationError("output numerator overflow"))?;
    let denominator = reserve_in
        .checked_mul(u128::from(MAX_BPS))
        .and_then(|scaled| scaled.checked_add(amount_in_with_fee))
        .ok_or(TradeError::CalculationError("output denominator overflow"))?;

    let amount_out = numerator / denominator;
    if amount_out == 0 {
        return Err(TradeError::InsufficientOutput);
    }
    if amount_out >= reserve_out {
        return Err(TradeError::OutputExceedsReserves);
    }
    Ok(amount_out)
}

/// Required input for an exact-output swap. The inverse of
/// [`get_amount_out`], rounded up so the round trip never under-pays:
/// `get_amount_in(get_amount_out(x)) >= x` for every valid `x`.
///
/// # Errors
///
/// - [`TradeError::InvalidAmount`] if `amount_out` is zero.
/// - [`TradeError::InvalidReserves`] if either reserve is zero or the fee
///   consumes the whole input.
/// - [`TradeError::OutputExceedsReserves`] if `amount_out` would drain
///   the output reserve.
/// - [`TradeError::CalculationError`] on intermediate overflow.
pub fn get_amount_in(
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: BasisPoints,
) -> Result<u128> {
    if amount_out == 0 {
        return Err(TradeError::InvalidAmount("amount_out must be positive"));
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(TradeError::InvalidReserves("reserves must be positive"));
    }
    if fee_bps.get() >= MAX_BPS {
        return Err(TradeError::InvalidReserves("fee consumes entire input"));
    }
    if amount_out >= reserve_out {
        return Err(TradeError::OutputExceedsReserves);
    }

    let fee_factor = u128::from(MAX_BPS - fee_bps.get());
    let numerator = reserve_in
        .checked_mul(amount_out)
        .and_then(|product| product.checked_mul(u128::from(MAX_BPS)))
        .ok_or(TradeError::CalculationError("input numerator overflow"))?;
    let denominator = (reserve_out - amount_out)
        .checked_mul(fee_factor)
        .ok_or(TradeError::CalculationError("input denominator overflow"))?;

    let amount_in = (numerator / denominator)
        .checked_add(1)
        .ok_or(TradeError::CalculationError("input round-up overflow"))?;
    Ok(amount_in)
}

/// Integer square root by Newton's method, floored.
#[must_use]
pub const fn isqrt(value: u128) -> u128 {
    if value < 2 {
        return value;
    }
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}
