//! Bonding-curve pricing engine.

use crate::config::GlobalConfig;
use crate::domain::{Amount, BasisPoints, CurveState, Quote, MAX_BPS};
use crate::error::{Result, TradeError};

/// Prices trades against a token's bonding curve.
///
/// The curve maintains the invariant `k = virtual_sol × virtual_token`,
/// where each virtual reserve is a protocol-fixed offset plus the
/// deposited real reserve:
///
/// ```text
/// virtual_sol   = SOL_OFFSET   + real_sol
/// virtual_token = TOKEN_OFFSET + real_token
/// ```
///
/// The offsets come from the fetched [`GlobalConfig`], never from the
/// snapshot's own `virtual_*` fields — a snapshot with corrupted virtual
/// fields must not move a price. The on-chain account publishes the
/// offsets as initial virtual totals, so the token offset is
/// `initial_virtual_token_reserves - initial_real_token_reserves`; for a
/// consistent account the derived values coincide with the snapshot's
/// virtual fields.
///
/// A completed curve (`state.complete`) refuses every pricing call with
/// [`TradeError::CurveComplete`] — trading has migrated to an AMM pool
/// and a curve quote would be fiction.
#[derive(Debug, Clone, Copy)]
pub struct BondingCurveEngine {
    sol_offset: u64,
    token_offset: u64,
    config: GlobalConfig,
}

impl BondingCurveEngine {
    /// Creates an engine from a validated protocol configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`GlobalConfig::validate`] failures.
    pub fn new(config: GlobalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sol_offset: config.initial_virtual_sol_reserves,
            token_offset: config.initial_virtual_token_reserves
                - config.initial_real_token_reserves,
            config,
        })
    }

    /// Returns the configured protocol parameters.
    #[must_use]
    pub const fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Builds the state of a brand-new curve seeded from the protocol
    /// configuration.
    #[must_use]
    pub const fn initial_state(&self) -> CurveState {
        CurveState {
            virtual_token_reserves: self.config.initial_virtual_token_reserves,
            virtual_sol_reserves: self.config.initial_virtual_sol_reserves,
            real_token_reserves: self.config.initial_real_token_reserves,
            real_sol_reserves: 0,
            token_total_supply: self.config.token_total_supply,
            complete: false,
        }
    }

    /// Virtual reserves `(sol, token)` derived from the configured
    /// offsets and the snapshot's real reserves.
    fn virtual_reserves(&self, state: &CurveState) -> (u128, u128) {
        (
            u128::from(self.sol_offset) + u128::from(state.real_sol_reserves),
            u128::from(self.token_offset) + u128::from(state.real_token_reserves),
        )
    }

    /// Tokens received for spending `sol_in` lamports:
    /// `tokens_out = virtual_token - floor(k / (virtual_sol + sol_in))`,
    /// capped at the real token reserves — the curve cannot sell tokens
    /// it does not hold.
    ///
    /// # Errors
    ///
    /// - [`TradeError::CurveComplete`] if the curve has completed.
    /// - [`TradeError::InvalidAmount`] if `sol_in` is zero.
    /// - [`TradeError::CalculationError`] on overflow or when the output
    ///   rounds to zero.
    pub fn buy_price(&self, sol_in: u64, state: &CurveState) -> Result<u64> {
        if state.complete {
            return Err(TradeError::CurveComplete);
        }
        if sol_in == 0 {
            return Err(TradeError::InvalidAmount("sol_in must be positive"));
        }
        let (v_sol, v_tok) = self.virtual_reserves(state);

        let k = v_sol
            .checked_mul(v_tok)
            .ok_or(TradeError::CalculationError("curve invariant overflow"))?;
        let new_sol = v_sol
            .checked_add(u128::from(sol_in))
            .ok_or(TradeError::CalculationError("virtual sol overflow"))?;
        let new_token = k / new_sol;
        if new_token >= v_tok {
            return Err(TradeError::CalculationError("buy output rounded to zero"));
        }

        let tokens_out = (v_tok - new_token).min(u128::from(state.real_token_reserves));
        if tokens_out == 0 {
            return Err(TradeError::CalculationError("buy output rounded to zero"));
        }
        u64::try_from(tokens_out)
            .map_err(|_| TradeError::CalculationError("token output exceeds u64"))
    }

    /// Lamports received for selling `tokens_in` tokens back to the curve.
    ///
    /// Solves the SOL side holding `k` constant, rounding the curve's
    /// retained reserve up so the seller's output rounds down:
    /// `sol_out = virtual_sol - ceil(k / (virtual_token + tokens_in))`,
    /// equivalently `floor(tokens_in × virtual_sol / (virtual_token +
    /// tokens_in))`. Rounding the retained reserve down instead would let
    /// a buy-then-sell round trip extract a lamport from the curve.
    ///
    /// # Errors
    ///
    /// - [`TradeError::CurveComplete`] if the curve has completed.
    /// - [`TradeError::InvalidAmount`] if `tokens_in` is zero.
    /// - [`TradeError::CalculationError`] on overflow or when the output
    ///   rounds to zero.
    /// - [`TradeError::OutputExceedsReserves`] if the output exceeds the
    ///   SOL actually deposited in the curve.
    pub fn sell_price(&self, tokens_in: u64, state: &CurveState) -> Result<u64> {
        if state.complete {
            return Err(TradeError::CurveComplete);
        }
        if tokens_in == 0 {
            return Err(TradeError::InvalidAmount("tokens_in must be positive"));
        }
        let (v_sol, v_tok) = self.virtual_reserves(state);

        let tokens = u128::from(tokens_in);
        let sol_out = tokens
            .checked_mul(v_sol)
            .ok_or(TradeError::CalculationError("sell numerator overflow"))?
            / (v_tok
                .checked_add(tokens)
                .ok_or(TradeError::CalculationError("virtual token overflow"))?);
        if sol_out == 0 {
            return Err(TradeError::CalculationError("sell output rounded to zero"));
        }
        if sol_out > u128::from(state.real_sol_reserves) {
            return Err(TradeError::OutputExceedsReserves);
        }
        u64::try_from(sol_out).map_err(|_| TradeError::CalculationError("sol output exceeds u64"))
    }

    /// Lamports required to drive the real token reserves to zero,
    /// completing the curve: `k / TOKEN_OFFSET - virtual_sol`, clamped at
    /// zero when the curve is already at or past the required depth.
    ///
    /// # Errors
    ///
    /// - [`TradeError::CurveComplete`] if the curve has completed.
    /// - [`TradeError::CalculationError`] on overflow.
    pub fn buyout_price(&self, state: &CurveState) -> Result<u64> {
        if state.complete {
            return Err(TradeError::CurveComplete);
        }
        let (v_sol, v_tok) = self.virtual_reserves(state);

        let k = v_sol
            .checked_mul(v_tok)
            .ok_or(TradeError::CalculationError("curve invariant overflow"))?;
        let needed = (k / u128::from(self.token_offset)).saturating_sub(v_sol);
        u64::try_from(needed).map_err(|_| TradeError::CalculationError("buyout exceeds u64"))
    }

    /// Quotes a buy: `sol_in` lamports for tokens, with the marginal
    /// price impact of the trade.
    ///
    /// # Errors
    ///
    /// Same conditions as [`buy_price`](Self::buy_price).
    pub fn quote_buy(&self, sol_in: u64, state: &CurveState) -> Result<Quote> {
        let tokens_out = self.buy_price(sol_in, state)?;
        let (v_sol, v_tok) = self.virtual_reserves(state);

        let price_before = v_sol as f64 / v_tok as f64;
        let price_after = (v_sol + u128::from(sol_in)) as f64
            / (v_tok - u128::from(tokens_out)) as f64;
        let impact = price_impact_bps(price_before, price_after);
        let effective = tokens_out as f64 / sol_in as f64;
        Quote::new(
            Amount::from_u64(sol_in),
            Amount::from_u64(tokens_out),
            impact,
            effective,
        )
    }

    /// Quotes a sell: `tokens_in` tokens for lamports, with the marginal
    /// price impact of the trade.
    ///
    /// # Errors
    ///
    /// Same conditions as [`sell_price`](Self::sell_price).
    pub fn quote_sell(&self, tokens_in: u64, state: &CurveState) -> Result<Quote> {
        let sol_out = self.sell_price(tokens_in, state)?;
        let (v_sol, v_tok) = self.virtual_reserves(state);

        let price_before = v_sol as f64 / v_tok as f64;
        let price_after = (v_sol - u128::from(sol_out)) as f64
            / (v_tok + u128::from(tokens_in)) as f64;
        let impact = price_impact_bps(price_before, price_after);
        let effective = sol_out as f64 / tokens_in as f64;
        Quote::new(
            Amount::from_u64(tokens_in),
            Amount::from_u64(sol_out),
            impact,
            effective,
        )
    }
}

/// Relative marginal price move `|price_after - price_before| /
/// price_before` in basis points, clamped to `0..=10_000`.
pub(crate) fn price_impact_bps(price_before: f64, price_after: f64) -> BasisPoints {
    if price_before <= 0.0 {
        return BasisPoints::MAX_PERCENT;
    }
    let moved = ((price_after - price_before) / price_before * f64::from(MAX_BPS)).abs();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = moved.min(f64::from(MAX_BPS)) as u16;
    BasisPoints::new(clamped)
}
