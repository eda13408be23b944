//! End-to-end trade coordination.

use tracing::{debug, info, instrument, warn};

use crate::amm::AmmEngine;
use crate::curve::BondingCurveEngine;
use crate::domain::{
    Address, BasisPoints, BoundDirection, Confirmation, ConfirmPolicy, Quote, TradeBound,
    TradeIntent, TradeReceipt, TradeSide,
};
use crate::error::{Result, TradeError};
use crate::slippage::SlippageGuard;
use crate::traits::{StateSource, TradeExecutor};

/// Drives one trade from validation to confirmation.
///
/// The pipeline is fixed: validate the tolerance, fetch one state
/// snapshot, quote, derive the bound from that same snapshot, submit,
/// confirm. Re-fetching between quote and bound would let the two
/// disagree about the price, so the snapshot is fetched exactly once.
///
/// The coordinator holds no state of its own between trades. Every
/// curve trade asks the [`StateSource`] for the current global
/// configuration; a source that wants to avoid the round trip wraps a
/// [`ConfigCache`](crate::config::ConfigCache) behind the trait.
///
/// The coordinator never retries. A rejected trade surfaces as
/// [`TradeError::Rejected`]; a trade that outlived its confirmation
/// window surfaces as [`TradeError::Unconfirmed`] with the signature, so
/// the caller can keep polling or re-quote from scratch. Blind
/// resubmission of a possibly-landed trade is how funds get spent twice.
#[derive(Debug)]
pub struct TradeCoordinator<S, E> {
    source: S,
    executor: E,
    confirm_policy: ConfirmPolicy,
}

impl<S: StateSource, E: TradeExecutor> TradeCoordinator<S, E> {
    /// Creates a coordinator with the default confirmation policy.
    #[must_use]
    pub fn new(source: S, executor: E) -> Self {
        Self::with_policy(source, executor, ConfirmPolicy::default())
    }

    /// Creates a coordinator with an explicit confirmation policy.
    #[must_use]
    pub fn with_policy(source: S, executor: E, confirm_policy: ConfirmPolicy) -> Self {
        Self {
            source,
            executor,
            confirm_policy,
        }
    }

    /// Buys tokens on a bonding curve with `sol_in` lamports.
    ///
    /// # Errors
    ///
    /// - [`TradeError::InvalidTolerance`] before any network call.
    /// - Pricing errors from the curve engine, including
    ///   [`TradeError::CurveComplete`].
    /// - [`TradeError::Rejected`] if the venue refused the trade.
    /// - [`TradeError::Unconfirmed`] if confirmation timed out.
    #[instrument(skip(self))]
    pub async fn buy(
        &self,
        mint: &Address,
        sol_in: u64,
        tolerance: BasisPoints,
    ) -> Result<TradeReceipt> {
        let guard = SlippageGuard::new(tolerance)?;
        let engine = self.curve_engine().await?;
        let state = self.source.fetch_curve_state(mint).await?;

        let quote = engine.quote_buy(sol_in, &state)?;
        let bound = guard.min_output(quote.amount_out())?;
        debug!(%quote, %bound, "quoted buy");

        let intent = TradeIntent::Curve {
            mint: *mint,
            side: TradeSide::Buy,
            amount_in: u128::from(sol_in),
            bound,
        };
        self.execute(intent, quote, bound).await
    }

    /// Sells tokens back to a bonding curve.
    ///
    /// # Errors
    ///
    /// Same families as [`buy`](Self::buy).
    #[instrument(skip(self))]
    pub async fn sell(
        &self,
        mint: &Address,
        tokens_in: u64,
        tolerance: BasisPoints,
    ) -> Result<TradeReceipt> {
        let guard = SlippageGuard::new(tolerance)?;
        let engine = self.curve_engine().await?;
        let state = self.source.fetch_curve_state(mint).await?;

        let quote = engine.quote_sell(tokens_in, &state)?;
        let bound = guard.min_output(quote.amount_out())?;
        debug!(%quote, %bound, "quoted sell");

        let intent = TradeIntent::Curve {
            mint: *mint,
            side: TradeSide::Sell,
            amount_in: u128::from(tokens_in),
            bound,
        };
        self.execute(intent, quote, bound).await
    }

    /// Swaps against a migrated constant-product pool.
    ///
    /// # Errors
    ///
    /// Same families as [`buy`](Self::buy), with pool pricing errors in
    /// place of curve ones.
    #[instrument(skip(self))]
    pub async fn swap(
        &self,
        pool_id: &str,
        a_to_b: bool,
        amount_in: u128,
        tolerance: BasisPoints,
    ) -> Result<TradeReceipt> {
        let guard = SlippageGuard::new(tolerance)?;
        let pool = self.source.fetch_pool_state(pool_id).await?;

        let quote = AmmEngine::new().simulate_swap(amount_in, &pool, a_to_b)?;
        let bound = guard.min_output(quote.amount_out())?;
        debug!(%quote, %bound, "quoted swap");

        let intent = TradeIntent::Pool {
            pool_id: pool_id.to_owned(),
            a_to_b,
            amount_in,
            bound,
        };
        self.execute(intent, quote, bound).await
    }

    /// Swaps against a pool for an exact output amount.
    ///
    /// The bound is a ceiling on the input: the trade spends at most the
    /// quoted input plus tolerance to receive exactly `amount_out`.
    ///
    /// # Errors
    ///
    /// Same families as [`swap`](Self::swap).
    #[instrument(skip(self))]
    pub async fn swap_exact_out(
        &self,
        pool_id: &str,
        a_to_b: bool,
        amount_out: u128,
        tolerance: BasisPoints,
    ) -> Result<TradeReceipt> {
        let guard = SlippageGuard::new(tolerance)?;
        let pool = self.source.fetch_pool_state(pool_id).await?;

        let quote = AmmEngine::new().simulate_swap_exact_out(amount_out, &pool, a_to_b)?;
        let bound = guard.bound_for(&quote, BoundDirection::Maximum)?;
        debug!(%quote, %bound, "quoted exact-out swap");

        let intent = TradeIntent::Pool {
            pool_id: pool_id.to_owned(),
            a_to_b,
            amount_in: quote.amount_in().get(),
            bound,
        };
        self.execute(intent, quote, bound).await
    }

    /// Quotes a curve buy without executing.
    ///
    /// # Errors
    ///
    /// Fetch and pricing errors, as for [`buy`](Self::buy) up to the
    /// bound step.
    pub async fn preview_buy(&self, mint: &Address, sol_in: u64) -> Result<Quote> {
        let engine = self.curve_engine().await?;
        let state = self.source.fetch_curve_state(mint).await?;
        engine.quote_buy(sol_in, &state)
    }

    /// Quotes a curve sell without executing.
    ///
    /// # Errors
    ///
    /// Fetch and pricing errors, as for [`sell`](Self::sell) up to the
    /// bound step.
    pub async fn preview_sell(&self, mint: &Address, tokens_in: u64) -> Result<Quote> {
        let engine = self.curve_engine().await?;
        let state = self.source.fetch_curve_state(mint).await?;
        engine.quote_sell(tokens_in, &state)
    }

    /// Consumes the coordinator and returns its collaborators.
    pub fn into_parts(self) -> (S, E) {
        (self.source, self.executor)
    }

    async fn curve_engine(&self) -> Result<BondingCurveEngine> {
        let config = self.source.fetch_global_config().await?;
        BondingCurveEngine::new(config)
    }

    async fn execute(
        &self,
        intent: TradeIntent,
        quote: Quote,
        bound: TradeBound,
    ) -> Result<TradeReceipt> {
        let signature = self.executor.submit(&intent).await?;
        info!(%signature, "trade submitted");

        let confirmation = self
            .executor
            .confirm(
                &signature,
                self.confirm_policy.commitment,
                self.confirm_policy.timeout,
            )
            .await?;
        match confirmation {
            Confirmation::Confirmed => {
                info!(%signature, "trade confirmed");
                Ok(TradeReceipt {
                    signature,
                    quote,
                    bound,
                })
            }
            Confirmation::Unconfirmed => {
                warn!(%signature, "confirmation timed out");
                Err(TradeError::Unconfirmed {
                    signature: signature.as_str().to_owned(),
                })
            }
        }
    }
}
