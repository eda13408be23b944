//! In-memory pool registry and route selection.

use std::collections::HashMap;

use tracing::debug;

use super::AmmEngine;
use crate::domain::{Address, PoolState, Quote};
use crate::error::Result;

/// A selected swap route: which pool, which direction, and the quote it
/// produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Registry identifier of the chosen pool.
    pub pool_id: String,
    /// Swap direction relative to the pool's token ordering.
    pub a_to_b: bool,
    /// The winning quote.
    pub quote: Quote,
}

/// In-memory index of known pool snapshots, keyed by an opaque pool id.
///
/// The registry holds snapshots, not live state — callers refresh entries
/// before routing. Route selection is greedy over a single hop: the pool
/// whose quote pays out the most wins.
#[derive(Debug, Clone, Default)]
pub struct PoolRegistry {
    pools: HashMap<String, PoolState>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a pool snapshot.
    pub fn upsert(&mut self, pool_id: impl Into<String>, state: PoolState) {
        self.pools.insert(pool_id.into(), state);
    }

    /// Removes a pool. Returns the snapshot if it was present.
    pub fn remove(&mut self, pool_id: &str) -> Option<PoolState> {
        self.pools.remove(pool_id)
    }

    /// Looks up a pool snapshot.
    #[must_use]
    pub fn get(&self, pool_id: &str) -> Option<&PoolState> {
        self.pools.get(pool_id)
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// All pools containing `mint` on either side.
    pub fn pools_for(&self, mint: &Address) -> impl Iterator<Item = (&str, &PoolState)> {
        let mint = *mint;
        self.pools
            .iter()
            .filter(move |(_, pool)| pool.contains(&mint))
            .map(|(id, pool)| (id.as_str(), pool))
    }

    /// Best single-hop route selling `amount_in` of `mint_in` for
    /// `mint_out`, by highest quoted output.
    ///
    /// Pools that fail to quote (dust input, drained side, overflow) are
    /// skipped rather than failing the search — one degenerate pool must
    /// not hide a viable route. Returns `Ok(None)` when no pool connects
    /// the pair or every candidate failed to quote.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` keeps the signature stable for
    /// registries backed by remote state.
    pub fn find_best_route(
        &self,
        mint_in: &Address,
        mint_out: &Address,
        amount_in: u128,
    ) -> Result<Option<Route>> {
        let engine = AmmEngine::new();
        let mut best: Option<Route> = None;

        for (pool_id, pool) in &self.pools {
            let Some((_, _, a_to_b)) = pool.orient(mint_in) else {
                continue;
            };
            if !pool.contains(mint_out) || mint_in == mint_out {
                continue;
            }
            let quote = match engine.simulate_swap(amount_in, pool, a_to_b) {
                Ok(quote) => quote,
                Err(err) => {
                    debug!(%pool_id, %err, "skipping pool that failed to quote");
                    continue;
                }
            };
            let better = best
                .as_ref()
                .map_or(true, |route| quote.amount_out() > route.quote.amount_out());
            if better {
                best = Some(Route {
                    pool_id: pool_id.clone(),
                    a_to_b,
                    quote,
                });
            }
        }
        Ok(best)
    }
}
