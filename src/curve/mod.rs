//! Bonding-curve pricing.

mod engine;

pub use engine::BondingCurveEngine;
pub(crate) use engine::price_impact_bps;
