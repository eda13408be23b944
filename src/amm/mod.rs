//! Constant-product pool pricing and routing.

mod engine;
mod registry;

pub use engine::{AmmEngine, MINIMUM_LIQUIDITY};
pub use registry::{PoolRegistry, Route};
