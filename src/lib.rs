//! Client-side pricing and trade coordination for launch-curve tokens.
//!
//! Tokens launch on a bonding curve priced by a constant-product
//! invariant over virtual reserves; once the curve sells out it
//! completes and trading migrates to a regular constant-product AMM
//! pool. This crate prices both venues, derives slippage bounds, drives
//! a trade from quote to confirmation, and classifies the protocol's
//! log events.
//!
//! # Layout
//!
//! - [`domain`] — validated value types and state snapshots.
//! - [`math`] — integer pricing kernels.
//! - [`curve`] — bonding-curve engine.
//! - [`amm`] — pool engine, registry, and routing.
//! - [`slippage`] — tolerance validation and bound derivation.
//! - [`coordinator`] — the quote → bound → submit → confirm pipeline.
//! - [`events`] — log event classification.
//! - [`traits`] — collaborator seams for state fetching and execution.
//!
//! All pricing that gates fund movement is integer arithmetic; floats
//! appear only in display metrics. Networking is behind the [`traits`]
//! seams, so the pricing core tests without a chain.

pub mod amm;
pub mod config;
pub mod coordinator;
pub mod curve;
pub mod domain;
pub mod error;
pub mod events;
pub mod math;
pub mod prelude;
pub mod slippage;
pub mod traits;

#[cfg(test)]
mod properties;

pub use error::{Result, TradeError};
