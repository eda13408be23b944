//! Cross-module property tests.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::config::GlobalConfig;
use crate::curve::BondingCurveEngine;
use crate::domain::{Address, Amount, BasisPoints, CurveState};
use crate::error::TradeError;
use crate::math::{get_amount_in, get_amount_out};
use crate::slippage::SlippageGuard;

const FEE: BasisPoints = BasisPoints::new(100);

#[allow(clippy::panic)]
fn engine() -> BondingCurveEngine {
    let config = GlobalConfig {
        initialized: true,
        authority: Address::from_bytes([3u8; 32]),
        fee_recipient: Address::from_bytes([4u8; 32]),
        initial_virtual_token_reserves: 1_073_000_000_000_000,
        initial_virtual_sol_reserves: 30_000_000_000,
        initial_real_token_reserves: 793_100_000_000_000,
        token_total_supply: 1_000_000_000_000_000,
        fee_basis_points: 100,
    };
    match BondingCurveEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => panic!("config must validate: {err}"),
    }
}

// Offsets implied by the engine config: 30e9 SOL-side, 279.9e12 token-side.
fn curve_state(real_tok: u64, real_sol: u64) -> CurveState {
    CurveState {
        virtual_token_reserves: 279_900_000_000_000 + real_tok,
        virtual_sol_reserves: 30_000_000_000 + real_sol,
        real_token_reserves: real_tok,
        real_sol_reserves: real_sol,
        token_total_supply: 1_000_000_000_000_000,
        complete: false,
    }
}

proptest! {
    #[test]
    fn swap_output_monotone_in_input(
        reserve_in in 1_000u128..1_000_000_000_000,
        reserve_out in 1_000u128..1_000_000_000_000,
        amount in 1u128..1_000_000_000,
        extra in 1u128..1_000_000_000,
    ) {
        let small = get_amount_out(amount, reserve_in, reserve_out, FEE);
        let large = get_amount_out(amount + extra, reserve_in, reserve_out, FEE);
        if let (Ok(small), Ok(large)) = (small, large) {
            prop_assert!(large >= small);
        }
    }

    #[test]
    fn swap_output_never_drains_reserve(
        reserve_in in 1_000u128..1_000_000_000_000,
        reserve_out in 1_000u128..1_000_000_000_000,
        amount in 1u128..u64::MAX as u128,
    ) {
        if let Ok(out) = get_amount_out(amount, reserve_in, reserve_out, FEE) {
            prop_assert!(out < reserve_out);
        }
    }

    #[test]
    fn exact_output_round_trip_covers_request(
        reserve_in in 10_000u128..1_000_000_000_000,
        reserve_out in 10_000u128..1_000_000_000_000,
        amount_out in 1u128..5_000,
    ) {
        // Paying the computed input must deliver at least the requested
        // output: get_amount_in rounds up exactly so this holds.
        let needed = match get_amount_in(amount_out, reserve_in, reserve_out, FEE) {
            Ok(needed) => needed,
            Err(_) => return Ok(()),
        };
        let delivered = match get_amount_out(needed, reserve_in, reserve_out, FEE) {
            Ok(delivered) => delivered,
            Err(TradeError::InsufficientOutput) => return Ok(()),
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        prop_assert!(delivered >= amount_out);
    }

    #[test]
    fn swap_invariant_never_shrinks(
        reserve_in in 1_000u128..1_000_000_000_000,
        reserve_out in 1_000u128..1_000_000_000_000,
        amount in 1u128..1_000_000_000,
    ) {
        if let Ok(out) = get_amount_out(amount, reserve_in, reserve_out, FEE) {
            let k_before = reserve_in * reserve_out;
            let k_after = (reserve_in + amount) * (reserve_out - out);
            prop_assert!(k_after >= k_before);
        }
    }

    #[test]
    fn slippage_bounds_bracket_expectation(
        expected in 1u128..1_000_000_000_000_000_000,
        tolerance in 0u16..=10_000,
    ) {
        let guard = match SlippageGuard::new(BasisPoints::new(tolerance)) {
            Ok(guard) => guard,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        let min = match guard.min_output(Amount::new(expected)) {
            Ok(bound) => bound,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        let max = match guard.max_input(Amount::new(expected)) {
            Ok(bound) => bound,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        prop_assert!(min.bound_amount().get() <= expected);
        prop_assert!(max.bound_amount().get() >= expected);
        if tolerance == 0 {
            prop_assert_eq!(min.bound_amount().get(), expected);
            prop_assert_eq!(max.bound_amount().get(), expected);
        }
    }

    #[test]
    fn excess_tolerance_always_rejected(tolerance in 10_001u16..) {
        prop_assert!(matches!(
            SlippageGuard::new(BasisPoints::new(tolerance)),
            Err(TradeError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn curve_buy_monotone_and_capped(
        real_tok in 1_000u64..793_100_000_000_000,
        real_sol in 0u64..120_000_000_000,
        sol_in in 1_000u64..10_000_000_000,
    ) {
        let e = engine();
        let state = curve_state(real_tok, real_sol);
        let small = e.buy_price(sol_in, &state);
        let large = e.buy_price(sol_in.saturating_mul(2), &state);
        if let (Ok(small), Ok(large)) = (small, large) {
            prop_assert!(large >= small);
            prop_assert!(small <= state.real_token_reserves);
            prop_assert!(large <= state.real_token_reserves);
        }
    }

    #[test]
    fn curve_round_trip_never_profits(
        real_tok in 10_000_000_000_000u64..793_100_000_000_000,
        real_sol in 0u64..120_000_000_000,
        sol_in in 1_000_000u64..1_000_000_000,
    ) {
        // Buy into the curve, then immediately sell everything back; the
        // rounding spread keeps the result at or below par.
        let e = engine();
        let mut state = curve_state(real_tok, real_sol);
        let tokens = match e.buy_price(sol_in, &state) {
            Ok(tokens) => tokens,
            Err(_) => return Ok(()),
        };
        if tokens > state.real_token_reserves {
            return Ok(());
        }
        state.virtual_sol_reserves += sol_in;
        state.real_sol_reserves += sol_in;
        state.virtual_token_reserves -= tokens;
        state.real_token_reserves -= tokens;
        match e.sell_price(tokens, &state) {
            Ok(sol_back) => prop_assert!(sol_back <= sol_in),
            Err(TradeError::CalculationError(_) | TradeError::OutputExceedsReserves) => {}
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        }
    }
}
