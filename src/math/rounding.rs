//! Integer division with an explicit rounding direction.

use crate::domain::Rounding;

/// Divides `value` by `divisor`, rounding in the requested direction.
///
/// Returns `None` if `divisor` is zero. Rounding up on an exact division
/// does not add one.
#[must_use]
pub const fn div_round(value: u128, divisor: u128, rounding: Rounding) -> Option<u128> {
    if divisor == 0 {
        return None;
    }
    let quotient = value / divisor;
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up => {
            if value % divisor == 0 {
                Some(quotient)
            } else {
                Some(quotient + 1)
            }
        }
    }
}
