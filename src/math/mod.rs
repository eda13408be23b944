//! Integer pricing kernels.

mod reserve;
mod rounding;

pub use reserve::{get_amount_in, get_amount_out, isqrt};
pub use rounding::div_round;
