//! Explicit rounding direction for integer division.

/// Rounding direction for division on raw integer amounts.
///
/// Every division in the pricing kernel takes an explicit `Rounding`
/// so that precision loss is always a visible decision. The convention
/// is to round against the trader: outputs round [`Down`](Self::Down),
/// required inputs round [`Up`](Self::Up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards zero (floor).
    Down,
    /// Round towards positive infinity (ceiling).
    Up,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_and_eq() {
        let r = Rounding::Up;
        let s = r;
        assert_eq!(r, s);
        assert_ne!(Rounding::Up, Rounding::Down);
    }
}
