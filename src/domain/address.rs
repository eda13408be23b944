//! On-chain account address.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A 32-byte on-chain account address (token mint, authority, user wallet).
///
/// All 32-byte sequences are valid addresses, so construction is
/// infallible. Base58 formatting and program-derived-address math belong
/// to the networking layer, not here.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32 bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First four bytes are enough to tell addresses apart in logs.
        write!(
            f,
            "Address({:02x}{:02x}{:02x}{:02x}…)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let addr = Address::from_bytes([7u8; 32]);
        assert_eq!(*addr.as_bytes(), [7u8; 32]);
    }

    #[test]
    fn equality_is_byte_equality() {
        assert_eq!(Address::from_bytes([1u8; 32]), Address::from_bytes([1u8; 32]));
        assert_ne!(Address::from_bytes([1u8; 32]), Address::from_bytes([2u8; 32]));
    }

    #[test]
    fn debug_is_abbreviated() {
        let dbg = format!("{:?}", Address::from_bytes([0xabu8; 32]));
        assert!(dbg.starts_with("Address(abab"));
    }

    #[test]
    fn serde_round_trip() {
        let addr = Address::from_bytes([9u8; 32]);
        let Ok(json) = serde_json::to_string(&addr) else {
            panic!("expected Ok");
        };
        let Ok(back) = serde_json::from_str::<Address>(&json) else {
            panic!("expected Ok");
        };
        assert_eq!(addr, back);
    }
}
