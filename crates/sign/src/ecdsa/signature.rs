//! The (r, s) signature value

use core::fmt;
use num_bigint::BigUint;

/// ECDSA signature (r, s), both in [1, n − 1] when produced by signing
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EcdsaSignature {
    r: BigUint,
    s: BigUint,
}

impl EcdsaSignature {
    /// Wrap raw components; range checks happen at verification
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// r = R.x mod n
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// s = k⁻¹(h + d·r) mod n
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Is s in the lower half, s ≤ ⌊n / 2⌋?
    pub fn is_low_s(&self, order: &BigUint) -> bool {
        self.s <= (order >> 1)
    }

    /// The low-s form of this signature
    ///
    /// (r, s) and (r, n − s) both verify for the same message and key.
    /// Returning the low form lets callers that need a canonical encoding
    /// pick one; verification accepts either.
    pub fn normalize_s(&self, order: &BigUint) -> Self {
        if self.is_low_s(order) || self.s >= *order {
            self.clone()
        } else {
            Self::new(self.r.clone(), order - &self.s)
        }
    }
}

impl fmt::Display for EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.s)
    }
}
