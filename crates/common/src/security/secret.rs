//! Secret scalar type with guaranteed zeroization
//!
//! `BigUint` owns its limbs privately and cannot be wiped in place, so the
//! secret is stored as big-endian bytes in a zeroizing buffer and an integer
//! is materialized only for the duration of an arithmetic operation.

use core::fmt;
use num_bigint::BigUint;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Private scalar (a private key or an ephemeral nonce)
///
/// This type provides:
/// - Automatic zeroization on drop
/// - A redacted `Debug` implementation
/// - Constant-time equality
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretScalar {
    bytes: Vec<u8>,
}

impl SecretScalar {
    /// Wrap an integer as a secret scalar
    pub fn new(value: &BigUint) -> Self {
        Self {
            bytes: value.to_bytes_be(),
        }
    }

    /// Rebuild the secret as an integer for arithmetic
    ///
    /// The returned value is not zeroized; keep its lifetime short.
    pub fn expose(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Number of significant bits in the scalar
    pub fn bits(&self) -> u64 {
        self.expose().bits()
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

impl From<BigUint> for SecretScalar {
    fn from(value: BigUint) -> Self {
        Self::new(&value)
    }
}

impl ConstantTimeEq for SecretScalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from(super::compare::ct_eq_uint(&self.expose(), &other.expose()) as u8)
    }
}

impl PartialEq for SecretScalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretScalar {}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretScalar([REDACTED])")
    }
}
