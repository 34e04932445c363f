//! Modular integer arithmetic
//!
//! `PrimeField` implements arithmetic modulo an arbitrary-precision modulus.
//! It backs both the coordinate field 𝔽ₚ of a curve and the scalar ring
//! ℤ/nℤ used by the signature scheme. Values are `BigUint`, so products of
//! two residues never wrap regardless of the modulus width.
//!
//! Every operation returns a value normalized into `[0, m)`.

pub mod prime;

use crate::error::{validate, Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Arithmetic modulo `m`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Create the residue ring for `modulus` (must be at least 2)
    ///
    /// Primality is not checked here; callers that rely on field properties
    /// (square roots, guaranteed inverses) validate it with
    /// [`prime::is_probable_prime`].
    pub fn new(modulus: BigUint) -> Result<Self> {
        validate::parameter(modulus >= BigUint::from(2u32), "modulus", "must be at least 2")?;
        Ok(Self { modulus })
    }

    /// Build from a small modulus
    pub fn from_u64(modulus: u64) -> Result<Self> {
        Self::new(BigUint::from(modulus))
    }

    /// The modulus m
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Number of bits in the modulus
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Is `value` already a canonical residue?
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// value mod m
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Reduce a signed integer into `[0, m)`
    pub fn reduce_signed(&self, value: &BigInt) -> BigUint {
        let m = BigInt::from_biguint(Sign::Plus, self.modulus.clone());
        // mod_floor keeps the sign of the divisor, so the result is non-negative
        value
            .mod_floor(&m)
            .to_biguint()
            .unwrap_or_default()
    }

    /// (a + b) mod m
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// (a − b) mod m
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.modulus - (b - a)
        }
    }

    /// (a · b) mod m
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// a² mod m
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// −a mod m
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    /// aᵉ mod m
    pub fn pow(&self, a: &BigUint, exponent: &BigUint) -> BigUint {
        a.modpow(exponent, &self.modulus)
    }

    /// Multiplicative inverse via the extended Euclidean algorithm
    ///
    /// Fails when gcd(a, m) ≠ 1. For a prime modulus that happens only for
    /// a ≡ 0.
    pub fn inv(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::arithmetic("inverse", "zero has no inverse"));
        }

        let m = BigInt::from_biguint(Sign::Plus, self.modulus.clone());
        let (mut old_r, mut r) = (BigInt::from_biguint(Sign::Plus, a), m.clone());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

        while !r.is_zero() {
            let q = &old_r / &r;
            let next_r = &old_r - &q * &r;
            old_r = core::mem::replace(&mut r, next_r);
            let next_s = &old_s - &q * &s;
            old_s = core::mem::replace(&mut s, next_s);
        }

        // old_r = gcd(a, m) and old_s·a ≡ gcd (mod m)
        if !old_r.is_one() {
            return Err(Error::arithmetic(
                "inverse",
                format!("operand shares the factor {} with the modulus", old_r),
            ));
        }
        Ok(self.reduce_signed(&old_s))
    }

    /// a / b mod m
    pub fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint> {
        Ok(self.mul(a, &self.inv(b)?))
    }

    /// Euler's criterion: is `a` a quadratic residue (zero included)?
    ///
    /// Meaningful only for an odd prime modulus.
    pub fn is_square(&self, a: &BigUint) -> bool {
        let a = self.reduce(a);
        if a.is_zero() || self.modulus == BigUint::from(2u32) {
            return true;
        }
        let exponent = (&self.modulus - 1u32) >> 1;
        self.pow(&a, &exponent).is_one()
    }

    /// Both square roots of `a`, smaller first, or `None` for a non-residue
    ///
    /// Tonelli–Shanks with the p ≡ 3 (mod 4) shortcut. The candidate root is
    /// verified by squaring, so a composite modulus yields `None` rather
    /// than a wrong answer.
    pub fn sqrt(&self, a: &BigUint) -> Option<(BigUint, BigUint)> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Some((BigUint::zero(), BigUint::zero()));
        }
        if self.modulus == BigUint::from(2u32) {
            return Some((a.clone(), a));
        }
        if !self.is_square(&a) {
            return None;
        }

        let p = &self.modulus;
        let root = if (p % 4u32) == BigUint::from(3u32) {
            self.pow(&a, &((p + 1u32) >> 2))
        } else {
            self.tonelli_shanks(&a)?
        };

        if self.square(&root) != a {
            return None;
        }
        let other = self.neg(&root);
        if root <= other {
            Some((root, other))
        } else {
            Some((other, root))
        }
    }

    fn tonelli_shanks(&self, a: &BigUint) -> Option<BigUint> {
        let p = &self.modulus;
        let one = BigUint::one();

        // p − 1 = q · 2ˢ with q odd
        let p_minus_1 = p - 1u32;
        let s = p_minus_1.trailing_zeros()?;
        let q = &p_minus_1 >> s;

        // Any quadratic non-residue z
        let mut z = BigUint::from(2u32);
        while self.is_square(&z) {
            z += 1u32;
            if &z >= p {
                return None;
            }
        }

        let mut m = s;
        let mut c = self.pow(&z, &q);
        let mut t = self.pow(a, &q);
        let mut r = self.pow(a, &((&q + 1u32) >> 1));

        while !t.is_one() {
            // Least i in (0, m) with t^(2^i) = 1
            let mut i = 0u64;
            let mut t2i = t.clone();
            while !t2i.is_one() {
                t2i = self.square(&t2i);
                i += 1;
                if i == m {
                    return None;
                }
            }
            let b = self.pow(&c, &(&one << (m - i - 1)));
            m = i;
            c = self.square(&b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }
        Some(r)
    }
}
