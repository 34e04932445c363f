//! Prime-field and elliptic-curve group arithmetic
//!
//! This crate provides the arithmetic layer of the ecgroup library:
//!
//! - [`field`]: modular arithmetic over an arbitrary-precision modulus,
//!   including inverses, square roots and primality testing
//! - [`ec`]: short Weierstrass curves, their group law, validated domain
//!   parameters and the builder that produces them
//! - [`hash`]: the message hash used by signatures
//!
//! All integers are `num_bigint::BigUint`, so the same code serves a
//! 211-element teaching curve and 256-bit standard curves.
//!
//! # Security
//!
//! The arithmetic is exact but not constant time. Secret scalars are
//! handled by higher layers, which keep them in zeroizing storage.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Modular arithmetic
pub mod field;
pub use field::PrimeField;

// Hash functions
pub mod hash;
pub use hash::{HashFunction, Sha256, Sha512};

// Elliptic curve group
pub mod ec;
pub use ec::{
    enumerate_points, parse_integer, Curve, CurveBuilder, CurveConfig, DomainParameters, FixedCurve, Point,
    SearchConfig,
};
