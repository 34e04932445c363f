//! Constant values for ecgroup
//!
//! Curve constants are stored as big-endian hexadecimal strings so that the
//! crate stays dependency free; `ecgroup-algorithms` parses them into
//! arbitrary-precision integers when a domain is built.

#![no_std]
#![forbid(unsafe_code)]

pub mod search;
pub mod traditional;

pub use search::{DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_COFACTOR, MAX_ENUMERABLE_MODULUS};
pub use traditional::curves::{CurveConstants, DEMO_P211, NIST_P256, SECP256K1};
pub use traditional::ecdh::{DEMO_MESSAGE, DEMO_PARTY_A_SECRET, DEMO_PARTY_B_SECRET};
