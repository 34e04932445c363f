//! Defaults for searching curve coefficients over small fields

/// Largest field modulus for which points are enumerated exhaustively.
///
/// Enumeration and order computation are brute force; anything larger must
/// be supplied as a fixed curve.
pub const MAX_ENUMERABLE_MODULUS: u64 = 1 << 20;

/// Largest accepted ratio between the group size and the generator order.
pub const DEFAULT_MAX_COFACTOR: u32 = 4;

/// Number of non-singular coefficient pairs tried before giving up.
pub const DEFAULT_MAX_CANDIDATES: usize = 64;

/// Moduli below this bound cannot carry a short Weierstrass curve.
pub const MIN_FIELD_MODULUS: u64 = 5;

/// Smallest generator order accepted for a fixed curve.
pub const MIN_GENERATOR_ORDER: u64 = 5;
