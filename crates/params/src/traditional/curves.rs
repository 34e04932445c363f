//! Short Weierstrass curve constants
//!
//! Every curve is y² = x³ + a·x + b over 𝔽ₚ. Values are big-endian hex
//! strings without a `0x` prefix.

/// Domain constants for a named curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConstants {
    /// Human readable curve name
    pub name: &'static str,
    /// Field modulus p
    pub p: &'static str,
    /// Coefficient a, already reduced mod p
    pub a: &'static str,
    /// Coefficient b, already reduced mod p
    pub b: &'static str,
    /// Generator x-coordinate
    pub g_x: &'static str,
    /// Generator y-coordinate
    pub g_y: &'static str,
    /// Order n of the generator
    pub n: &'static str,
}

/// Demonstration curve y² = x³ − 4 over 𝔽₂₁₁.
///
/// - p = 211, a = 0, b = −4 ≡ 207
/// - G = (2, 2)
/// - n = 241, which is also the full group size (cofactor 1)
pub const DEMO_P211: CurveConstants = CurveConstants {
    name: "demo-p211",
    p: "d3",
    a: "00",
    b: "cf",
    g_x: "02",
    g_y: "02",
    n: "f1",
};

/// SEC 2 secp256k1
pub const SECP256K1: CurveConstants = CurveConstants {
    name: "secp256k1",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "00",
    b: "07",
    g_x: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    g_y: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
};

/// NIST P-256 (secp256r1), a = −3
pub const NIST_P256: CurveConstants = CurveConstants {
    name: "nist-p256",
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    g_x: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    g_y: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
};
