//! Curve configuration values
//!
//! A [`CurveConfig`] tells [`CurveBuilder`](super::CurveBuilder) either to
//! validate a fully specified curve or to search for coefficients over a
//! small prime field. With the `serde` feature the types can be read from
//! TOML or JSON; integers are written as strings in decimal or `0x` hex.

use crate::error::{Error, Result};
use ecgroup_params::{CurveConstants, DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_COFACTOR, DEMO_P211};
use num_bigint::{BigInt, BigUint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How domain parameters are obtained
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "lowercase"))]
pub enum CurveConfig {
    /// Every parameter supplied by the caller
    Fixed(FixedCurve),
    /// Coefficients and generator searched over a small field
    Search(SearchConfig),
}

/// A fully specified curve y² = x³ + a·x + b with generator and order
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedCurve {
    /// Optional label, used in logs only
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// Field modulus
    #[cfg_attr(feature = "serde", serde(with = "int_string::unsigned"))]
    pub p: BigUint,
    /// Coefficient a; negative values are reduced mod p
    #[cfg_attr(feature = "serde", serde(with = "int_string::signed"))]
    pub a: BigInt,
    /// Coefficient b; negative values are reduced mod p
    #[cfg_attr(feature = "serde", serde(with = "int_string::signed"))]
    pub b: BigInt,
    /// Generator x-coordinate
    #[cfg_attr(feature = "serde", serde(with = "int_string::unsigned"))]
    pub g_x: BigUint,
    /// Generator y-coordinate
    #[cfg_attr(feature = "serde", serde(with = "int_string::unsigned"))]
    pub g_y: BigUint,
    /// Order of the generator
    #[cfg_attr(feature = "serde", serde(with = "int_string::unsigned"))]
    pub n: BigUint,
}

/// Parameters of a coefficient search
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Field modulus; must be an enumerable prime
    #[cfg_attr(feature = "serde", serde(with = "int_string::unsigned"))]
    pub modulus: BigUint,
    /// Largest accepted group size / generator order ratio
    #[cfg_attr(feature = "serde", serde(default = "default_max_cofactor"))]
    pub max_cofactor: u32,
    /// Coefficient pairs tried before giving up
    #[cfg_attr(feature = "serde", serde(default = "default_max_candidates"))]
    pub max_candidates: usize,
}

#[cfg(feature = "serde")]
fn default_max_cofactor() -> u32 {
    DEFAULT_MAX_COFACTOR
}

#[cfg(feature = "serde")]
fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}

impl FixedCurve {
    /// y² = x³ − 4 over 𝔽₂₁₁, G = (2, 2), n = 241
    pub fn demo() -> Self {
        Self {
            name: Some(DEMO_P211.name.to_string()),
            p: BigUint::from(211u32),
            a: BigInt::from(0),
            b: BigInt::from(-4),
            g_x: BigUint::from(2u32),
            g_y: BigUint::from(2u32),
            n: BigUint::from(241u32),
        }
    }

    /// Parse a named curve from its hex constants
    pub fn from_constants(constants: &CurveConstants) -> Result<Self> {
        Ok(Self {
            name: Some(constants.name.to_string()),
            p: parse_hex("p", constants.p)?,
            a: parse_hex("a", constants.a)?.into(),
            b: parse_hex("b", constants.b)?.into(),
            g_x: parse_hex("g_x", constants.g_x)?,
            g_y: parse_hex("g_y", constants.g_y)?,
            n: parse_hex("n", constants.n)?,
        })
    }
}

impl SearchConfig {
    /// Search over `modulus` with the default limits
    pub fn new(modulus: BigUint) -> Self {
        Self {
            modulus,
            max_cofactor: DEFAULT_MAX_COFACTOR,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Override the cofactor limit
    pub fn with_max_cofactor(mut self, max_cofactor: u32) -> Self {
        self.max_cofactor = max_cofactor;
        self
    }

    /// Override the candidate limit
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

impl CurveConfig {
    /// Configuration for a named curve from `ecgroup-params`
    pub fn named(constants: &CurveConstants) -> Result<Self> {
        FixedCurve::from_constants(constants).map(CurveConfig::Fixed)
    }

    /// Search configuration with default limits
    pub fn search(modulus: u64) -> Self {
        CurveConfig::Search(SearchConfig::new(BigUint::from(modulus)))
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        CurveConfig::Fixed(FixedCurve::demo())
    }
}

fn parse_hex(name: &'static str, hex: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16)
        .ok_or_else(|| Error::param(name, "not a hexadecimal integer"))
}

/// Parse a decimal or `0x`-prefixed hexadecimal integer, optionally signed
pub fn parse_integer(text: &str) -> Option<BigInt> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16)?,
        None => BigUint::parse_bytes(digits.as_bytes(), 10)?,
    };
    let value = BigInt::from(magnitude);
    Some(if negative { -value } else { value })
}

#[cfg(feature = "serde")]
mod int_string {
    //! Integers as strings, since TOML and JSON numbers cannot hold them

    pub mod unsigned {
        use num_bigint::BigUint;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&value.to_str_radix(10))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<BigUint, D::Error> {
            let text = String::deserialize(deserializer)?;
            super::super::parse_integer(&text)
                .and_then(|v| v.to_biguint())
                .ok_or_else(|| de::Error::custom(format!("invalid unsigned integer '{}'", text)))
        }
    }

    pub mod signed {
        use num_bigint::BigInt;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&value.to_str_radix(10))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
            let text = String::deserialize(deserializer)?;
            super::super::parse_integer(&text)
                .ok_or_else(|| de::Error::custom(format!("invalid integer '{}'", text)))
        }
    }
}
