//! Known-answer vectors stored as TOML
//!
//! Integers are strings in decimal or `0x` hex, the same convention the
//! curve configuration files use.

use ecgroup_algorithms::{parse_integer, Point};
use num_bigint::BigUint;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Failures while loading or decoding a vector file
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vector file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid integer in field '{field}': {value:?}")]
    Integer { field: &'static str, value: String },

    #[error("unknown curve: {0}")]
    UnknownCurve(String),

    #[error("curve construction failed: {0}")]
    Curve(#[from] ecgroup_algorithms::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// k·G for a named curve
#[derive(Debug, Clone, Deserialize)]
pub struct MultipleVector {
    pub curve: String,
    pub k: String,
    pub x: String,
    pub y: String,
}

/// Shared point agreed by two fixed secrets
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementVector {
    pub curve: String,
    pub secret_a: String,
    pub secret_b: String,
    pub x: String,
    pub y: String,
}

/// A signature and whether it must verify under the key of `secret`
#[derive(Debug, Clone, Deserialize)]
pub struct SignatureVector {
    pub curve: String,
    pub secret: String,
    pub message: String,
    pub r: String,
    pub s: String,
    pub valid: bool,
}

/// Contents of one vector file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VectorFile {
    #[serde(default)]
    pub multiple: Vec<MultipleVector>,
    #[serde(default)]
    pub agreement: Vec<AgreementVector>,
    #[serde(default)]
    pub signature: Vec<SignatureVector>,
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("data")
}

/// Load `name` from the vector data directory
pub fn load(name: &str) -> Result<VectorFile> {
    let path = data_dir().join(name);
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Decode a non-negative integer field
pub fn integer(field: &'static str, value: &str) -> Result<BigUint> {
    parse_integer(value)
        .and_then(|v| v.to_biguint())
        .ok_or_else(|| VectorError::Integer {
            field,
            value: value.to_string(),
        })
}

/// Decode an affine point from its two coordinate fields
pub fn point(x: &str, y: &str) -> Result<Point> {
    Ok(Point::new(integer("x", x)?, integer("y", y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_file_loads() {
        let file = load("curves.toml").unwrap();
        assert!(!file.multiple.is_empty());
        assert!(!file.agreement.is_empty());
        assert!(file.signature.iter().any(|v| v.valid));
        assert!(file.signature.iter().any(|v| !v.valid));
    }

    #[test]
    fn test_integer_forms() {
        assert_eq!(integer("k", "0x2a").unwrap(), BigUint::from(42u32));
        assert_eq!(integer("k", "42").unwrap(), BigUint::from(42u32));
        assert!(matches!(
            integer("k", "-1"),
            Err(VectorError::Integer { field: "k", .. })
        ));
        assert!(integer("k", "0xzz").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load("absent.toml"), Err(VectorError::Io { .. })));
    }
}
