//! Shared fixtures for the ecgroup integration tests
//!
//! The [`vectors`] module loads known-answer data kept in TOML next to this
//! crate. [`domain`] builds the named curves the vectors refer to.

use ecgroup_algorithms::{CurveBuilder, CurveConfig, DomainParameters};
use ecgroup_params::{CurveConstants, DEMO_P211, NIST_P256, SECP256K1};
use std::sync::Arc;

pub mod vectors;

pub use vectors::VectorError;

/// Named curves known to the vector files
pub const NAMED_CURVES: [CurveConstants; 3] = [DEMO_P211, SECP256K1, NIST_P256];

/// Build the domain for a named curve
pub fn domain(name: &str) -> Result<Arc<DomainParameters>, VectorError> {
    let constants = NAMED_CURVES
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| VectorError::UnknownCurve(name.to_string()))?;
    let config = CurveConfig::named(constants)?;
    Ok(Arc::new(CurveBuilder::new(config).build()?))
}
