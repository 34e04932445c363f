//! Validation utilities for field and curve parameters

use super::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a domain condition
#[inline(always)]
pub fn domain(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::domain(context, reason));
    }
    Ok(())
}

/// Validate that `value` lies in the half-open range `[1, bound)`
#[inline]
pub fn nonzero_below(name: &'static str, value: &BigUint, bound: &BigUint) -> Result<()> {
    if value.is_zero() {
        return Err(Error::param(name, "must not be zero"));
    }
    if value >= bound {
        return Err(Error::param(
            name,
            format!("must be smaller than {}", bound),
        ));
    }
    Ok(())
}
