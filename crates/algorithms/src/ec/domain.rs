//! Validated domain parameters: curve, generator and its prime order

use super::builder::build_identity;
use super::curve::Curve;
use super::point::Point;
use crate::error::{validate, Error, Result};
use crate::field::{prime, PrimeField};
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// Everything both parties of a protocol must agree on
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainParameters {
    curve: Curve,
    generator: Point,
    order: BigUint,
    scalars: PrimeField,
    identity: Point,
    group_size: Option<BigUint>,
}

impl DomainParameters {
    /// Validate a curve, generator and generator order
    ///
    /// Checks that G is a finite point on the curve, that n is a prime other
    /// than p, and that n·G is the identity.
    pub fn new(curve: Curve, generator: Point, order: BigUint) -> Result<Self> {
        if generator.is_identity() {
            return Err(Error::domain("domain", "generator is the identity"));
        }
        validate::domain(curve.is_on_curve(&generator), "domain", "generator is not on the curve")?;
        validate::domain(prime::is_probable_prime(&order), "domain", "order is not prime")?;
        validate::domain(&order != curve.modulus(), "domain", "anomalous curve: order equals p")?;
        validate::domain(
            curve.scalar_mul(&order, &generator)?.is_identity(),
            "domain",
            "n·G is not the identity",
        )?;

        let identity = build_identity(&curve, &generator)?;
        let scalars = PrimeField::new(order.clone())?;
        Ok(Self {
            curve,
            generator,
            order,
            scalars,
            identity,
            group_size: None,
        })
    }

    /// Record the full group size; must be a multiple of n
    pub fn with_group_size(mut self, group_size: BigUint) -> Result<Self> {
        validate::domain(
            !group_size.is_zero() && group_size.is_multiple_of(&self.order),
            "domain",
            "group size is not a multiple of the order",
        )?;
        self.group_size = Some(group_size);
        Ok(self)
    }

    /// The curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Base point G
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Order n of G
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Arithmetic mod n
    pub fn scalars(&self) -> &PrimeField {
        &self.scalars
    }

    /// Neutral element, as produced by the group law
    pub fn identity(&self) -> &Point {
        &self.identity
    }

    /// Number of points on the curve, when known
    pub fn group_size(&self) -> Option<&BigUint> {
        self.group_size.as_ref()
    }

    /// Group size divided by n, when the group size is known
    pub fn cofactor(&self) -> Option<BigUint> {
        self.group_size.as_ref().map(|h| h / &self.order)
    }

    /// k·G
    pub fn mul_generator(&self, k: &BigUint) -> Result<Point> {
        self.curve.scalar_mul(k, &self.generator)
    }

    /// Uniform scalar in [1, n − 1]
    pub fn random_scalar<R: CryptoRng + RngCore>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_range(&BigUint::one(), &self.order)
    }

    /// Check that `scalar` lies in [1, n − 1]
    pub fn validate_scalar(&self, name: &'static str, scalar: &BigUint) -> Result<()> {
        validate::nonzero_below(name, scalar, &self.order)
    }

    /// Full public-point validation: finite, on the curve, in the subgroup
    pub fn validate_public_point(&self, point: &Point) -> Result<()> {
        if point.is_identity() {
            return Err(Error::param("public point", "is the identity"));
        }
        if !self.curve.is_on_curve(point) {
            return Err(Error::param("public point", "not on the curve"));
        }
        if !self.curve.scalar_mul(&self.order, point)?.is_identity() {
            return Err(Error::param("public point", "not in the subgroup generated by G"));
        }
        Ok(())
    }
}
