//! Construction of domain parameters
//!
//! [`CurveBuilder`] turns a [`CurveConfig`] into [`DomainParameters`]. Fixed
//! curves are validated as given. Search mode walks coefficient pairs over a
//! small prime field, counts the group by enumerating every point, and picks
//! a generator whose order is the largest prime factor of the group size.
//!
//! Enumeration and order computation are brute force, so search mode is
//! limited to fields with at most [`MAX_ENUMERABLE_MODULUS`] elements.

use super::config::{CurveConfig, FixedCurve, SearchConfig};
use super::curve::{is_singular, Curve};
use super::domain::DomainParameters;
use super::point::Point;
use crate::error::{validate, Error, Result};
use crate::field::{prime, PrimeField};
use ecgroup_params::search::{MIN_FIELD_MODULUS, MIN_GENERATOR_ORDER};
use ecgroup_params::{DEFAULT_MAX_COFACTOR, MAX_ENUMERABLE_MODULUS};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::{debug, trace};

/// Builds [`DomainParameters`] from a [`CurveConfig`]
#[derive(Clone, Debug, Default)]
pub struct CurveBuilder {
    config: CurveConfig,
}

impl CurveBuilder {
    /// Create a builder for `config`
    pub fn new(config: CurveConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder was created with
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Validate or search, then return the domain parameters
    pub fn build(&self) -> Result<DomainParameters> {
        match &self.config {
            CurveConfig::Fixed(fixed) => build_fixed(fixed),
            CurveConfig::Search(search) => build_search(search),
        }
    }
}

fn build_fixed(fixed: &FixedCurve) -> Result<DomainParameters> {
    let curve = Curve::new(fixed.p.clone(), &fixed.a, &fixed.b)?;
    let generator = curve.point(fixed.g_x.clone(), fixed.g_y.clone())?;
    check_fixed_order(&curve, &fixed.n)?;
    let domain = DomainParameters::new(curve, generator, fixed.n.clone())?;
    debug!(
        name = fixed.name.as_deref().unwrap_or("unnamed"),
        bits = domain.curve().field().bits(),
        "validated fixed curve"
    );
    Ok(domain)
}

/// Reject a generator order too small for the curve
///
/// The group size of a fixed curve is unknown, so the cofactor is bounded
/// through Hasse's theorem: #E ≤ p + 1 + ⌊2√p⌋.
fn check_fixed_order(curve: &Curve, n: &BigUint) -> Result<()> {
    if n < &BigUint::from(MIN_GENERATOR_ORDER) {
        return Err(Error::domain(
            "fixed curve",
            format!("generator order {} is below {}", n, MIN_GENERATOR_ORDER),
        ));
    }
    let p = curve.modulus();
    let max_group_size = p + 1u32 + (p * 4u32).sqrt();
    let max_cofactor = &max_group_size / n;
    if max_cofactor > BigUint::from(DEFAULT_MAX_COFACTOR) {
        return Err(Error::domain(
            "fixed curve",
            format!(
                "generator order {} allows a cofactor up to {}, above {}",
                n, max_cofactor, DEFAULT_MAX_COFACTOR
            ),
        ));
    }
    Ok(())
}

fn build_search(search: &SearchConfig) -> Result<DomainParameters> {
    let p = &search.modulus;
    validate::parameter(
        p >= &BigUint::from(MIN_FIELD_MODULUS) && prime::is_probable_prime(p),
        "modulus",
        "must be a prime greater than 3",
    )?;
    check_enumerable(p)?;
    validate::parameter(search.max_cofactor >= 1, "max_cofactor", "must be at least 1")?;

    let field = PrimeField::new(p.clone())?;
    for (a, b) in candidate_coefficients(&field).take(search.max_candidates) {
        let curve = Curve::from_reduced(field.clone(), a.clone(), b.clone())?;
        let points = enumerate_points(&curve)?;
        let group_size = BigUint::from(points.len()) + 1u32;

        match select_generator(&curve, &points, &group_size, search.max_cofactor) {
            Ok((generator, order)) => {
                debug!(%a, %b, %group_size, %generator, %order, "selected curve");
                return DomainParameters::new(curve, generator, order)?.with_group_size(group_size);
            }
            Err(err) => {
                trace!(%a, %b, %group_size, error = %err, "rejected coefficients");
            }
        }
    }

    Err(Error::domain(
        "search",
        format!(
            "no generator of acceptable prime order among the first {} coefficient pairs",
            search.max_candidates
        ),
    ))
}

fn check_enumerable(p: &BigUint) -> Result<()> {
    if p > &BigUint::from(MAX_ENUMERABLE_MODULUS) {
        return Err(Error::domain(
            "enumerate",
            format!(
                "field of {} bits is too large to enumerate; supply a fixed curve",
                p.bits()
            ),
        ));
    }
    Ok(())
}

/// Non-singular coefficient pairs in search order
///
/// For b = 1, 2, … the pairs (1, b) and (b, 1) are produced, singular pairs
/// skipped and (1, 1) emitted once.
pub fn candidate_coefficients(field: &PrimeField) -> CandidateCoefficients<'_> {
    CandidateCoefficients {
        field,
        next: BigUint::one(),
        pending: None,
    }
}

/// Iterator returned by [`candidate_coefficients`]
#[derive(Debug)]
pub struct CandidateCoefficients<'a> {
    field: &'a PrimeField,
    next: BigUint,
    pending: Option<(BigUint, BigUint)>,
}

impl Iterator for CandidateCoefficients<'_> {
    type Item = (BigUint, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pair) = self.pending.take() {
            return Some(pair);
        }
        let one = BigUint::one();
        while self.field.contains(&self.next) {
            let b = self.next.clone();
            self.next += 1u32;

            let first = (!is_singular(self.field, &one, &b)).then(|| (one.clone(), b.clone()));
            let second = (b != one && !is_singular(self.field, &b, &one)).then(|| (b, one.clone()));
            match (first, second) {
                (Some(f), s) => {
                    self.pending = s;
                    return Some(f);
                }
                (None, Some(s)) => return Some(s),
                (None, None) => continue,
            }
        }
        None
    }
}

/// First non-singular coefficient pair (A, B)
///
/// Fails for a degenerate field: a modulus that is not a prime above 3.
pub fn find_parameters(field: &PrimeField) -> Result<(BigUint, BigUint)> {
    let p = field.modulus();
    validate::domain(
        p >= &BigUint::from(MIN_FIELD_MODULUS) && prime::is_probable_prime(p),
        "find_parameters",
        "degenerate field: modulus must be a prime greater than 3",
    )?;
    candidate_coefficients(field)
        .next()
        .ok_or_else(|| {
            Error::domain("find_parameters", "field admits no non-singular coefficients")
        })
}

/// Every finite point, x ascending and the smaller root first
pub fn enumerate_points(curve: &Curve) -> Result<Vec<Point>> {
    let p = curve.modulus();
    check_enumerable(p)?;
    let field = curve.field();

    let mut points = Vec::new();
    let mut x = BigUint::zero();
    while &x < p {
        if let Some((lo, hi)) = field.sqrt(&curve.rhs(&x)) {
            let distinct = lo != hi;
            points.push(Point::new(x.clone(), lo));
            if distinct {
                points.push(Point::new(x.clone(), hi));
            }
        }
        x += 1u32;
    }
    Ok(points)
}

/// The neutral element, obtained as P + (−P) through the group law
pub fn build_identity(curve: &Curve, point: &Point) -> Result<Point> {
    let identity = curve.add(point, &curve.negate(point)?)?;
    if !identity.is_identity() {
        return Err(Error::domain("build_identity", "P + (−P) is not the identity"));
    }
    Ok(identity)
}

/// Exact order of `point` in a group of `group_size` elements
///
/// `factors` is the prime factorization of `group_size`. The order is found
/// by stripping prime factors while the point stays annihilated.
pub fn point_order(
    curve: &Curve,
    point: &Point,
    group_size: &BigUint,
    factors: &[(BigUint, u32)],
) -> Result<BigUint> {
    validate::domain(
        curve.scalar_mul(group_size, point)?.is_identity(),
        "point_order",
        "group size does not annihilate the point",
    )?;

    let mut order = group_size.clone();
    for (q, exponent) in factors {
        for _ in 0..*exponent {
            let (reduced, rem) = order.div_rem(q);
            if !rem.is_zero() || !curve.scalar_mul(&reduced, point)?.is_identity() {
                break;
            }
            order = reduced;
        }
    }
    Ok(order)
}

/// First candidate whose order is the largest prime factor of the group size
///
/// Fails when that prime leaves a cofactor above `max_cofactor`, when it
/// equals p (anomalous curve), or when no candidate has that order.
pub fn select_generator(
    curve: &Curve,
    candidates: &[Point],
    group_size: &BigUint,
    max_cofactor: u32,
) -> Result<(Point, BigUint)> {
    let factors = prime::factorize(group_size);
    let largest = match factors.last() {
        Some((q, _)) => q.clone(),
        None => return Err(Error::domain("select_generator", "group is trivial")),
    };

    let cofactor = group_size / &largest;
    if cofactor > BigUint::from(max_cofactor) {
        return Err(Error::domain(
            "select_generator",
            format!(
                "largest prime factor {} leaves cofactor {} above {}",
                largest, cofactor, max_cofactor
            ),
        ));
    }
    if &largest == curve.modulus() {
        return Err(Error::domain("select_generator", "anomalous curve: order equals p"));
    }

    for point in candidates.iter().filter(|p| !p.is_identity()) {
        if point_order(curve, point, group_size, &factors)? == largest {
            return Ok((point.clone(), largest));
        }
    }
    Err(Error::domain(
        "select_generator",
        format!("no candidate point has order {}", largest),
    ))
}
