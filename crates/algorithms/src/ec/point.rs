//! Group elements of a short Weierstrass curve

use core::fmt;
use num_bigint::BigUint;

/// A point of the curve group in affine coordinates
///
/// The identity (point at infinity) is its own variant; no coordinate pair
/// stands in for it. Coordinates are canonical residues in `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity, neutral element of the group
    Identity,
    /// A finite point (x, y)
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Finite point from coordinates. Curve membership is not checked; use
    /// [`Curve::point`](super::Curve::point) for a validated constructor.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Finite point from small coordinates
    pub fn from_u64(x: u64, y: u64) -> Self {
        Point::new(BigUint::from(x), BigUint::from(y))
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate of a finite point
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate of a finite point
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Both coordinates of a finite point
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::Identity
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
