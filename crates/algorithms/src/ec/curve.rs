//! Curve y² = x³ + A·x + B over 𝔽ₚ and its group law
//!
//! All operations are exact modular arithmetic on affine coordinates. The
//! group law is evaluated with a fixed branch order:
//!
//! 1. an identity operand returns the other operand
//! 2. P = Q doubles
//! 3. equal x-coordinates (Q = −P) give the identity
//! 4. otherwise the chord formula
//!
//! Scalar multiplication is binary double-and-add, least significant bit
//! first.

use super::point::Point;
use crate::error::{validate, Error, Result};
use crate::field::{prime, PrimeField};
use ecgroup_params::search::MIN_FIELD_MODULUS;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// A non-singular short Weierstrass curve over a prime field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    field: PrimeField,
    a: BigUint,
    b: BigUint,
}

/// Does 4A³ + 27B² vanish mod p?
pub fn is_singular(field: &PrimeField, a: &BigUint, b: &BigUint) -> bool {
    let a3 = field.mul(&field.square(a), a);
    let b2 = field.square(b);
    let disc = field.add(
        &field.mul(&BigUint::from(4u32), &a3),
        &field.mul(&BigUint::from(27u32), &b2),
    );
    disc.is_zero()
}

impl Curve {
    /// Validate and build a curve from a modulus and signed coefficients
    ///
    /// The modulus must be a prime greater than 3 and the reduced
    /// coefficients must give a non-zero discriminant.
    pub fn new(p: BigUint, a: &BigInt, b: &BigInt) -> Result<Self> {
        validate::parameter(
            p >= BigUint::from(MIN_FIELD_MODULUS),
            "modulus",
            "must be a prime greater than 3",
        )?;
        validate::parameter(prime::is_probable_prime(&p), "modulus", "must be prime")?;
        let field = PrimeField::new(p)?;
        let a = field.reduce_signed(a);
        let b = field.reduce_signed(b);
        Self::from_reduced(field, a, b)
    }

    /// Build a curve from coefficients already reduced into the field
    ///
    /// The field is trusted to be prime; only the discriminant is checked.
    pub fn from_reduced(field: PrimeField, a: BigUint, b: BigUint) -> Result<Self> {
        validate::parameter(
            field.contains(&a) && field.contains(&b),
            "coefficients",
            "must be reduced mod p",
        )?;
        if is_singular(&field, &a, &b) {
            return Err(Error::domain("curve", "singular curve: 4A³ + 27B² ≡ 0 (mod p)"));
        }
        Ok(Self { field, a, b })
    }

    /// Coordinate field 𝔽ₚ
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Field modulus p
    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    /// Coefficient A
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient B
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Right-hand side x³ + A·x + B
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b)
    }

    /// Membership test; the identity is always on the curve
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                self.field.contains(x)
                    && self.field.contains(y)
                    && self.field.square(y) == self.rhs(x)
            }
        }
    }

    /// Validated finite point
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        let point = Point::new(x, y);
        if !self.is_on_curve(&point) {
            return Err(Error::param("point", "coordinates do not satisfy the curve equation"));
        }
        Ok(point)
    }

    fn check_reduced(&self, point: &Point) -> Result<()> {
        if let Point::Affine { x, y } = point {
            validate::parameter(
                self.field.contains(x) && self.field.contains(y),
                "point",
                "coordinates must be reduced mod p",
            )?;
        }
        Ok(())
    }

    /// −P = (x, −y)
    pub fn negate(&self, point: &Point) -> Result<Point> {
        self.check_reduced(point)?;
        Ok(match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::new(x.clone(), self.field.neg(y)),
        })
    }

    /// 2P via the tangent line
    pub fn double(&self, point: &Point) -> Result<Point> {
        self.check_reduced(point)?;
        let (x, y) = match point {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (x, y),
        };
        // Vertical tangent
        if y.is_zero() {
            return Ok(Point::Identity);
        }

        let f = &self.field;
        // λ = (3x² + A) / 2y
        let num = f.add(&f.mul(&BigUint::from(3u32), &f.square(x)), &self.a);
        let den = f.add(y, y);
        let lambda = f.div(&num, &den)?;

        let x3 = f.sub(&f.square(&lambda), &f.add(x, x));
        let y3 = f.sub(&f.mul(&lambda, &f.sub(x, &x3)), y);
        Ok(Point::new(x3, y3))
    }

    /// P + Q
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point> {
        self.check_reduced(p)?;
        self.check_reduced(q)?;
        let ((x1, y1), (x2, y2)) = match (p, q) {
            (Point::Identity, _) => return Ok(q.clone()),
            (_, Point::Identity) => return Ok(p.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if p == q {
            return self.double(p);
        }
        if x1 == x2 {
            return Ok(Point::Identity);
        }

        let f = &self.field;
        // λ = (y2 − y1) / (x2 − x1)
        let lambda = f.div(&f.sub(y2, y1), &f.sub(x2, x1))?;
        let x3 = f.sub(&f.sub(&f.square(&lambda), x1), x2);
        let y3 = f.sub(&f.mul(&lambda, &f.sub(x1, &x3)), y1);
        Ok(Point::new(x3, y3))
    }

    /// k·P by double-and-add
    ///
    /// Bits of `k` are consumed from least to most significant; the
    /// accumulator starts at the identity and the addend doubles each step.
    pub fn scalar_mul(&self, k: &BigUint, point: &Point) -> Result<Point> {
        self.check_reduced(point)?;
        let mut acc = Point::Identity;
        if k.is_zero() || point.is_identity() {
            return Ok(acc);
        }

        let bits = k.bits();
        let mut addend = point.clone();
        for i in 0..bits {
            if k.bit(i) {
                acc = self.add(&acc, &addend)?;
            }
            if i + 1 < bits {
                addend = self.double(&addend)?;
            }
        }
        Ok(acc)
    }
}
