//! Elliptic curve group over a prime field
//!
//! Short Weierstrass curves y² = x³ + A·x + B over 𝔽ₚ with exact affine
//! arithmetic on arbitrary-precision integers. The module is split into:
//!
//! - [`point`]: group elements, with the identity as a tagged variant
//! - [`curve`]: the curve and its group law
//! - [`domain`]: validated generator and prime order
//! - [`config`] and [`builder`]: obtaining domain parameters, either from
//!   fixed constants or by searching a small field
//!
//! This arithmetic is not constant time.

pub mod builder;
pub mod config;
pub mod curve;
pub mod domain;
pub mod point;

pub use builder::{
    build_identity, candidate_coefficients, enumerate_points, find_parameters, point_order,
    select_generator, CurveBuilder,
};
pub use config::{parse_integer, CurveConfig, FixedCurve, SearchConfig};
pub use curve::Curve;
pub use domain::DomainParameters;
pub use point::Point;
