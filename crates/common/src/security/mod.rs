//! Security primitives for handling private scalars
//!
//! Private scalars are kept in zeroizing storage and compared without
//! data-dependent early exits.

pub mod compare;
pub mod secret;

pub use compare::{ct_eq, ct_eq_uint};
pub use secret::SecretScalar;
