//! # ecgroup
//!
//! Elliptic-curve group arithmetic over prime fields, with Diffie–Hellman
//! key agreement and ECDSA-style signatures built on top.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecgroup = "0.3"
//! ```
//!
//! ## Features
//!
//! - `serde`: read and write [`CurveConfig`](algorithms::CurveConfig)
//!   values, with integers as decimal or `0x` hex strings
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecgroup-api`]: error type and protocol traits
//! - [`ecgroup-common`]: zeroizing secret scalars, constant-time comparison
//! - [`ecgroup-params`]: named curve constants and builder defaults
//! - [`ecgroup-algorithms`]: field arithmetic, curve group, domain builder
//! - [`ecgroup-kex`]: ECDH key agreement
//! - [`ecgroup-sign`]: ECDSA-style signatures
//!
//! ## Example
//!
//! ```
//! use ecgroup::prelude::*;
//! use std::sync::Arc;
//!
//! let domain = Arc::new(CurveBuilder::new(CurveConfig::default()).build()?);
//! let mut rng = rand::rngs::OsRng;
//!
//! let mut alice = KeyPair::generate(domain.clone(), &mut rng)?;
//! let mut bob = KeyPair::generate(domain.clone(), &mut rng)?;
//! let alice_public = alice.public_key().clone();
//! alice.agree(bob.public_key())?;
//! bob.agree(&alice_public)?;
//! assert!(alice.shares_secret_with(&bob));
//!
//! let ecdsa: Ecdsa = Ecdsa::new(domain);
//! let signature = ecdsa.sign(b"Hello, world!", &alice, &mut rng)?;
//! assert!(ecdsa.verify(b"Hello, world!", &signature, &alice_public));
//! # Ok::<(), ecgroup::api::Error>(())
//! ```

#![forbid(unsafe_code)]

pub use ecgroup_algorithms as algorithms;
pub use ecgroup_api as api;
pub use ecgroup_common as common;
pub use ecgroup_kex as kex;
pub use ecgroup_params as params;
pub use ecgroup_sign as sign;

pub use num_bigint;
pub use rand;

/// Common imports for ecgroup users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{KeyAgreement, Signature};
    pub use crate::algorithms::HashFunction;

    // Curve group and domain construction
    pub use crate::algorithms::{
        Curve, CurveBuilder, CurveConfig, DomainParameters, FixedCurve, Point, PrimeField,
        SearchConfig, Sha256,
    };

    // Protocols
    pub use crate::kex::{Ecdh, KeyPair, PublicKey, SharedSecret};
    pub use crate::sign::{Ecdsa, EcdsaSignature};

    // Re-export security types
    pub use crate::common::SecretScalar;

    pub use num_bigint::BigUint;
}
