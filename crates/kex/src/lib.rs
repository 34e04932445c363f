//! Key agreement over elliptic-curve groups
//!
//! Each party holds a [`KeyPair`] built under shared
//! [`DomainParameters`](ecgroup_algorithms::DomainParameters). Exchanging
//! public keys and combining them with the local secret yields the same
//! curve point on both sides.
//!
//! ```
//! use ecgroup_algorithms::CurveBuilder;
//! use ecgroup_kex::KeyPair;
//! use num_bigint::BigUint;
//! use std::sync::Arc;
//!
//! let domain = Arc::new(CurveBuilder::default().build().unwrap());
//! let mut alice = KeyPair::from_secret(domain.clone(), &BigUint::from(58u32)).unwrap();
//! let mut bob = KeyPair::from_secret(domain, &BigUint::from(42u32)).unwrap();
//!
//! let alice_public = alice.public_key().clone();
//! alice.agree(bob.public_key()).unwrap();
//! bob.agree(&alice_public).unwrap();
//! assert!(alice.shares_secret_with(&bob));
//! ```

#![forbid(unsafe_code)]

pub mod ecdh;
pub mod keypair;

pub use ecdh::{derive_shared_secret, Ecdh};
pub use keypair::{KeyPair, PublicKey, SharedSecret};
