//! Digital signatures over elliptic-curve groups
//!
//! [`Ecdsa`] signs with the private scalar of an
//! [`ecgroup_kex::KeyPair`] and verifies against its
//! [`ecgroup_kex::PublicKey`], so one key pair serves both key agreement
//! and signatures.

#![forbid(unsafe_code)]

pub mod ecdsa;

pub use ecdsa::{Ecdsa, EcdsaSignature};
