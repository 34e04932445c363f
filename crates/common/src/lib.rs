//! Common implementations and shared functionality for ecgroup
//!
//! This crate holds the pieces every protocol crate needs but that do not
//! belong to the curve arithmetic itself: secret scalar storage with
//! zeroization and constant-time comparison of integers.

#![forbid(unsafe_code)]

pub mod security;

pub use security::{ct_eq, ct_eq_uint, SecretScalar};
