//! Public API traits and types for the ecgroup library
//!
//! This crate provides the public API surface of the ecgroup ecosystem: the
//! error type shared by the protocol crates and the traits they implement.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{KeyAgreement, Signature};

// Re-export trait modules for direct access
pub use traits::{key_agreement, signature};
