//! Trait definitions for the protocols built on the curve group

pub mod key_agreement;
pub mod signature;

pub use key_agreement::KeyAgreement;
pub use signature::Signature;
