//! Trait for Diffie–Hellman style key agreement

use crate::error::KeyResult;
use rand::{CryptoRng, RngCore};

/// Two-party key agreement over shared domain parameters
///
/// Implementors carry their domain parameters, so every method takes
/// `&self`. Both parties must use equal domains.
pub trait KeyAgreement {
    /// Public key exchanged with the peer
    type PublicKey: Clone;

    /// Key pair owning the private scalar
    type KeyPair;

    /// Agreed secret
    ///
    /// # Security Note
    /// Should be fed through a key derivation function before use as a
    /// symmetric key.
    type SharedSecret: Clone;

    /// Returns the algorithm name
    fn name() -> &'static str;

    /// Generate a key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> KeyResult<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Combine our key pair with the peer's public key
    ///
    /// # Security Requirements
    /// - Must validate the peer public key before use
    /// - Must reject a degenerate (identity) result
    fn agree(
        &self,
        keypair: &Self::KeyPair,
        peer: &Self::PublicKey,
    ) -> KeyResult<Self::SharedSecret>;
}
