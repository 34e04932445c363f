//! Digital signature traits
//!
//! Signing takes the whole key pair rather than a bare secret key, so the
//! secret scalar never has to leave the type that owns it.

use crate::error::SignatureResult;
use rand::{CryptoRng, RngCore};

/// Core trait for digital signature algorithms
///
/// Implementors carry their domain parameters and hash choice, so every
/// operation takes `&self`.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Key pair type; owns the secret key
    type KeyPair;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> SignatureResult<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Sign a message with the secret key of `keypair`
    ///
    /// # Security Requirements
    ///
    /// Per-signature nonces must come from the provided RNG and must never
    /// be reused.
    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        keypair: &Self::KeyPair,
        rng: &mut R,
    ) -> SignatureResult<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `Ok(())` for a valid signature and
    /// [`Error::InvalidSignature`](crate::Error::InvalidSignature) otherwise.
    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> SignatureResult<()>;
}
