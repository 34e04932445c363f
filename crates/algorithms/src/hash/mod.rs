//! Message hashing for signatures
//!
//! The signature scheme is generic over [`HashFunction`]; [`Sha256`] is the
//! default and is backed by the `sha2` crate.

use num_bigint::BigUint;
use sha2::Digest;

/// A cryptographic hash usable for message digests
pub trait HashFunction {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;

    /// Hash `data` in one shot
    fn digest(data: &[u8]) -> Vec<u8>;

    /// Hash `data` and read the digest as a big-endian unsigned integer
    ///
    /// The whole digest is used; callers reduce it into their own ring.
    fn digest_to_integer(data: &[u8]) -> BigUint {
        BigUint::from_bytes_be(&Self::digest(data))
    }
}

/// SHA-256 (FIPS 180-4)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl HashFunction for Sha256 {
    const OUTPUT_SIZE: usize = 32;

    fn name() -> &'static str {
        "SHA-256"
    }

    fn digest(data: &[u8]) -> Vec<u8> {
        sha2::Sha256::digest(data).to_vec()
    }
}

/// SHA-512 (FIPS 180-4)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512;

impl HashFunction for Sha512 {
    const OUTPUT_SIZE: usize = 64;

    fn name() -> &'static str {
        "SHA-512"
    }

    fn digest(data: &[u8]) -> Vec<u8> {
        sha2::Sha512::digest(data).to_vec()
    }
}
