//! ECDSA-style signatures over arbitrary domain parameters
//!
//! Signing (d = private scalar, n = group order):
//!
//! 1. h = H(m) read as a big-endian integer, reduced mod n
//! 2. k uniform in [1, n − 1]
//! 3. R = k·G, r = R.x mod n; retry if R is the identity or r = 0
//! 4. s = k⁻¹(h + d·r) mod n; retry if s = 0
//!
//! Verification accepts (r, s) iff both lie in [1, n − 1] and
//! (h·s⁻¹)·G + (r·s⁻¹)·Q is a finite point whose x-coordinate is r mod n.
//!
//! The full digest is reduced mod n; it is not truncated to the bit length
//! of n first.

mod signature;

pub use signature::EcdsaSignature;

use core::marker::PhantomData;
use ecgroup_algorithms::{DomainParameters, HashFunction, Point, Sha256};
use ecgroup_api::{Error, Result, ResultExt, Signature};
use ecgroup_kex::{KeyPair, PublicKey};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use std::sync::Arc;
use tracing::trace;

/// Upper bound on nonces drawn for one signature
///
/// A degenerate nonce has probability about 2/n, so reaching this bound
/// means the RNG is broken.
const MAX_NONCE_ATTEMPTS: usize = 1024;

/// Outcome of signing with one nonce
#[derive(Debug)]
pub(crate) enum SignAttempt {
    Signed(EcdsaSignature),
    /// The nonce produced R = O, r = 0 or s = 0 and must be replaced
    DegenerateNonce(&'static str),
}

/// ECDSA over shared domain parameters with hash `H`
#[derive(Debug)]
pub struct Ecdsa<H: HashFunction = Sha256> {
    domain: Arc<DomainParameters>,
    _hash: PhantomData<H>,
}

impl<H: HashFunction> Clone for Ecdsa<H> {
    fn clone(&self) -> Self {
        Self::new(self.domain.clone())
    }
}

impl<H: HashFunction> Ecdsa<H> {
    /// Signature scheme under `domain`
    pub fn new(domain: Arc<DomainParameters>) -> Self {
        Self {
            domain,
            _hash: PhantomData,
        }
    }

    /// The shared domain parameters
    pub fn domain(&self) -> &Arc<DomainParameters> {
        &self.domain
    }

    /// h = H(message) mod n
    pub fn hash_message(&self, message: &[u8]) -> BigUint {
        self.domain.scalars().reduce(&H::digest_to_integer(message))
    }

    /// Sign `message` with the private scalar of `keypair`
    pub fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        keypair: &KeyPair,
        rng: &mut R,
    ) -> Result<EcdsaSignature> {
        self.check_domain(keypair.domain(), "ECDSA sign")?;
        let h = self.hash_message(message);
        let d = keypair.secret().expose();

        for attempt in 1..=MAX_NONCE_ATTEMPTS {
            let k = self.domain.random_scalar(rng);
            match self.sign_with_nonce(&h, &d, &k)? {
                SignAttempt::Signed(signature) => return Ok(signature),
                SignAttempt::DegenerateNonce(reason) => {
                    trace!(attempt, reason, "degenerate nonce, retrying");
                }
            }
        }
        Err(Error::Other {
            context: "ECDSA sign",
            message: format!("no usable nonce after {} attempts", MAX_NONCE_ATTEMPTS),
        })
    }

    /// One signing attempt with a given nonce k
    pub(crate) fn sign_with_nonce(
        &self,
        h: &BigUint,
        d: &BigUint,
        k: &BigUint,
    ) -> Result<SignAttempt> {
        let scalars = self.domain.scalars();

        let r = match self.domain.mul_generator(k).with_context("ECDSA sign")? {
            Point::Identity => return Ok(SignAttempt::DegenerateNonce("R is the identity")),
            Point::Affine { x, .. } => scalars.reduce(&x),
        };
        if r.is_zero() {
            return Ok(SignAttempt::DegenerateNonce("r = 0"));
        }

        let k_inv = scalars.inv(k).with_context("ECDSA sign")?;
        let s = scalars.mul(&k_inv, &scalars.add(h, &scalars.mul(d, &r)));
        if s.is_zero() {
            return Ok(SignAttempt::DegenerateNonce("s = 0"));
        }
        Ok(SignAttempt::Signed(EcdsaSignature::new(r, s)))
    }

    /// Does `signature` verify for `message` under `public_key`?
    pub fn verify(
        &self,
        message: &[u8],
        signature: &EcdsaSignature,
        public_key: &PublicKey,
    ) -> bool {
        self.verify_detailed(message, signature, public_key).is_ok()
    }

    /// Verify, reporting why a signature was rejected
    pub fn verify_detailed(
        &self,
        message: &[u8],
        signature: &EcdsaSignature,
        public_key: &PublicKey,
    ) -> Result<()> {
        self.check_domain(public_key.domain(), "ECDSA verify")?;
        let n = self.domain.order();
        for (name, value) in [("r", signature.r()), ("s", signature.s())] {
            if value.is_zero() || value >= n {
                return Err(Error::InvalidSignature {
                    context: "ECDSA verify",
                    message: format!("{} is outside [1, n - 1]", name),
                });
            }
        }

        let scalars = self.domain.scalars();
        let h = self.hash_message(message);
        let w = scalars.inv(signature.s()).with_context("ECDSA verify")?;
        let u1 = scalars.mul(&h, &w);
        let u2 = scalars.mul(signature.r(), &w);

        let curve = self.domain.curve();
        let v = curve
            .add(
                &self.domain.mul_generator(&u1).with_context("ECDSA verify")?,
                &curve.scalar_mul(&u2, public_key.point()).with_context("ECDSA verify")?,
            )
            .with_context("ECDSA verify")?;

        match v {
            Point::Identity => Err(Error::InvalidSignature {
                context: "ECDSA verify",
                message: "u1·G + u2·Q is the identity".to_string(),
            }),
            Point::Affine { x, .. } if scalars.reduce(&x) == *signature.r() => Ok(()),
            Point::Affine { .. } => Err(Error::InvalidSignature {
                context: "ECDSA verify",
                message: "signature does not match".to_string(),
            }),
        }
    }

    fn check_domain(&self, other: &Arc<DomainParameters>, context: &'static str) -> Result<()> {
        if other.as_ref() != self.domain.as_ref() {
            return Err(Error::InvalidKey {
                context,
                message: "key belongs to different domain parameters".to_string(),
            });
        }
        Ok(())
    }
}

impl<H: HashFunction> Signature for Ecdsa<H> {
    type PublicKey = PublicKey;
    type KeyPair = KeyPair;
    type SignatureData = EcdsaSignature;

    fn name() -> &'static str {
        "ECDSA"
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair> {
        KeyPair::generate(self.domain.clone(), rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key().clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        keypair: &Self::KeyPair,
        rng: &mut R,
    ) -> Result<Self::SignatureData> {
        Ecdsa::<H>::sign(self, message, keypair, rng)
    }

    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()> {
        self.verify_detailed(message, signature, public_key)
    }
}
