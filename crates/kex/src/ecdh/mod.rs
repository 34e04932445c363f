//! Elliptic-curve Diffie–Hellman
//!
//! The shared secret is d·Q_peer. Peer keys are fully validated first (same
//! domain, finite, on the curve, in the prime-order subgroup) and an
//! identity result is rejected.

use crate::keypair::{KeyPair, PublicKey, SharedSecret};
use ecgroup_algorithms::DomainParameters;
use ecgroup_api::{Error, KeyAgreement, Result, ResultExt};
use ecgroup_common::SecretScalar;
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

/// Compute d·Q for our secret d and the peer's public key Q
pub fn derive_shared_secret(
    domain: &DomainParameters,
    own_secret: &SecretScalar,
    peer_public: &PublicKey,
) -> Result<SharedSecret> {
    if peer_public.domain().as_ref() != domain {
        return Err(Error::InvalidKey {
            context: "ECDH",
            message: "peer key belongs to different domain parameters".to_string(),
        });
    }
    domain
        .validate_public_point(peer_public.point())
        .map_err(|e| Error::InvalidKey {
            context: "ECDH",
            message: e.to_string(),
        })?;

    let shared = domain
        .curve()
        .scalar_mul(&own_secret.expose(), peer_public.point())
        .with_context("ECDH")?;
    SharedSecret::from_point(&shared).map_err(|e| e.with_context("ECDH"))
}

/// ECDH over a fixed set of domain parameters
#[derive(Clone, Debug)]
pub struct Ecdh {
    domain: Arc<DomainParameters>,
}

impl Ecdh {
    /// Key agreement under `domain`
    pub fn new(domain: Arc<DomainParameters>) -> Self {
        Self { domain }
    }

    /// The shared domain parameters
    pub fn domain(&self) -> &Arc<DomainParameters> {
        &self.domain
    }
}

impl KeyAgreement for Ecdh {
    type PublicKey = PublicKey;
    type KeyPair = KeyPair;
    type SharedSecret = SharedSecret;

    fn name() -> &'static str {
        "ECDH"
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair> {
        KeyPair::generate(self.domain.clone(), rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key().clone()
    }

    fn agree(&self, keypair: &Self::KeyPair, peer: &Self::PublicKey) -> Result<Self::SharedSecret> {
        if keypair.domain().as_ref() != self.domain.as_ref() {
            return Err(Error::InvalidKey {
                context: "ECDH",
                message: "key pair belongs to different domain parameters".to_string(),
            });
        }
        derive_shared_secret(&self.domain, keypair.secret(), peer)
    }
}
