//! Key material: key pairs, validated public keys and shared secrets

use crate::ecdh::derive_shared_secret;
use core::fmt;
use ecgroup_algorithms::{DomainParameters, Point};
use ecgroup_api::{Error, Result, ResultExt};
use ecgroup_common::SecretScalar;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use std::sync::Arc;
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;
use zeroize::Zeroize;

/// A validated public point bound to its domain
///
/// The point is finite, on the curve, and annihilated by the group order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    domain: Arc<DomainParameters>,
    point: Point,
}

impl PublicKey {
    /// Validate `point` as a public key under `domain`
    pub fn new(domain: Arc<DomainParameters>, point: Point) -> Result<Self> {
        domain
            .validate_public_point(&point)
            .map_err(|e| Error::InvalidKey {
                context: "PublicKey::new",
                message: e.to_string(),
            })?;
        Ok(Self { domain, point })
    }

    /// The public point Q
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Domain parameters the key belongs to
    pub fn domain(&self) -> &Arc<DomainParameters> {
        &self.domain
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.point, f)
    }
}

/// Shared point produced by key agreement
///
/// Coordinates are held in zeroizing storage. Feed [`SharedSecret::x`]
/// through a key derivation function before using it as a key.
#[derive(Clone, Zeroize)]
pub struct SharedSecret {
    x: SecretScalar,
    y: SecretScalar,
}

impl SharedSecret {
    pub(crate) fn from_point(point: &Point) -> Result<Self> {
        match point.coordinates() {
            Some((x, y)) => Ok(Self {
                x: SecretScalar::new(x),
                y: SecretScalar::new(y),
            }),
            None => Err(Error::InvalidKey {
                context: "shared secret",
                message: "key agreement produced the identity".to_string(),
            }),
        }
    }

    /// x-coordinate of the shared point
    pub fn x(&self) -> BigUint {
        self.x.expose()
    }

    /// The shared point itself
    pub fn point(&self) -> Point {
        Point::new(self.x.expose(), self.y.expose())
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret([REDACTED])")
    }
}

/// Private scalar d, public point Q = d·G, and the last agreed secret
pub struct KeyPair {
    secret: SecretScalar,
    public: PublicKey,
    shared: Option<SharedSecret>,
}

impl KeyPair {
    /// Fresh key pair with d uniform in [1, n − 1]
    pub fn generate<R: CryptoRng + RngCore>(
        domain: Arc<DomainParameters>,
        rng: &mut R,
    ) -> Result<Self> {
        let d = domain.random_scalar(rng);
        let keypair = Self::from_valid_secret(domain, &d)?;
        debug!(public = %keypair.public, "generated key pair");
        Ok(keypair)
    }

    /// Key pair for a caller-chosen secret d ∈ [1, n − 1]
    pub fn from_secret(domain: Arc<DomainParameters>, d: &BigUint) -> Result<Self> {
        domain
            .validate_scalar("secret scalar", d)
            .with_context("KeyPair::from_secret")?;
        Self::from_valid_secret(domain, d)
    }

    fn from_valid_secret(domain: Arc<DomainParameters>, d: &BigUint) -> Result<Self> {
        let point = domain.mul_generator(d).with_context("KeyPair public point")?;
        let public = PublicKey::new(domain, point)?;
        Ok(Self {
            secret: SecretScalar::new(d),
            public,
            shared: None,
        })
    }

    /// The public half, safe to hand to the peer
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Domain parameters this key pair was generated under
    pub fn domain(&self) -> &Arc<DomainParameters> {
        self.public.domain()
    }

    /// The private scalar d
    pub fn secret(&self) -> &SecretScalar {
        &self.secret
    }

    /// Agree with `peer` and remember the result
    pub fn agree(&mut self, peer: &PublicKey) -> Result<&SharedSecret> {
        let shared = derive_shared_secret(self.domain(), &self.secret, peer)?;
        debug!(peer = %peer, "derived shared secret");
        Ok(self.shared.insert(shared))
    }

    /// Secret recorded by the last successful [`KeyPair::agree`]
    pub fn shared_secret(&self) -> Option<&SharedSecret> {
        self.shared.as_ref()
    }

    /// Do both key pairs hold the same recorded secret?
    ///
    /// False when either side has not agreed yet.
    pub fn shares_secret_with(&self, other: &KeyPair) -> bool {
        match (&self.shared, &other.shared) {
            (Some(a), Some(b)) => a.ct_eq(b).into(),
            _ => false,
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("secret", &self.secret)
            .field("public", &self.public.point)
            .field("shared", &self.shared)
            .finish()
    }
}
