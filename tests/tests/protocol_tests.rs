//! Two-party scenarios through the `KeyAgreement` and `Signature` traits

use ecgroup_api::{Error, KeyAgreement, Signature};
use ecgroup_kex::{Ecdh, KeyPair};
use ecgroup_params::{DEMO_MESSAGE, DEMO_PARTY_A_SECRET, DEMO_PARTY_B_SECRET};
use ecgroup_sign::{Ecdsa, EcdsaSignature};
use ecgroup_tests::domain;
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn exchange<K: KeyAgreement>(
    scheme: &K,
    rng: &mut ChaCha20Rng,
) -> (K::SharedSecret, K::SharedSecret) {
    let alice = scheme.keypair(rng).unwrap();
    let bob = scheme.keypair(rng).unwrap();
    let alice_public = K::public_key(&alice);
    let bob_public = K::public_key(&bob);
    (
        scheme.agree(&alice, &bob_public).unwrap(),
        scheme.agree(&bob, &alice_public).unwrap(),
    )
}

#[test]
fn test_demo_two_party_exchange() {
    let domain = domain("demo-p211").unwrap();
    let a = BigUint::from(DEMO_PARTY_A_SECRET);
    let b = BigUint::from(DEMO_PARTY_B_SECRET);
    let mut alice = KeyPair::from_secret(domain.clone(), &a).unwrap();
    let mut bob = KeyPair::from_secret(domain.clone(), &b).unwrap();
    let alice_public = alice.public_key().clone();
    let bob_public = bob.public_key().clone();

    assert!(!alice.shares_secret_with(&bob));
    alice.agree(&bob_public).unwrap();
    bob.agree(&alice_public).unwrap();
    assert!(alice.shares_secret_with(&bob));

    // Alice signs; Bob verifies with the public key he received
    let ecdsa: Ecdsa = Ecdsa::new(domain);
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let signature = ecdsa.sign(DEMO_MESSAGE.as_bytes(), &alice, &mut rng).unwrap();
    assert!(ecdsa.verify(DEMO_MESSAGE.as_bytes(), &signature, &alice_public));
}

#[test]
fn test_key_agreement_trait_on_every_curve() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    for name in ["demo-p211", "secp256k1", "nist-p256"] {
        let scheme = Ecdh::new(domain(name).unwrap());
        let (a, b) = exchange(&scheme, &mut rng);
        assert_eq!(a, b, "{}", name);
        assert!(scheme.domain().curve().is_on_curve(&a.point()));
    }
    assert_eq!(Ecdh::name(), "ECDH");
}

#[test]
fn test_key_agreement_with_os_rng() {
    let scheme = Ecdh::new(domain("secp256k1").unwrap());
    let alice = scheme.keypair(&mut OsRng).unwrap();
    let bob = scheme.keypair(&mut OsRng).unwrap();
    let a = scheme.agree(&alice, &Ecdh::public_key(&bob)).unwrap();
    let b = scheme.agree(&bob, &Ecdh::public_key(&alice)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_cross_domain_agreement_fails() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let k1 = Ecdh::new(domain("secp256k1").unwrap());
    let p256 = Ecdh::new(domain("nist-p256").unwrap());
    let ours = k1.keypair(&mut rng).unwrap();
    let theirs = p256.keypair(&mut rng).unwrap();

    let err = k1.agree(&ours, &Ecdh::public_key(&theirs)).unwrap_err();
    assert!(matches!(err, Error::InvalidKey { .. }), "{}", err);
    assert!(p256.agree(&ours, &Ecdh::public_key(&theirs)).is_err());
}

#[test]
fn test_signature_trait_roundtrip() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    for name in ["secp256k1", "nist-p256"] {
        let scheme: Ecdsa = Ecdsa::new(domain(name).unwrap());
        let keypair = Signature::keypair(&scheme, &mut rng).unwrap();
        let public = <Ecdsa as Signature>::public_key(&keypair);

        let signature = Signature::sign(&scheme, b"transfer 10 coins", &keypair, &mut rng).unwrap();
        assert!(Signature::verify(&scheme, b"transfer 10 coins", &signature, &public).is_ok());

        let err =
            Signature::verify(&scheme, b"transfer 99 coins", &signature, &public).unwrap_err();
        assert!(matches!(err, Error::InvalidSignature { .. }), "{}", err);
    }
    assert_eq!(<Ecdsa as Signature>::name(), "ECDSA");
}

#[test]
fn test_signatures_with_os_rng_are_randomized() {
    let scheme: Ecdsa = Ecdsa::new(domain("nist-p256").unwrap());
    let keypair = KeyPair::generate(scheme.domain().clone(), &mut OsRng).unwrap();
    let first = scheme.sign(b"same message", &keypair, &mut OsRng).unwrap();
    let second = scheme.sign(b"same message", &keypair, &mut OsRng).unwrap();
    assert_ne!(first, second);
    assert!(scheme.verify(b"same message", &first, keypair.public_key()));
    assert!(scheme.verify(b"same message", &second, keypair.public_key()));
}

#[test]
fn test_malleated_signature_still_verifies() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let scheme: Ecdsa = Ecdsa::new(domain("secp256k1").unwrap());
    let keypair = KeyPair::generate(scheme.domain().clone(), &mut rng).unwrap();
    let signature = scheme.sign(b"payload", &keypair, &mut rng).unwrap();

    let low = signature.normalize_s(scheme.domain().order());
    assert!(low.is_low_s(scheme.domain().order()));
    let twin = EcdsaSignature::new(
        signature.r().clone(),
        scheme.domain().order() - signature.s(),
    );
    assert!(scheme.verify(b"payload", &twin, keypair.public_key()));
    assert!(scheme.verify(b"payload", &low, keypair.public_key()));
}
