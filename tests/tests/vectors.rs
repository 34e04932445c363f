//! Known-answer tests driven by src/vectors/data/curves.toml

use ecgroup_kex::{KeyPair, PublicKey};
use ecgroup_sign::{Ecdsa, EcdsaSignature};
use ecgroup_tests::{domain, vectors};

#[test]
fn test_generator_multiples() {
    let file = vectors::load("curves.toml").unwrap();
    for v in &file.multiple {
        let domain = domain(&v.curve).unwrap();
        let k = vectors::integer("k", &v.k).unwrap();
        let expected = vectors::point(&v.x, &v.y).unwrap();
        assert!(domain.curve().is_on_curve(&expected), "{} k = {}", v.curve, v.k);
        assert_eq!(
            domain.mul_generator(&k).unwrap(),
            expected,
            "{} k = {}",
            v.curve,
            v.k
        );
    }
}

#[test]
fn test_order_minus_one_is_negated_generator() {
    for name in ["demo-p211", "secp256k1", "nist-p256"] {
        let domain = domain(name).unwrap();
        let k = domain.order() - 1u32;
        let expected = domain.curve().negate(domain.generator()).unwrap();
        assert_eq!(domain.mul_generator(&k).unwrap(), expected, "{}", name);
    }
}

#[test]
fn test_agreement_vectors() {
    let file = vectors::load("curves.toml").unwrap();
    for v in &file.agreement {
        let domain = domain(&v.curve).unwrap();
        let a = vectors::integer("secret_a", &v.secret_a).unwrap();
        let b = vectors::integer("secret_b", &v.secret_b).unwrap();
        let expected = vectors::point(&v.x, &v.y).unwrap();

        let mut alice = KeyPair::from_secret(domain.clone(), &a).unwrap();
        let mut bob = KeyPair::from_secret(domain, &b).unwrap();
        let alice_public = alice.public_key().clone();

        assert_eq!(alice.agree(bob.public_key()).unwrap().point(), expected);
        assert_eq!(bob.agree(&alice_public).unwrap().point(), expected);
        assert!(alice.shares_secret_with(&bob), "{}", v.curve);
    }
}

#[test]
fn test_signature_vectors() {
    let file = vectors::load("curves.toml").unwrap();
    for v in &file.signature {
        let domain = domain(&v.curve).unwrap();
        let d = vectors::integer("secret", &v.secret).unwrap();
        let signature = EcdsaSignature::new(
            vectors::integer("r", &v.r).unwrap(),
            vectors::integer("s", &v.s).unwrap(),
        );
        let public: PublicKey = KeyPair::from_secret(domain.clone(), &d)
            .unwrap()
            .public_key()
            .clone();

        let ecdsa: Ecdsa = Ecdsa::new(domain);
        assert_eq!(
            ecdsa.verify(v.message.as_bytes(), &signature, &public),
            v.valid,
            "{} {:?} ({})",
            v.curve,
            v.message,
            signature
        );
    }
}
