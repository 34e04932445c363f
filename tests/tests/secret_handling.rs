//! Secret material held by key pairs and shared secrets

use ecgroup_common::{ct_eq_uint, SecretScalar};
use ecgroup_kex::KeyPair;
use ecgroup_tests::domain;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_keypair_stores_secret_scalar() {
    let domain = domain("demo-p211").unwrap();
    let keypair = KeyPair::from_secret(domain, &BigUint::from(58u32)).unwrap();
    assert_eq!(keypair.secret(), &SecretScalar::new(&BigUint::from(58u32)));
    assert_ne!(keypair.secret(), &SecretScalar::new(&BigUint::from(42u32)));
    assert!(ct_eq_uint(&keypair.secret().expose(), &BigUint::from(58u32)));
}

#[test]
fn test_shared_secret_coordinates_match_in_constant_time() {
    let domain = domain("secp256k1").unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let mut alice = KeyPair::generate(domain.clone(), &mut rng).unwrap();
    let mut bob = KeyPair::generate(domain, &mut rng).unwrap();
    let alice_public = alice.public_key().clone();

    let a = alice.agree(bob.public_key()).unwrap().x();
    let b = bob.agree(&alice_public).unwrap().x();
    assert!(ct_eq_uint(&a, &b));
    assert!(!ct_eq_uint(&a, &(&b + 1u32)));
}

#[test]
fn test_secrets_are_redacted() {
    let domain = domain("demo-p211").unwrap();
    let mut alice = KeyPair::from_secret(domain.clone(), &BigUint::from(58u32)).unwrap();
    let bob = KeyPair::from_secret(domain, &BigUint::from(42u32)).unwrap();
    alice.agree(bob.public_key()).unwrap();

    let shown = format!("{:?}", alice);
    assert!(shown.contains("REDACTED"));
    assert!(!shown.contains("58"));
    assert!(!shown.contains("136"));
}
