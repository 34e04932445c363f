//! Two parties agree on a shared point and exchange a signed message
//!
//! Run with the demonstration curve:
//!
//! ```text
//! cargo run --example two_party --features serde
//! ```
//!
//! or with a curve read from TOML, for example a coefficient search:
//!
//! ```text
//! # search.toml
//! mode = "search"
//! modulus = "211"
//! ```
//!
//! Set `RUST_LOG=debug` to see the builder's decisions.

use ecgroup::params::{DEMO_MESSAGE, DEMO_PARTY_A_SECRET, DEMO_PARTY_B_SECRET};
use ecgroup::prelude::*;
use rand::rngs::OsRng;
use std::result::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<CurveConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&text)?)
        }
        None => Ok(CurveConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Elliptic-Curve Two-Party Example");
    println!("================================");

    let domain = Arc::new(CurveBuilder::new(load_config()?).build()?);
    let curve = domain.curve();
    println!(
        "Curve: y² = x³ + {}·x + {} over 𝔽_{}",
        curve.a(),
        curve.b(),
        curve.modulus()
    );
    println!("Generator: {} of order {}", domain.generator(), domain.order());

    // The fixed demonstration scalars only make sense below the group order
    let order = domain.order();
    let pick = |fixed: u64| -> Result<KeyPair, Error> {
        let d = BigUint::from(fixed);
        if &d < order {
            KeyPair::from_secret(domain.clone(), &d)
        } else {
            KeyPair::generate(domain.clone(), &mut OsRng)
        }
    };
    let mut alice = pick(DEMO_PARTY_A_SECRET)?;
    let mut bob = pick(DEMO_PARTY_B_SECRET)?;
    println!("\nAlice public key: {}", alice.public_key());
    println!("Bob public key:   {}", bob.public_key());

    let alice_public = alice.public_key().clone();
    let bob_public = bob.public_key().clone();
    let shared = alice.agree(&bob_public)?.point();
    bob.agree(&alice_public)?;
    println!("\nShared point: {}", shared);
    println!("Both parties agree: {}", alice.shares_secret_with(&bob));

    // Alice signs, Bob checks against the key Alice sent him
    let ecdsa: Ecdsa = Ecdsa::new(domain.clone());
    let signature = ecdsa.sign(DEMO_MESSAGE.as_bytes(), &alice, &mut OsRng)?;
    println!("\nMessage: {:?}", DEMO_MESSAGE);
    println!("Signature: {}", signature);

    match ecdsa.verify_detailed(DEMO_MESSAGE.as_bytes(), &signature, &alice_public) {
        Ok(()) => println!("Bob verified Alice's signature ✓"),
        Err(e) => println!("Verification failed: {}", e),
    }

    let tampered = "Hello, world?";
    match ecdsa.verify_detailed(tampered.as_bytes(), &signature, &alice_public) {
        Ok(()) => println!(
            "{:?} verified under the same signature (tiny curve collision)",
            tampered
        ),
        Err(e) => println!("{:?} correctly rejected: {}", tampered, e),
    }

    Ok(())
}
