//! Primality testing and small-integer factorization
//!
//! Used to validate field moduli and group orders, and to factor the group
//! size of enumerable curves when computing point orders.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

const SMALL_PRIMES: [u32; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Miller–Rabin witnesses; deterministic for n < 3.3·10²⁴
const WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Extra witnesses applied to larger candidates
const LARGE_WITNESSES: [u32; 8] = [41, 43, 47, 53, 59, 61, 67, 71];

/// Probabilistic primality test (trial division, then Miller–Rabin)
///
/// The answer is exact below 3.3·10²⁴; above that a composite is accepted
/// with probability at most 4⁻²⁰.
pub fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    let n_minus_1 = n - 1u32;
    let r = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> r;

    let extra: &[u32] = if n.bits() > 80 { &LARGE_WITNESSES } else { &[] };
    WITNESSES
        .iter()
        .chain(extra.iter())
        .all(|&a| miller_rabin_round(n, &n_minus_1, &d, r, &BigUint::from(a)))
}

fn miller_rabin_round(n: &BigUint, n_minus_1: &BigUint, d: &BigUint, r: u64, a: &BigUint) -> bool {
    if a >= n_minus_1 {
        return true;
    }
    let mut x = a.modpow(d, n);
    if x.is_one() || x == *n_minus_1 {
        return true;
    }
    for _ in 1..r {
        x = (&x * &x) % n;
        if x == *n_minus_1 {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }
    false
}

/// Factor `n` by trial division into `(prime, exponent)` pairs, ascending
///
/// Only intended for group sizes of enumerable fields; the cost grows with
/// the square root of the second-largest prime factor.
pub fn factorize(n: &BigUint) -> Vec<(BigUint, u32)> {
    let mut factors = Vec::new();
    let mut rest = n.clone();
    if rest.is_zero() {
        return factors;
    }

    let mut candidate = BigUint::from(2u32);
    while &candidate * &candidate <= rest {
        let mut exponent = 0u32;
        loop {
            let (q, r) = rest.div_rem(&candidate);
            if !r.is_zero() {
                break;
            }
            rest = q;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push((candidate.clone(), exponent));
        }
        candidate += if candidate.to_u32() == Some(2) { 1u32 } else { 2u32 };
    }
    if !rest.is_one() {
        factors.push((rest, 1));
    }
    factors
}
