//! Group-law properties checked on the named curves

use ecgroup_algorithms::{enumerate_points, Point};
use ecgroup_tests::domain;
use num_bigint::BigUint;
use proptest::prelude::*;

#[test]
fn test_every_demo_point_has_order_dividing_group_size() {
    let domain = domain("demo-p211").unwrap();
    let curve = domain.curve();
    let points = enumerate_points(curve).unwrap();
    // 240 affine points plus the identity
    assert_eq!(points.len() + 1, 241);
    for p in points {
        assert_eq!(curve.scalar_mul(domain.order(), &p).unwrap(), Point::Identity);
    }
}

#[test]
fn test_generator_orbit_covers_the_group() {
    let domain = domain("demo-p211").unwrap();
    let curve = domain.curve();
    let mut seen = std::collections::BTreeSet::new();
    let mut acc = Point::Identity;
    for _ in 0..241 {
        acc = curve.add(&acc, domain.generator()).unwrap();
        if let Some((x, y)) = acc.coordinates() {
            seen.insert((x.clone(), y.clone()));
        }
    }
    assert_eq!(acc, Point::Identity);
    assert_eq!(seen.len(), 240);
}

proptest! {
    #[test]
    fn demo_scalar_mul_is_additive(a in 0u64..2000, b in 0u64..2000) {
        let domain = domain("demo-p211").unwrap();
        let curve = domain.curve();
        let lhs = domain.mul_generator(&BigUint::from(a + b)).unwrap();
        let rhs = curve
            .add(
                &domain.mul_generator(&BigUint::from(a)).unwrap(),
                &domain.mul_generator(&BigUint::from(b)).unwrap(),
            )
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn demo_scalars_reduce_mod_order(k in 0u64..100_000) {
        let domain = domain("demo-p211").unwrap();
        let reduced = BigUint::from(k) % domain.order();
        prop_assert_eq!(
            domain.mul_generator(&BigUint::from(k)).unwrap(),
            domain.mul_generator(&reduced).unwrap()
        );
    }

    #[test]
    fn demo_point_plus_negation_is_identity(k in 1u64..241) {
        let domain = domain("demo-p211").unwrap();
        let curve = domain.curve();
        let p = domain.mul_generator(&BigUint::from(k)).unwrap();
        let q = curve.negate(&p).unwrap();
        prop_assert!(curve.is_on_curve(&q));
        prop_assert_eq!(curve.add(&p, &q).unwrap(), Point::Identity);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn secp256k1_scalar_mul_composes(a in 1u64.., b in 1u64..) {
        let domain = domain("secp256k1").unwrap();
        let curve = domain.curve();
        let a = BigUint::from(a);
        let b = BigUint::from(b);
        let a_then_b = curve.scalar_mul(&b, &domain.mul_generator(&a).unwrap()).unwrap();
        let b_then_a = curve.scalar_mul(&a, &domain.mul_generator(&b).unwrap()).unwrap();
        prop_assert!(curve.is_on_curve(&a_then_b));
        prop_assert_eq!(a_then_b, b_then_a);
    }
}
