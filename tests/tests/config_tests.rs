//! Building domains from TOML curve configurations

use ecgroup_algorithms::{CurveBuilder, CurveConfig, Error, FixedCurve, Point, SearchConfig};
use ecgroup_params::DEMO_P211;
use num_bigint::{BigInt, BigUint};

fn build(text: &str) -> Result<ecgroup_algorithms::DomainParameters, Error> {
    let config: CurveConfig = toml::from_str(text).unwrap();
    CurveBuilder::new(config).build()
}

#[test]
fn test_fixed_curve_from_toml() {
    let domain = build(
        r#"
        mode = "fixed"
        name = "demo"
        p = "211"
        a = "0"
        b = "-4"
        g_x = "2"
        g_y = "2"
        n = "241"
        "#,
    )
    .unwrap();
    assert_eq!(domain.curve().b(), &BigUint::from(207u32));
    assert_eq!(domain.generator(), &Point::from_u64(2, 2));

    let named = CurveBuilder::new(CurveConfig::named(&DEMO_P211).unwrap())
        .build()
        .unwrap();
    assert_eq!(domain, named);
}

#[test]
fn test_fixed_curve_hex_integers() {
    let domain = build(
        r#"
        mode = "fixed"
        p = "0xd3"
        a = "0x0"
        b = "0xcf"
        g_x = "0x2"
        g_y = "0x2"
        n = "0xf1"
        "#,
    )
    .unwrap();
    assert_eq!(domain.order(), &BigUint::from(241u32));
}

#[test]
fn test_search_from_toml() {
    let domain = build(
        r#"
        mode = "search"
        modulus = "211"
        "#,
    )
    .unwrap();
    assert_eq!(domain.curve().a(), &BigUint::from(1u32));
    assert_eq!(domain.curve().b(), &BigUint::from(1u32));
    assert_eq!(domain.order(), &BigUint::from(223u32));
    assert_eq!(domain.generator(), &Point::from_u64(0, 1));
}

#[test]
fn test_search_limits_from_toml() {
    // the first cofactor-1 curve over 𝔽₆₇ is not reached with one candidate
    let err = build(
        r#"
        mode = "search"
        modulus = "67"
        max_cofactor = 1
        max_candidates = 1
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Domain { .. }), "{}", err);
}

#[test]
fn test_invalid_configs_are_rejected() {
    let not_prime = build(
        r#"
        mode = "search"
        modulus = "221"
        "#,
    );
    assert!(not_prime.is_err());

    let wrong_order = build(
        r#"
        mode = "fixed"
        p = "211"
        a = "0"
        b = "-4"
        g_x = "2"
        g_y = "2"
        n = "239"
        "#,
    );
    assert!(wrong_order.is_err());

    let unknown_mode: Result<CurveConfig, _> = toml::from_str(
        r#"
        mode = "random"
        modulus = "211"
        "#,
    );
    assert!(unknown_mode.is_err());

    let bad_integer: Result<CurveConfig, _> = toml::from_str(
        r#"
        mode = "search"
        modulus = "two hundred"
        "#,
    );
    assert!(bad_integer.is_err());
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = CurveConfig::Fixed(FixedCurve::demo());
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("mode = \"fixed\""));
    assert_eq!(toml::from_str::<CurveConfig>(&text).unwrap(), config);

    let config = CurveConfig::Search(SearchConfig::new(BigUint::from(101u32)).with_max_cofactor(2));
    let text = toml::to_string(&config).unwrap();
    assert_eq!(toml::from_str::<CurveConfig>(&text).unwrap(), config);
}

#[test]
fn test_negative_coefficient_is_reduced() {
    let config = CurveConfig::Fixed(FixedCurve {
        name: None,
        p: BigUint::from(211u32),
        a: BigInt::from(-211),
        b: BigInt::from(-4),
        g_x: BigUint::from(2u32),
        g_y: BigUint::from(2u32),
        n: BigUint::from(241u32),
    });
    let domain = CurveBuilder::new(config).build().unwrap();
    assert_eq!(domain.curve().a(), &BigUint::from(0u32));
}
