//! Integration tests for the max bound validators.

use std::io;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::thread;

use nebula_bounds::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn big_int(s: &str) -> BigInt {
    BigInt::from_str(s).unwrap()
}

fn big_decimal(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn int32_inclusive() {
    let validator = Max::new(100_i32, true);
    assert!(validator.validate(&100).is_ok());
    let err = validator.validate(&101).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::BoundViolation);
}

#[test]
fn int32_exclusive() {
    let validator = Max::new(100_i32, false);
    let err = validator.validate(&100).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::BoundViolation);
    assert!(validator.validate(&99).is_ok());
}

#[test]
fn float64_inclusive() {
    let validator = Max::new(3.14_f64, true);
    assert!(validator.validate(&3.14).is_ok());
    assert!(validator.validate(&3.140_000_1).unwrap_err().is_bound_violation());
}

#[test]
fn big_integer_beyond_fixed_width() {
    let bound = big_int("1000000000000000000000000000000");
    let validator = Max::new(bound.clone(), true);
    assert!(validator.validate(&bound).is_ok());
    let err = validator
        .validate(&big_int("1000000000000000000000000000001"))
        .unwrap_err();
    assert!(err.is_bound_violation());
}

#[test]
fn big_decimal_beyond_fixed_width() {
    let validator = Max::new(big_decimal("1000000000000000000000000000000"), true);
    assert!(validator.validate(&big_decimal("1000000000000000000000000000000.000")).is_ok());
    assert!(
        validator
            .validate(&big_decimal("1000000000000000000000000000000.0000000001"))
            .is_err()
    );
}

#[rstest]
#[case(Max::new(0_i8, true))]
#[case(Max::new(i8::MAX, false))]
fn generic_entry_point_always_unsupported(#[case] validator: Max<i8>) {
    let err = validator.reject_unsupported("100").unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::UnsupportedRepresentation);
    assert_eq!(err.param("expected"), Some("int8"));
    assert_eq!(err.param("actual"), Some("str"));
}

#[test]
fn dyn_generic_entry_point_always_unsupported() {
    let validator = DynMax::new(big_int("5"), true);
    let err = validator.reject_unsupported(&5_u64).unwrap_err();
    assert!(err.is_unsupported_representation());
    assert_eq!(err.param("expected"), Some("big_integer"));
}

// ============================================================================
// EVERY REPRESENTATION
// ============================================================================

/// `(maximum, below, above)` for each representation.
fn samples(repr: Representation) -> (Number, Number, Number) {
    match repr {
        Representation::Int8 => (Number::Int8(10), Number::Int8(-128), Number::Int8(11)),
        Representation::Int16 => (
            Number::Int16(1_000),
            Number::Int16(999),
            Number::Int16(i16::MAX),
        ),
        Representation::Int32 => (
            Number::Int32(0),
            Number::Int32(-1),
            Number::Int32(1),
        ),
        Representation::Int64 => (
            Number::Int64(i64::MAX - 1),
            Number::Int64(i64::MIN),
            Number::Int64(i64::MAX),
        ),
        Representation::Float32 => (
            Number::Float32(0.5),
            Number::Float32(0.499_99),
            Number::Float32(f32::INFINITY),
        ),
        Representation::Float64 => (
            Number::Float64(-2.0),
            Number::Float64(f64::NEG_INFINITY),
            Number::Float64(-1.999_999_999),
        ),
        Representation::BigInteger => (
            Number::BigInteger(big_int("-99999999999999999999999999999999")),
            Number::BigInteger(big_int("-100000000000000000000000000000000")),
            Number::BigInteger(big_int("-99999999999999999999999999999998")),
        ),
        Representation::BigDecimal => (
            Number::BigDecimal(big_decimal("0.30")),
            Number::BigDecimal(big_decimal("0.2999999999999999999999999999")),
            Number::BigDecimal(big_decimal("0.3000000000000000000000000001")),
        ),
    }
}

#[rstest]
fn every_representation(
    #[values(
        Representation::Int8,
        Representation::Int16,
        Representation::Int32,
        Representation::Int64,
        Representation::Float32,
        Representation::Float64,
        Representation::BigInteger,
        Representation::BigDecimal
    )]
    repr: Representation,
    #[values(true, false)] inclusive: bool,
) {
    let (maximum, below, above) = samples(repr);
    let validator = DynMax::new(maximum.clone(), inclusive);
    assert_eq!(validator.representation(), repr);

    assert!(validator.validate(&below).is_ok());
    assert!(validator.validate(&above).unwrap_err().is_bound_violation());
    assert_eq!(validator.validate(&maximum).is_ok(), inclusive);
}

#[rstest]
#[case(Number::Int32(1), Number::Int64(1))]
#[case(Number::Int8(1), Number::Int16(1))]
#[case(Number::Float32(1.0), Number::Float64(1.0))]
#[case(Number::Float64(1.0), Number::BigDecimal(BigDecimal::from(1)))]
#[case(Number::BigInteger(BigInt::from(1)), Number::BigDecimal(BigDecimal::from(1)))]
#[case(Number::BigDecimal(BigDecimal::from(1)), Number::Int64(0))]
fn mismatched_representation_is_never_coerced(#[case] maximum: Number, #[case] value: Number) {
    let validator = DynMax::new(maximum.clone(), true);
    let err = validator.validate(&value).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::UnsupportedRepresentation);
    assert_eq!(err.param("expected"), Some(maximum.representation().as_str()));
    assert_eq!(err.param("actual"), Some(value.representation().as_str()));
}

// ============================================================================
// NAN
// ============================================================================

#[rstest]
#[case(true)]
#[case(false)]
fn nan_value_is_a_bound_violation(#[case] inclusive: bool) {
    assert!(Max::new(f64::MAX, inclusive).validate(&f64::NAN).unwrap_err().is_bound_violation());
    assert!(
        DynMax::new(f32::MAX, inclusive)
            .validate(&Number::Float32(f32::NAN))
            .unwrap_err()
            .is_bound_violation()
    );
}

// ============================================================================
// SIGNED ZERO
// ============================================================================

#[test]
fn negative_zero_orders_below_positive_zero() {
    assert!(Max::new(-0.0_f64, true).validate(&0.0).unwrap_err().is_bound_violation());
    assert!(Max::new(-0.0_f64, true).validate(&-0.0).is_ok());
    assert!(Max::new(0.0_f64, false).validate(&-0.0).is_ok());
    assert!(Max::new(0.0_f64, false).validate(&0.0).is_err());

    let validator = DynMax::new(-0.0_f32, false);
    assert!(validator.validate(&Number::Float32(-0.0)).is_err());
    assert!(validator.validate(&Number::Float32(0.0)).is_err());
    assert!(validator.validate(&Number::Float32(-f32::MIN_POSITIVE)).is_ok());
}

// ============================================================================
// ERROR TEXT
// ============================================================================

#[test]
fn inclusive_violation_display() {
    let err = max(100_i32).validate(&101).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"max: Value must be at most 100 (params: [max=100, actual=101, inclusive=true, representation=int32])"
    );
}

#[test]
fn exclusive_violation_display() {
    let err = max_exclusive(100_i32)
        .validate(&100)
        .unwrap_err()
        .with_field("limits.retries");
    insta::assert_snapshot!(
        err.to_string(),
        @"[limits.retries] max: Value must be less than 100 (params: [max=100, actual=100, inclusive=false, representation=int32])"
    );
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn configured_validator_matches_typed_validator() {
    let configured = MaxConfig::from_json_str(
        r#"{"representation": "float64", "maximum": 3.14, "inclusive": true}"#,
    )
    .unwrap()
    .build()
    .unwrap();
    let typed = max(3.14_f64);

    for value in [3.13, 3.14, 3.140_000_1, f64::NAN] {
        assert_eq!(
            configured.validate(&Number::Float64(value)).is_ok(),
            typed.validate(&value).is_ok(),
        );
    }
}

#[test]
fn configured_big_decimal_from_string() {
    let validator: DynMax = MaxConfig {
        representation: Representation::BigDecimal,
        maximum: RawMaximum::Text("12345678901234567890.5".into()),
        inclusive: false,
    }
    .try_into()
    .unwrap();

    let at = Number::parse(Representation::BigDecimal, "12345678901234567890.50").unwrap();
    let below = Number::parse(Representation::BigDecimal, "12345678901234567890.4999").unwrap();
    assert!(validator.validate(&at).is_err());
    assert!(validator.validate(&below).is_ok());
}

#[test]
fn invalid_maximum_is_reported() {
    let err = MaxConfig::from_json_str(r#"{"representation": "int64", "maximum": "ten"}"#)
        .unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid maximum: invalid int64 literal: \"ten\"");
}

// ============================================================================
// SHARING
// ============================================================================

#[test]
fn validators_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Max<BigDecimal>>();
    assert_send_sync::<DynMax>();

    let validator = Arc::new(Max::new(big_int("1000"), false));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || validator.validate(&BigInt::from(995 + i)).is_ok())
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![true, true, true, true, true, false, false, false]
    );
}

/// In-memory log sink shared with the subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn rejection_emits_debug_event() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(max(1_i64).validate(&1).is_ok());
        assert!(!logs.contents().contains("value rejected by maximum bound"));

        assert!(max(1_i64).validate(&2).is_err());
    });

    let output = logs.contents();
    assert!(output.contains("value rejected by maximum bound"));
    assert!(output.contains("representation=int64"));
    assert!(output.contains("actual=2"));
}
