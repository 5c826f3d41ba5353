//! Property-style checks for complex arithmetic
//!
//! These tests exercise the public API over sampled values from a seeded
//! generator, plus a parameterized table of unit-circle rotations.

use approx::assert_abs_diff_eq;
use argand::constants::EPSILON;
use argand::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use std::f64::consts::PI;

/// Deterministic sample of finite values spread over the plane
fn sample_values(count: usize) -> Vec<Complex> {
    let mut rng = StdRng::seed_from_u64(0x00C0FFEE);
    (0..count)
        .map(|_| {
            Complex::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            )
        })
        .collect()
}

#[test]
fn add_then_subtract_round_trips() {
    let values = sample_values(64);

    for pair in values.chunks(2) {
        let (x, y) = (pair[0], pair[1]);
        let round_trip = (x + y) - y;

        assert_abs_diff_eq!(round_trip.real, x.real, epsilon = EPSILON);
        assert_abs_diff_eq!(round_trip.imaginary, x.imaginary, epsilon = EPSILON);
    }
}

#[test]
fn negation_and_conjugation_are_involutions() {
    for value in sample_values(64) {
        assert_eq!(-(-value), value);
        assert_eq!(value.conjugate().conjugate(), value);
    }
}

#[test]
fn subtraction_matches_addition_of_negation() {
    let values = sample_values(64);

    for pair in values.chunks(2) {
        let (x, y) = (pair[0], pair[1]);
        assert_eq!(x - y, x + (-y));
    }
}

#[test]
fn multiplication_by_reciprocal_yields_one() {
    for value in sample_values(64) {
        let inverse = value.reciprocal().expect("sampled values are non-zero");
        let product = value * inverse;

        assert!(
            product.approx_eq(&Complex::ONE, EPSILON),
            "x * 1/x drifted from one for {}",
            value
        );
    }
}

#[test]
fn division_by_self_yields_one() {
    for value in sample_values(64) {
        let quotient = value.divide(&value).expect("sampled values are non-zero");

        assert!(
            quotient.approx_eq(&Complex::ONE, EPSILON),
            "x / x drifted from one for {}",
            value
        );
    }
}

#[test]
fn division_then_multiplication_round_trips() {
    let values = sample_values(64);

    for pair in values.chunks(2) {
        let (x, y) = (pair[0], pair[1]);
        if y.squared_modulus() < 1e-6 {
            continue;
        }

        let round_trip = x.divide(&y).expect("divisor is non-zero") * y;
        assert!(
            round_trip.approx_eq(&x, EPSILON),
            "(x / y) * y drifted from x for {} and {}",
            x,
            y
        );
    }
}

#[test]
fn rotations_compose_by_angle_addition() {
    let mut rng = StdRng::seed_from_u64(0x0ABCDEF0);

    for _ in 0..64 {
        let a = rng.gen_range(-PI..PI);
        let b = rng.gen_range(-PI..PI);

        let composed = Complex::rotation(a) * Complex::rotation(b);
        let direct = Complex::rotation(a + b);

        assert!(
            composed.approx_eq(&direct, EPSILON),
            "rotation({}) * rotation({}) should equal rotation of the sum",
            a,
            b
        );
    }
}

#[test]
fn rotations_stay_on_the_unit_circle() {
    let mut rng = StdRng::seed_from_u64(0x12345678);

    for _ in 0..64 {
        let theta = rng.gen_range(-4.0 * PI..4.0 * PI);
        assert_abs_diff_eq!(Complex::rotation(theta).modulus(), 1.0, epsilon = EPSILON);
    }
}

#[rstest]
#[case(0.0, 1.0, 0.0)]
#[case(PI / 2.0, 0.0, 1.0)]
#[case(-PI / 2.0, 0.0, -1.0)]
#[case(PI, -1.0, 0.0)]
#[case(PI / 4.0, 2.0_f64.sqrt() / 2.0, 2.0_f64.sqrt() / 2.0)]
#[case(PI / 3.0, 0.5, 3.0_f64.sqrt() / 2.0)]
fn rotation_lands_on_expected_point(
    #[case] theta: f64,
    #[case] expected_real: f64,
    #[case] expected_imaginary: f64,
) {
    let rotation = Complex::rotation(theta);

    assert_abs_diff_eq!(rotation.real, expected_real, epsilon = EPSILON);
    assert_abs_diff_eq!(rotation.imaginary, expected_imaginary, epsilon = EPSILON);
}

#[rstest]
#[case(Complex::ZERO)]
#[case(Complex::ONE)]
#[case(Complex::I)]
#[case(Complex::new(-12.5, 10.25))]
fn serde_round_trip_preserves_components(#[case] value: Complex) {
    let encoded = serde_json::to_string(&value).expect("value serializes");
    let decoded: Complex = serde_json::from_str(&encoded).expect("value deserializes");

    assert_eq!(decoded, value);
}
