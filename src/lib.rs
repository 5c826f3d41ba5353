//! Argand: double-precision complex number arithmetic for the complex plane
//!
//! This crate provides an immutable complex number value type with exact
//! component storage, polar-form conversions, and rotation factories for
//! turning points on the plane by an angle.

use thiserror::Error;

pub mod complex;
pub mod constants;

// Re-export commonly used types
pub use complex::Complex;

/// Main error type for the argand library
#[derive(Debug, Error)]
pub enum ArgandError {
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}

/// Result type for argand operations
pub type Result<T> = std::result::Result<T, ArgandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_display() {
        let err = ArgandError::DivisionByZero("reciprocal of zero modulus".to_string());
        assert_eq!(
            err.to_string(),
            "Division by zero: reciprocal of zero modulus"
        );
    }

    #[test]
    fn test_error_propagates_through_result() {
        fn halve(value: Complex) -> Result<Complex> {
            let two = Complex::new(2.0, 0.0);
            value.divide(&two)
        }

        let halved = halve(Complex::ONE).expect("divisor is non-zero");
        assert_eq!(halved, Complex::new(0.5, 0.0));
    }
}
