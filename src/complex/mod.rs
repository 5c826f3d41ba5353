//! # Complex Number Module
//!
//! This module provides the double-precision complex number representation
//! used for calculations on the complex plane.
//!
//! ## Design Philosophy
//!
//! The `Complex` type stores both components exactly as provided, avoiding
//! any normalization or validation that would alter the values a caller
//! constructed. Every operation returns a new instance and leaves its
//! operands untouched, so values can be shared freely.
//!
//! ## Internal Storage
//!
//! Components are stored as two `f64` values:
//! - Values maintain full IEEE 754 double precision
//! - No conversion artifacts during storage
//! - Direct arithmetic on the components preserves accuracy
//!
//! ## Equality and Hashing
//!
//! Equality compares components exactly. Computed results such as rotations
//! carry the usual floating-point rounding, so assertions about them should
//! use [`Complex::approx_eq`] with a tolerance rather than `==`. Hashing is
//! consistent with equality, which makes the type usable as a map key for
//! finite values.
//!
//! ## Examples
//!
//! ```rust
//! use argand::complex::Complex;
//!
//! let one_plus_i = Complex::new(1.0, 1.0);
//! let doubled = one_plus_i.scale(2.0);
//! assert_eq!(doubled, Complex::new(2.0, 2.0));
//!
//! // Multiplying by a rotation turns a value around the origin
//! let quarter_turn = Complex::rotation(std::f64::consts::PI / 2.0);
//! let turned = Complex::ONE * quarter_turn;
//! assert!(turned.approx_eq(&Complex::I, argand::constants::EPSILON));
//! ```

use nalgebra::Vector2;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::DEG2RAD;
use crate::{ArgandError, Result};

/// Double-precision complex number `real + imaginary·i`
///
/// Represents a point on the complex plane. This struct is the fundamental
/// value type of the crate; arithmetic, rotations, and polar conversions
/// all produce new instances of it.
///
/// # Storage Strategy
///
/// - Each component stored as `f64` for maximum precision
/// - No internal normalization of the components
/// - Direct storage preserves exact input values
/// - Compatible with nalgebra `Vector2` for linear algebra operations
///
/// # Value Semantics
///
/// The type is `Copy` and every operation is a pure function of its
/// inputs. Instances are safe to share across threads without
/// synchronization since nothing ever mutates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    /// Real component (horizontal axis of the plane)
    pub real: f64,
    /// Imaginary component (vertical axis of the plane)
    pub imaginary: f64,
}

impl Complex {
    /// Additive identity, `0 + 0i`
    pub const ZERO: Complex = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    /// Multiplicative identity, `1 + 0i`
    pub const ONE: Complex = Complex {
        real: 1.0,
        imaginary: 0.0,
    };

    /// Imaginary unit, `0 + 1i`
    pub const I: Complex = Complex {
        real: 0.0,
        imaginary: 1.0,
    };

    /// Creates a new complex number from its components
    ///
    /// Both components are stored exactly as provided, with no validation
    /// or normalization.
    ///
    /// # Arguments
    ///
    /// * `real` - Real component
    /// * `imaginary` - Imaginary component
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    ///
    /// let value = Complex::new(-12.0, 10.0);
    /// assert_eq!(value.real, -12.0);
    /// assert_eq!(value.imaginary, 10.0);
    /// ```
    pub fn new(real: f64, imaginary: f64) -> Self {
        Complex { real, imaginary }
    }

    /// Creates a unit-modulus rotation by `theta` radians
    ///
    /// Returns `cos θ + i·sin θ`. Multiplying any complex number by the
    /// result turns it by `theta` around the origin.
    ///
    /// # Precision Notes
    ///
    /// - `rotation(0.0)` is exactly [`Complex::ONE`]
    /// - Other angles carry the rounding of `cos`/`sin`; compare the
    ///   result with [`Complex::approx_eq`] rather than `==`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    /// use argand::constants::EPSILON;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(Complex::rotation(0.0), Complex::ONE);
    ///
    /// let quarter_turn = Complex::rotation(PI / 2.0);
    /// assert!(quarter_turn.approx_eq(&Complex::I, EPSILON));
    /// ```
    pub fn rotation(theta: f64) -> Self {
        Complex {
            real: theta.cos(),
            imaginary: theta.sin(),
        }
    }

    /// Creates a unit-modulus rotation by an angle given in degrees
    ///
    /// Converts with the high-precision [`DEG2RAD`] factor and delegates
    /// to [`Complex::rotation`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    /// use argand::constants::EPSILON;
    ///
    /// let quarter_turn = Complex::rotation_degrees(90.0);
    /// assert!(quarter_turn.approx_eq(&Complex::I, EPSILON));
    /// ```
    pub fn rotation_degrees(degrees: f64) -> Self {
        Self::rotation(degrees * DEG2RAD)
    }

    /// Creates a complex number from polar coordinates
    ///
    /// # Arguments
    ///
    /// * `modulus` - Distance from the origin
    /// * `argument` - Angle from the positive real axis in radians
    ///
    /// # Mathematical Conversion
    ///
    /// - `real = modulus * cos(argument)`
    /// - `imaginary = modulus * sin(argument)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    ///
    /// let on_axis = Complex::from_polar(2.0, 0.0);
    /// assert_eq!(on_axis, Complex::new(2.0, 0.0));
    /// ```
    pub fn from_polar(modulus: f64, argument: f64) -> Self {
        Complex {
            real: modulus * argument.cos(),
            imaginary: modulus * argument.sin(),
        }
    }

    /// Converts to polar coordinates
    ///
    /// Returns a `(modulus, argument)` tuple with the argument in
    /// `(-π, π]`. The origin maps to `(0.0, 0.0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    ///
    /// let value = Complex::new(3.0, 4.0);
    /// let (modulus, argument) = value.to_polar();
    /// assert_eq!(modulus, 5.0);
    /// assert!((argument - (4.0_f64).atan2(3.0)).abs() < 1e-15);
    /// ```
    pub fn to_polar(&self) -> (f64, f64) {
        let modulus = self.modulus();

        if modulus == 0.0 {
            return (0.0, 0.0);
        }

        (modulus, self.argument())
    }

    /// Calculates the modulus (magnitude) of the complex number
    ///
    /// # Mathematical Formula
    ///
    /// `modulus = sqrt(real² + imaginary²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    ///
    /// let value = Complex::new(3.0, 4.0);
    /// assert_eq!(value.modulus(), 5.0);
    /// ```
    pub fn modulus(&self) -> f64 {
        self.squared_modulus().sqrt()
    }

    /// Calculates the squared modulus
    ///
    /// Avoids the square root of [`Complex::modulus`] when only relative
    /// magnitude matters.
    ///
    /// # Mathematical Formula
    ///
    /// `squared_modulus = real² + imaginary²`
    pub fn squared_modulus(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// Calculates the argument (angle from the positive real axis)
    ///
    /// Returns `atan2(imaginary, real)` in radians, in `(-π, π]`.
    /// The argument of zero is `0.0`.
    pub fn argument(&self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Multiplies both components by a real scalar
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    ///
    /// let one_minus_i = Complex::new(1.0, -1.0);
    /// assert_eq!(one_minus_i.scale(2.0), Complex::new(2.0, -2.0));
    /// ```
    pub fn scale(&self, factor: f64) -> Complex {
        Complex {
            real: self.real * factor,
            imaginary: self.imaginary * factor,
        }
    }

    /// Returns the complex conjugate
    ///
    /// Mirrors the value across the real axis: `(real, -imaginary)`.
    pub fn conjugate(&self) -> Complex {
        Complex {
            real: self.real,
            imaginary: -self.imaginary,
        }
    }

    /// Calculates the multiplicative inverse
    ///
    /// # Mathematical Formula
    ///
    /// `reciprocal = conjugate / squared_modulus`
    ///
    /// # Errors
    ///
    /// Returns [`ArgandError::DivisionByZero`] when the squared modulus is
    /// exactly `0.0`. The guard runs before any component arithmetic, so
    /// no partial or NaN result is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    ///
    /// let two = Complex::new(2.0, 0.0);
    /// assert_eq!(two.reciprocal().unwrap(), Complex::new(0.5, 0.0));
    ///
    /// assert!(Complex::ZERO.reciprocal().is_err());
    /// ```
    pub fn reciprocal(&self) -> Result<Complex> {
        let squared = self.squared_modulus();

        if squared == 0.0 {
            return Err(ArgandError::DivisionByZero(
                "reciprocal of a value with zero modulus".to_string(),
            ));
        }

        Ok(Complex {
            real: self.real / squared,
            imaginary: -self.imaginary / squared,
        })
    }

    /// Divides by another complex number
    ///
    /// Multiplies by the reciprocal of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgandError::DivisionByZero`] when `other` has a squared
    /// modulus of exactly `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    ///
    /// let one_minus_i = Complex::new(1.0, -1.0);
    /// let one_plus_i = Complex::new(1.0, 1.0);
    /// let quotient = one_minus_i.divide(&one_plus_i).unwrap();
    /// assert_eq!(quotient, Complex::new(0.0, -1.0));
    ///
    /// assert!(Complex::ONE.divide(&Complex::ZERO).is_err());
    /// ```
    pub fn divide(&self, other: &Complex) -> Result<Complex> {
        if other.squared_modulus() == 0.0 {
            return Err(ArgandError::DivisionByZero(
                "divisor has zero modulus".to_string(),
            ));
        }

        Ok(*self * other.reciprocal()?)
    }

    /// Compares two values within an absolute per-component tolerance
    ///
    /// Intended for derived values such as rotations or chained
    /// arithmetic; exact comparisons should use `==`.
    /// [`crate::constants::EPSILON`] is the conventional tolerance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    /// use argand::constants::EPSILON;
    /// use std::f64::consts::PI;
    ///
    /// let turned = Complex::rotation(PI / 2.0);
    /// assert!(turned.approx_eq(&Complex::I, EPSILON));
    /// ```
    pub fn approx_eq(&self, other: &Complex, tolerance: f64) -> bool {
        (self.real - other.real).abs() <= tolerance
            && (self.imaginary - other.imaginary).abs() <= tolerance
    }

    /// Converts to a nalgebra `Vector2` for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argand::complex::Complex;
    ///
    /// let value = Complex::new(1.0, 2.0);
    /// let vec = value.to_vector2();
    /// assert_eq!(vec.x, 1.0);
    /// assert_eq!(vec.y, 2.0);
    /// ```
    pub fn to_vector2(&self) -> Vector2<f64> {
        Vector2::new(self.real, self.imaginary)
    }

    /// Creates a complex number from a nalgebra `Vector2`
    ///
    /// The `x` component becomes the real part and the `y` component the
    /// imaginary part.
    pub fn from_vector2(vec: Vector2<f64>) -> Self {
        Complex {
            real: vec.x,
            imaginary: vec.y,
        }
    }
}

impl fmt::Display for Complex {
    /// Renders as `Complex{real=<R>, imaginary=<I>}`
    ///
    /// Components use Rust's debug float formatting, so integral values
    /// carry a trailing `.0` (for example `Complex{real=1.0, imaginary=-1.0}`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Complex{{real={:?}, imaginary={:?}}}",
            self.real, self.imaginary
        )
    }
}

// Equality is exact per component; finite components are assumed when the
// type is used as a map key.
impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Adding +0.0 collapses -0.0, so numerically equal components
        // share one bit pattern.
        (self.real + 0.0).to_bits().hash(state);
        (self.imaginary + 0.0).to_bits().hash(state);
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex {
            real: self.real + other.real,
            imaginary: self.imaginary + other.imaginary,
        }
    }
}

impl std::ops::Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex {
            real: self.real - other.real,
            imaginary: self.imaginary - other.imaginary,
        }
    }
}

impl std::ops::Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex {
            real: -self.real,
            imaginary: -self.imaginary,
        }
    }
}

impl std::ops::Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex {
            real: self.real * other.real - self.imaginary * other.imaginary,
            imaginary: self.real * other.imaginary + self.imaginary * other.real,
        }
    }
}

impl std::ops::Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, scalar: f64) -> Complex {
        self.scale(scalar)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}
