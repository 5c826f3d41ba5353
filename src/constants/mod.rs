//! Constants module for complex plane calculations

use std::f64::consts::PI;

// Comparison tolerances
/// Tolerance for approximate comparison of derived values
pub const EPSILON: f64 = 1e-9;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
