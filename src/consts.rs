//! Numeric `f32` constants.

pub use std::f32::consts::*;

pub const TWO_PI: f32 = TAU;

/// Magnitudes below this threshold are treated as zero throughout the
/// library. It is the default epsilon for approximate equality and the
/// determinant cutoff for [`Matrix4::is_invertible`](crate::Matrix4::is_invertible).
pub const ZERO_TOLERANCE: f32 = 1e-6;
