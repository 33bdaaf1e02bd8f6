//! Math utilities for 3D geometric computation: vectors, square matrices,
//! quaternions and angle units.

#[macro_use]
mod macros;

pub mod angle;
pub mod consts;
pub mod matrix;
pub mod quaternion;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use quaternion::Quaternion;
pub use vector::{Vector2, Vector3, Vector4};
