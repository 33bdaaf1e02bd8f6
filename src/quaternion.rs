//! Quaternions.

use crate::{angle::Angle, matrix::Matrix4, vector::Vector3};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// A Hamilton quaternion with imaginary part `(x, y, z)` and real part `w`.
///
/// Unit quaternions represent 3D rotations; the type itself does not
/// enforce unit length, callers opt in via
/// [`normalized`](Self::normalized) or construct directly with
/// [`from_axis_angle`](Self::from_axis_angle).
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Quaternion {
    /// Creates a new quaternion with the given real part and imaginary
    /// components.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new quaternion with the given real and imaginary parts.
    #[inline]
    pub const fn from_parts(real: f32, imag: Vector3) -> Self {
        Self::new(real, imag.x(), imag.y(), imag.z())
    }

    /// Creates the identity quaternion, with a unit real part and zero
    /// imaginary part.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates a quaternion with all components zero. Note that this is not
    /// the multiplicative identity.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a quaternion with the same value for all four components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates the unit quaternion rotating by the given angle about the
    /// given axis. The axis does not have to be normalized, but a zero axis
    /// yields non-finite components.
    pub fn from_axis_angle(axis: &Vector3, angle: impl Angle) -> Self {
        let half_angle = 0.5 * angle.radians();
        Self::from_parts(
            f32::cos(half_angle),
            axis.normalized() * f32::sin(half_angle),
        )
        .normalized()
    }

    /// The x-component of the imaginary part.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component of the imaginary part.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component of the imaginary part.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// The real part.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// The real part.
    #[inline]
    pub const fn real(&self) -> f32 {
        self.w
    }

    /// The imaginary part.
    #[inline]
    pub const fn imag(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Sets the imaginary part to the given vector, leaving the real part
    /// unchanged.
    #[inline]
    pub const fn set_imag(&mut self, imag: Vector3) {
        self.x = imag.x();
        self.y = imag.y();
        self.z = imag.z();
    }

    /// Computes the norm (magnitude) of the quaternion, the Euclidean norm
    /// of all four components.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the quaternion.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Computes the normalized version of the quaternion. The zero
    /// quaternion yields non-finite components.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Self::new(
            self.w / norm,
            self.x / norm,
            self.y / norm,
            self.z / norm,
        )
    }

    /// Computes the conjugate of the quaternion, with negated imaginary
    /// part and unchanged real part.
    #[inline]
    pub fn conjugated(&self) -> Self {
        Self::from_parts(self.real(), -self.imag())
    }

    /// Converts the quaternion to a homogeneous rotation matrix. The
    /// quaternion is assumed to have unit length.
    pub fn to_homogeneous_matrix(&self) -> Matrix4 {
        let Self { x, y, z, w } = *self;
        Matrix4::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y - w * z),
            2.0 * (x * z + w * y),
            0.0,
            2.0 * (x * y + w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z - w * x),
            0.0,
            2.0 * (x * z - w * y),
            2.0 * (y * z + w * x),
            1.0 - 2.0 * (x * x + y * y),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.w + b.w, a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.w - b.w, a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Quaternion, f32, Quaternion, |a, b| {
    Quaternion::new(a.w * *b, a.x * *b, a.y * *b, a.z * *b)
});

impl_binop!(Mul, mul, f32, Quaternion, Quaternion, |a, b| { b.mul(*a) });

// Hamilton product.
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    let (r1, r2) = (a.real(), b.real());
    let (im1, im2) = (a.imag(), b.imag());
    Quaternion::from_parts(
        r1 * r2 - im1.dot(&im2),
        im1.cross(&im2) + r1 * im2 + r2 * im1,
    )
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |a, b| {
    a.w += b.w;
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |a, b| {
    a.w -= b.w;
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, f32, |a, b| {
    a.w *= *b;
    a.x *= *b;
    a.y *= *b;
    a.z *= *b;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = (&*a).mul(b);
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| {
    Quaternion::new(-val.w, -val.x, -val.y, -val.z)
});

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    f32::abs(a.w - b.w) <= epsilon && a.imag().abs_diff_eq(&b.imag(), epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    ::approx::RelativeEq::relative_eq(&a.w, &b.w, epsilon, max_relative)
        && a.imag().relative_eq(&b.imag(), epsilon, max_relative)
});
