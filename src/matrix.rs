//! Matrices.
//!
//! All matrices store their elements in a flat row-major array and follow
//! the column-vector convention: `matrix * vector` treats the vector as a
//! column, and `a * b` composes transforms so that `b` applies first.

use crate::{
    angle::Angle,
    consts::ZERO_TOLERANCE,
    vector::{Vector2, Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// A 2x2 matrix.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix2 {
    elements: [f32; 4],
}

/// A 3x3 matrix.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    elements: [f32; 9],
}

/// A 4x4 matrix for composing affine and projective transforms in
/// homogeneous coordinates.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    elements: [f32; 16],
}

impl Matrix2 {
    /// Creates a new matrix with the given elements, in row-major order.
    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self {
            elements: [m00, m01, m10, m11],
        }
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a matrix with the same value for all elements.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        assert!(i < 2 && j < 2, "index out of bounds");
        self.elements[i * 2 + j]
    }

    /// Returns row `i` of the matrix as a vector.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn row(&self, i: usize) -> Vector2 {
        Vector2::new(self.element(i, 0), self.element(i, 1))
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.elements[0] * self.elements[3] - self.elements[1] * self.elements[2]
    }
}

impl_abs_diff_eq!(Matrix2, |a, b, epsilon| {
    a.elements
        .iter()
        .zip(&b.elements)
        .all(|(lhs, rhs)| f32::abs(lhs - rhs) <= epsilon)
});

impl_relative_eq!(Matrix2, |a, b, epsilon, max_relative| {
    a.elements
        .iter()
        .zip(&b.elements)
        .all(|(lhs, rhs)| ::approx::RelativeEq::relative_eq(lhs, rhs, epsilon, max_relative))
});

impl Matrix3 {
    /// Creates a new matrix with the given elements, in row-major order.
    #[inline]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m20: f32,
        m21: f32,
        m22: f32,
    ) -> Self {
        Self {
            elements: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a matrix with the same value for all elements.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self {
            elements: [value; 9],
        }
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        assert!(i < 3 && j < 3, "index out of bounds");
        self.elements[i * 3 + j]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        assert!(i < 3 && j < 3, "index out of bounds");
        &mut self.elements[i * 3 + j]
    }

    /// Returns row `i` of the matrix as a vector.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::new(self.element(i, 0), self.element(i, 1), self.element(i, 2))
    }

    /// Returns the top-left 2x2 block of the matrix.
    #[inline]
    pub fn top_left_2x2(&self) -> Matrix2 {
        Matrix2::new(
            self.element(0, 0),
            self.element(0, 1),
            self.element(1, 0),
            self.element(1, 1),
        )
    }

    /// Computes the determinant of the matrix by cofactor expansion along
    /// the first column.
    pub fn determinant(&self) -> f32 {
        self.element(0, 0)
            * Matrix2::new(
                self.element(1, 1),
                self.element(1, 2),
                self.element(2, 1),
                self.element(2, 2),
            )
            .determinant()
            - self.element(1, 0)
                * Matrix2::new(
                    self.element(0, 1),
                    self.element(0, 2),
                    self.element(2, 1),
                    self.element(2, 2),
                )
                .determinant()
            + self.element(2, 0)
                * Matrix2::new(
                    self.element(0, 1),
                    self.element(0, 2),
                    self.element(1, 1),
                    self.element(1, 2),
                )
                .determinant()
    }
}

impl_abs_diff_eq!(Matrix3, |a, b, epsilon| {
    a.elements
        .iter()
        .zip(&b.elements)
        .all(|(lhs, rhs)| f32::abs(lhs - rhs) <= epsilon)
});

impl_relative_eq!(Matrix3, |a, b, epsilon, max_relative| {
    a.elements
        .iter()
        .zip(&b.elements)
        .all(|(lhs, rhs)| ::approx::RelativeEq::relative_eq(lhs, rhs, epsilon, max_relative))
});

impl Matrix4 {
    /// Creates a new matrix with the given elements, in row-major order.
    #[inline]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self {
            elements: [
                m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
            ],
        }
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a matrix with the same value for all elements.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self {
            elements: [value; 16],
        }
    }

    /// Creates a matrix from the given flat array of elements in row-major
    /// order.
    #[inline]
    pub const fn from_array(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(row_1: Vector4, row_2: Vector4, row_3: Vector4, row_4: Vector4) -> Self {
        Self::new(
            row_1.x(),
            row_1.y(),
            row_1.z(),
            row_1.w(),
            row_2.x(),
            row_2.y(),
            row_2.z(),
            row_2.w(),
            row_3.x(),
            row_3.y(),
            row_3.z(),
            row_3.w(),
            row_4.x(),
            row_4.y(),
            row_4.z(),
            row_4.w(),
        )
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        Self::new(
            diagonal.x(),
            0.0,
            0.0,
            0.0,
            0.0,
            diagonal.y(),
            0.0,
            0.0,
            0.0,
            0.0,
            diagonal.z(),
            0.0,
            0.0,
            0.0,
            0.0,
            diagonal.w(),
        )
    }

    /// Creates a matrix translating points by the given vector.
    #[inline]
    pub const fn translation(translation: &Vector3) -> Self {
        Self::new(
            1.0,
            0.0,
            0.0,
            translation.x(),
            0.0,
            1.0,
            0.0,
            translation.y(),
            0.0,
            0.0,
            1.0,
            translation.z(),
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Creates a matrix rotating by the given angle about the x-axis.
    #[inline]
    pub fn rotation_x(angle: impl Angle) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::new(
            1.0, 0.0, 0.0, 0.0, 0.0, cos, -sin, 0.0, 0.0, sin, cos, 0.0, 0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix rotating by the given angle about the y-axis.
    #[inline]
    pub fn rotation_y(angle: impl Angle) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::new(
            cos, 0.0, sin, 0.0, 0.0, 1.0, 0.0, 0.0, -sin, 0.0, cos, 0.0, 0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix rotating by the given angle about the z-axis.
    #[inline]
    pub fn rotation_z(angle: impl Angle) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::new(
            cos, -sin, 0.0, 0.0, sin, cos, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix rotating by the given angle about the given axis.
    /// The axis does not have to be normalized. A zero axis yields
    /// non-finite elements.
    pub fn rotation_about_axis(axis: &Vector3, angle: impl Angle) -> Self {
        let axis = axis.normalized();
        let (sin, cos) = angle.radians().sin_cos();
        let k = 1.0 - cos;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        Self::new(
            x * x * k + cos,
            x * y * k - z * sin,
            x * z * k + y * sin,
            0.0,
            x * y * k + z * sin,
            y * y * k + cos,
            y * z * k - x * sin,
            0.0,
            x * z * k - y * sin,
            y * z * k + x * sin,
            z * z * k + cos,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Creates a matrix scaling uniformly by the given factor.
    #[inline]
    pub const fn scaling(factor: f32) -> Self {
        Self::from_diagonal(&Vector4::new(factor, factor, factor, 1.0))
    }

    /// Creates a matrix scaling each axis by the corresponding component of
    /// the given vector.
    #[inline]
    pub const fn nonuniform_scaling(scaling: &Vector3) -> Self {
        Self::from_diagonal(&Vector4::new(scaling.x(), scaling.y(), scaling.z(), 1.0))
    }

    /// Creates an orthographic projection matrix mapping the axis-aligned
    /// box with the given extents to the cube spanning -1 to 1 along every
    /// axis. The view direction is the negative z-axis, with `near` and
    /// `far` the distances to the clipping planes.
    pub fn orthographic_projection(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self::new(
            2.0 / (right - left),
            0.0,
            0.0,
            -(right + left) / (right - left),
            0.0,
            2.0 / (top - bottom),
            0.0,
            -(top + bottom) / (top - bottom),
            0.0,
            0.0,
            -2.0 / (far - near),
            -(far + near) / (far - near),
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Creates a perspective projection matrix for a symmetric view frustum
    /// with the given ratio of width to height, vertical field of view and
    /// distances to the near and far clipping planes. The view direction is
    /// the negative z-axis.
    pub fn perspective_projection(
        aspect_ratio: f32,
        vertical_field_of_view: impl Angle,
        near_distance: f32,
        far_distance: f32,
    ) -> Self {
        let f = 1.0 / f32::tan(0.5 * vertical_field_of_view.radians());
        Self::new(
            f / aspect_ratio,
            0.0,
            0.0,
            0.0,
            0.0,
            f,
            0.0,
            0.0,
            0.0,
            0.0,
            (far_distance + near_distance) / (near_distance - far_distance),
            2.0 * far_distance * near_distance / (near_distance - far_distance),
            0.0,
            0.0,
            -1.0,
            0.0,
        )
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking at
    /// `target`, with `up` indicating the upward direction. `up` must not be
    /// parallel to the view direction, or the result will be non-finite.
    pub fn look_at(eye: &Vector3, target: &Vector3, up: &Vector3) -> Self {
        let forward = (target - eye).normalized();
        let right = forward.cross(up).normalized();
        let camera_up = right.cross(&forward);
        Self::new(
            right.x(),
            right.y(),
            right.z(),
            -right.dot(eye),
            camera_up.x(),
            camera_up.y(),
            camera_up.z(),
            -camera_up.dot(eye),
            -forward.x(),
            -forward.y(),
            -forward.z(),
            forward.dot(eye),
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        assert!(i < 4 && j < 4, "index out of bounds");
        self.elements[i * 4 + j]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        assert!(i < 4 && j < 4, "index out of bounds");
        &mut self.elements[i * 4 + j]
    }

    /// Returns row `i` of the matrix as a vector.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4 {
        Vector4::new(
            self.element(i, 0),
            self.element(i, 1),
            self.element(i, 2),
            self.element(i, 3),
        )
    }

    /// Returns column `j` of the matrix as a vector.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn column(&self, j: usize) -> Vector4 {
        Vector4::new(
            self.element(0, j),
            self.element(1, j),
            self.element(2, j),
            self.element(3, j),
        )
    }

    /// Returns a reference to the elements of the matrix as a flat array in
    /// row-major order.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.elements
    }

    /// Returns the elements of the matrix as a flat array in row-major
    /// order.
    #[inline]
    pub const fn to_array(self) -> [f32; 16] {
        self.elements
    }

    /// Returns the top-left 3x3 block of the matrix.
    pub fn top_left_3x3(&self) -> Matrix3 {
        Matrix3::new(
            self.element(0, 0),
            self.element(0, 1),
            self.element(0, 2),
            self.element(1, 0),
            self.element(1, 1),
            self.element(1, 2),
            self.element(2, 0),
            self.element(2, 1),
            self.element(2, 2),
        )
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f32) -> f32) -> Self {
        Self {
            elements: self.elements.map(f),
        }
    }

    /// Returns the transpose of this matrix.
    pub fn transposed(&self) -> Self {
        let mut transposed = Self::zeros();
        for i in 0..4 {
            for j in 0..4 {
                *transposed.element_mut(j, i) = self.element(i, j);
            }
        }
        transposed
    }

    /// Computes the determinant of the matrix by cofactor expansion along
    /// the first column.
    pub fn determinant(&self) -> f32 {
        self.element(0, 0) * self.minor(0, 0).determinant()
            - self.element(1, 0) * self.minor(1, 0).determinant()
            + self.element(2, 0) * self.minor(2, 0).determinant()
            - self.element(3, 0) * self.minor(3, 0).determinant()
    }

    /// Whether the magnitude of the determinant exceeds the zero tolerance,
    /// meaning [`inverted`](Self::inverted) will give a finite result.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        f32::abs(self.determinant()) > ZERO_TOLERANCE
    }

    /// Returns the inverse of this matrix, computed as the adjugate divided
    /// by the determinant. If the matrix is not invertible, the result will
    /// be non-finite; call [`is_invertible`](Self::is_invertible) first to
    /// guard against that.
    pub fn inverted(&self) -> Self {
        let determinant = self.determinant();
        let mut inverse = Self::zeros();
        for i in 0..4 {
            for j in 0..4 {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                let cofactor = sign * self.minor(i, j).determinant();
                *inverse.element_mut(j, i) = cofactor / determinant;
            }
        }
        inverse
    }

    /// Divides every element by the last element, which performs the
    /// perspective divide when the matrix holds projected homogeneous
    /// columns. A zero last element yields non-finite elements.
    #[inline]
    pub fn homogenized(&self) -> Self {
        let last = self.elements[15];
        self.mapped(|element| element / last)
    }

    /// The 3x3 matrix left after removing row `i` and column `j`.
    fn minor(&self, i: usize, j: usize) -> Matrix3 {
        let mut minor = Matrix3::zeros();
        let mut minor_row = 0;
        for row in 0..4 {
            if row == i {
                continue;
            }
            let mut minor_col = 0;
            for col in 0..4 {
                if col == j {
                    continue;
                }
                *minor.element_mut(minor_row, minor_col) = self.element(row, col);
                minor_col += 1;
            }
            minor_row += 1;
        }
        minor
    }
}

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4 {
        elements: ::std::array::from_fn(|idx| a.elements[idx] + b.elements[idx]),
    }
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4 {
        elements: ::std::array::from_fn(|idx| a.elements[idx] - b.elements[idx]),
    }
});

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    let mut product = Matrix4::zeros();
    for i in 0..4 {
        for j in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a.element(i, k) * b.element(k, j);
            }
            *product.element_mut(i, j) = sum;
        }
    }
    product
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    Vector4::new(
        a.row(0).dot(b),
        a.row(1).dot(b),
        a.row(2).dot(b),
        a.row(3).dot(b),
    )
});

impl_binop!(Mul, mul, Matrix4, f32, Matrix4, |a, b| {
    let factor = *b;
    a.mapped(|element| element * factor)
});

impl_binop!(Mul, mul, f32, Matrix4, Matrix4, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Matrix4, f32, Matrix4, |a, b| { a.mul(b.recip()) });

impl_binop_assign!(AddAssign, add_assign, Matrix4, Matrix4, |a, b| {
    for (lhs, rhs) in a.elements.iter_mut().zip(&b.elements) {
        *lhs += rhs;
    }
});

impl_binop_assign!(SubAssign, sub_assign, Matrix4, Matrix4, |a, b| {
    for (lhs, rhs) in a.elements.iter_mut().zip(&b.elements) {
        *lhs -= rhs;
    }
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, Matrix4, |a, b| {
    *a = (&*a).mul(b);
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, f32, |a, b| {
    for element in &mut a.elements {
        *element *= *b;
    }
});

impl_binop_assign!(DivAssign, div_assign, Matrix4, f32, |a, b| {
    for element in &mut a.elements {
        *element /= *b;
    }
});

impl_unary_op!(Neg, neg, Matrix4, Matrix4, |val| {
    val.mapped(|element| -element)
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.elements
        .iter()
        .zip(&b.elements)
        .all(|(lhs, rhs)| f32::abs(lhs - rhs) <= epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.elements
        .iter()
        .zip(&b.elements)
        .all(|(lhs, rhs)| ::approx::RelativeEq::relative_eq(lhs, rhs, epsilon, max_relative))
});
