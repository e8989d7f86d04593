use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::Result;
use crate::math::{
    approx_equal, approx_equal_with, floor_div, format_float, normalize_index, ABS_TOL, REL_TOL,
};

/// Immutable 2D affine transform in 2x3 form.
///
/// The six components describe the map
///
/// ```text
/// x' = xx * x + xy * y + xt
/// y' = yx * x + yy * y + yt
/// ```
///
/// and are exposed as a read-only sequence in the order
/// `xx, xy, xt, yx, yy, yt`. Arithmetic is component-wise. Equality is
/// approximate, component by component, as for [`Vector`](super::Vector).
#[derive(Clone, Copy)]
pub struct Matrix(nalgebra::Matrix2x3<f64>);

impl Matrix {
    /// Number of components.
    pub const LEN: usize = 6;

    /// Creates a matrix from its six components in row order.
    #[must_use]
    pub fn new(xx: f64, xy: f64, xt: f64, yx: f64, yy: f64, yt: f64) -> Self {
        Self(nalgebra::Matrix2x3::new(xx, xy, xt, yx, yy, yt))
    }

    /// Uniform scale: `Matrix(s, 0, 0, 0, s, 0)`.
    #[must_use]
    pub fn scale(scale: f64) -> Self {
        Self::scale_xy(scale, scale)
    }

    /// Scale with separate factors: `Matrix(sx, 0, 0, 0, sy, 0)`.
    #[must_use]
    pub fn scale_xy(scale_x: f64, scale_y: f64) -> Self {
        Self::new(scale_x, 0.0, 0.0, 0.0, scale_y, 0.0)
    }

    /// Translation components only: `Matrix(0, 0, x, 0, 0, y)`.
    ///
    /// The linear part is left zero, not identity, so this is an offset to
    /// be added to another matrix rather than a standalone transform.
    #[must_use]
    pub fn translate(x: f64, y: f64) -> Self {
        Self::new(0.0, 0.0, x, 0.0, 0.0, y)
    }

    /// Counterclockwise rotation by `angle` radians about the origin.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0)
    }

    /// Returns `xx` (x scale factor, row 0 column 0).
    #[must_use]
    pub fn xx(&self) -> f64 {
        self.0[(0, 0)]
    }

    /// Returns `xy` (row 0 column 1).
    #[must_use]
    pub fn xy(&self) -> f64 {
        self.0[(0, 1)]
    }

    /// Returns `xt` (x translation, row 0 column 2).
    #[must_use]
    pub fn xt(&self) -> f64 {
        self.0[(0, 2)]
    }

    /// Returns `yx` (row 1 column 0).
    #[must_use]
    pub fn yx(&self) -> f64 {
        self.0[(1, 0)]
    }

    /// Returns `yy` (y scale factor, row 1 column 1).
    #[must_use]
    pub fn yy(&self) -> f64 {
        self.0[(1, 1)]
    }

    /// Returns `yt` (y translation, row 1 column 2).
    #[must_use]
    pub fn yt(&self) -> f64 {
        self.0[(1, 2)]
    }

    /// Component-wise floor division by a scalar.
    #[must_use]
    pub fn floor_div(self, rhs: f64) -> Self {
        Self(self.0.map(|c| floor_div(c, rhs)))
    }

    /// Returns `true` if all six components are exactly equal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn exact_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    /// Always [`Matrix::LEN`].
    #[must_use]
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    /// Always `false`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the component at `index` in the order
    /// `xx, xy, xt, yx, yy, yt`. Negative indices count from the back.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Shape2dError::IndexOutOfRange`] outside `-6..6`.
    pub fn get(&self, index: isize) -> Result<f64> {
        let i = normalize_index(index, Self::LEN)?;
        Ok(self.0[(i / 3, i % 3)])
    }

    /// Iterates the components in the order `xx, xy, xt, yx, yy, yt`.
    pub fn iter(&self) -> std::array::IntoIter<f64, 6> {
        self.to_array().into_iter()
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        [self.xx(), self.xy(), self.xt(), self.yx(), self.yy(), self.yt()]
    }
}

impl From<Matrix> for [f64; 6] {
    fn from(m: Matrix) -> Self {
        m.to_array()
    }
}

impl IntoIterator for Matrix {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 6>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Matrix {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 6>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Panics if `index` is 6 or more. Use [`Matrix::get`] for checked access.
impl Index<usize> for Matrix {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        // nalgebra stores column-major; components are addressed row-major.
        &self.0[(index / 3, index % 3)]
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| approx_equal(a, b))
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        ABS_TOL
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        REL_TOL
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| approx_equal_with(a, b, max_relative, epsilon))
    }
}

impl Neg for Matrix {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Add for Matrix {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Matrix {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl Div<f64> for Matrix {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(format_float).collect();
        write!(f, "Matrix({})", parts.join(", "))
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
