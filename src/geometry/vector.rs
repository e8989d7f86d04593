use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{Result, Shape2dError};
use crate::math::{
    approx_equal, approx_equal_with, floor_div, format_fixed, format_float, normalize_index,
    ABS_TOL, REL_TOL,
};

/// Immutable 2D vector.
///
/// All operations return new values. Equality (`==`) is approximate: each
/// component is compared with [`approx_equal`]. Use [`Vector::exact_eq`]
/// when exact identity is needed, or the [`approx`] macros for custom
/// tolerances.
///
/// The vector also behaves as a read-only sequence of two components,
/// `x` then `y`.
#[derive(Clone, Copy)]
pub struct Vector(nalgebra::Vector2<f64>);

impl Vector {
    /// Number of components.
    pub const LEN: usize = 2;

    /// Creates a vector from its two components.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self(nalgebra::Vector2::new(x, y))
    }

    /// Creates a vector from a sequence of exactly two numbers.
    ///
    /// Any item type that converts losslessly into `f64` is accepted, so
    /// `[1, 2]`, `vec![1.0, 2.0]` and another `Vector` all work. Wider
    /// integers (`i64`, `u64`, `usize`) do not convert losslessly and must
    /// be cast to `f64` by the caller.
    ///
    /// At most three items are read from `items`.
    ///
    /// # Errors
    ///
    /// Returns [`Shape2dError::InvalidArgument`] if the sequence does not
    /// hold exactly two items.
    pub fn from_sequence<I, T>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let mut iter = items.into_iter().map(Into::into);
        let got = match (iter.next(), iter.next(), iter.next()) {
            (Some(x), Some(y), None) => return Ok(Self::new(x, y)),
            (None, _, _) => "0",
            (Some(_), None, _) => "1",
            (Some(_), Some(_), Some(_)) => "more than 2",
        };
        Err(Shape2dError::InvalidArgument(format!(
            "a vector requires a sequence of length 2, got {got}"
        )))
    }

    /// Creates a vector from a length and an angle.
    ///
    /// `angle` is in radians, measured counterclockwise from the positive
    /// x direction.
    #[must_use]
    pub fn polar(length: f64, angle: f64) -> Self {
        Self::new(length * angle.cos(), length * angle.sin())
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Returns the Euclidean length, `sqrt(x² + y²)`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.0.norm()
    }

    /// Returns the angle from the positive x axis, `atan2(y, x)`, in
    /// `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }

    /// Returns the vector scaled to length 1.
    ///
    /// The zero vector has no direction; its unit vector has NaN
    /// components.
    #[must_use]
    pub fn unit(&self) -> Self {
        *self / self.length()
    }

    /// Component-wise floor division by a scalar.
    #[must_use]
    pub fn floor_div(self, rhs: f64) -> Self {
        Self(self.0.map(|c| floor_div(c, rhs)))
    }

    /// Returns `true` if both components are exactly equal, with no
    /// tolerance (`-0.0` equals `0.0`, NaN equals nothing).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn exact_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    /// Always [`Vector::LEN`].
    #[must_use]
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    /// Always `false`: a vector has two components.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the component at `index`. `0`/`-2` is `x`, `1`/`-1` is `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Shape2dError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: isize) -> Result<f64> {
        let i = normalize_index(index, Self::LEN)?;
        Ok(self.0[i])
    }

    /// Iterates the components, `x` then `y`.
    pub fn iter(&self) -> std::array::IntoIter<f64, 2> {
        self.to_array().into_iter()
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.0.x, self.0.y]
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for [f64; 2] {
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = Shape2dError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_sequence(values.iter().copied())
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Shape2dError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_sequence(values)
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Vector {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Panics if `index` is not 0 or 1, like slice indexing. Use
/// [`Vector::get`] for checked access.
impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        approx_equal(self.0.x, other.0.x) && approx_equal(self.0.y, other.0.y)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        ABS_TOL
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.x.abs_diff_eq(&other.0.x, epsilon) && self.0.y.abs_diff_eq(&other.0.y, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        REL_TOL
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        approx_equal_with(self.0.x, other.0.x, max_relative, epsilon)
            && approx_equal_with(self.0.y, other.0.y, max_relative, epsilon)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div<f64> for Vector {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

/// Three decimal places, e.g. `Vector(2.000, 5.000)`.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector({}, {})",
            format_fixed(self.0.x, 3),
            format_fixed(self.0.y, 3)
        )
    }
}

/// Full precision, e.g. `Vector(1.4142135623730951, 2.23606797749979)`.
impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector({}, {})",
            format_float(self.0.x),
            format_float(self.0.y)
        )
    }
}
