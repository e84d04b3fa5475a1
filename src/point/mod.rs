//! Points in the plane, with and without color.
//!
//! All point types compare by their distance from the origin, so `<3, 4>`
//! and `<-5, 0>` are equal.

use core::cmp::Ordering;
use core::fmt;

use alloc::string::{String, ToString};

use crate::error::PointError;

pub mod palette;
mod survey;

pub use palette::{BUILTIN_COLORS, add_color, is_known_color, palette, reset_palette};
pub use survey::{
    COORDINATE_LIMIT, EqualDistanceReport, estimate_equal_distance, random_point, sort_by_distance,
};

#[cfg(feature = "std")]
#[expect(
    clippy::suboptimal_flops,
    reason = "must round the same way as the libm build"
)]
fn hypot(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn hypot(x: f64, y: f64) -> f64 {
    libm::sqrt(x * x + y * y)
}

/// A point with `x` and `y` coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin.
    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        hypot(self.x, self.y)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        hypot(self.x - other.x, self.y - other.y)
    }
}

impl PartialEq for Point {
    #[expect(
        clippy::float_cmp,
        reason = "points are equal when they are equally far from the origin"
    )]
    fn eq(&self, other: &Self) -> bool {
        self.distance_from_origin() == other.distance_from_origin()
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance_from_origin()
            .partial_cmp(&other.distance_from_origin())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

/// A point with a free-form color name.
#[derive(Debug, Clone, Default)]
pub struct ColorPoint {
    /// Location.
    pub point: Point,
    /// Color name.
    pub color: String,
}

impl ColorPoint {
    /// Creates a new colored point.
    #[must_use]
    pub fn new(x: f64, y: f64, color: &str) -> Self {
        Self {
            point: Point::new(x, y),
            color: color.to_string(),
        }
    }
}

impl PartialEq for ColorPoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl PartialOrd for ColorPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.point.partial_cmp(&other.point)
    }
}

impl fmt::Display for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.point, self.color)
    }
}

/// Optional fields for [`AdvancedPoint::from_fields`].
///
/// Missing fields default to `x = 10`, `y = 20` and `color = "black"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointFields {
    /// The x coordinate.
    pub x: Option<f64>,
    /// The y coordinate.
    pub y: Option<f64>,
    /// The color name.
    pub color: Option<String>,
}

/// A colored point whose coordinates must be finite and whose color must be
/// in the [palette](palette::palette).
#[derive(Debug, Clone)]
pub struct AdvancedPoint {
    inner: ColorPoint,
}

impl AdvancedPoint {
    /// Default x coordinate for [`AdvancedPoint::from_fields`].
    pub const DEFAULT_X: f64 = 10.0;
    /// Default y coordinate for [`AdvancedPoint::from_fields`].
    pub const DEFAULT_Y: f64 = 20.0;
    /// Default color for [`AdvancedPoint::from_fields`].
    pub const DEFAULT_COLOR: &'static str = "black";

    /// Creates a new validated point.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::NonFiniteCoordinate`] if `x` or `y` is NaN or
    /// infinite, and [`PointError::UnknownColor`] if `color` is not in the
    /// palette.
    pub fn new(x: f64, y: f64, color: &str) -> Result<Self, PointError> {
        if !x.is_finite() {
            return Err(PointError::NonFiniteCoordinate { axis: 'x' });
        }
        if !y.is_finite() {
            return Err(PointError::NonFiniteCoordinate { axis: 'y' });
        }
        check_color(color)?;

        Ok(Self {
            inner: ColorPoint::new(x, y, color),
        })
    }

    /// Creates a point from optional fields, filling in defaults.
    ///
    /// # Errors
    ///
    /// Same as [`AdvancedPoint::new`].
    pub fn from_fields(fields: PointFields) -> Result<Self, PointError> {
        Self::new(
            fields.x.unwrap_or(Self::DEFAULT_X),
            fields.y.unwrap_or(Self::DEFAULT_Y),
            fields.color.as_deref().unwrap_or(Self::DEFAULT_COLOR),
        )
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.inner.point.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.inner.point.y
    }

    /// Returns the color name.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.inner.color
    }

    /// Returns the underlying point.
    #[must_use]
    pub const fn point(&self) -> &Point {
        &self.inner.point
    }

    /// Changes the color.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::UnknownColor`] if `color` is not in the palette.
    /// The point keeps its old color in that case.
    pub fn set_color(&mut self, color: &str) -> Result<(), PointError> {
        check_color(color)?;
        self.inner.color = color.to_string();
        Ok(())
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance_between(a: &Self, b: &Self) -> f64 {
        a.point().distance_to(b.point())
    }
}

fn check_color(color: &str) -> Result<(), PointError> {
    if is_known_color(color) {
        Ok(())
    } else {
        Err(PointError::UnknownColor(color.to_string()))
    }
}

impl PartialEq for AdvancedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialOrd for AdvancedPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl fmt::Display for AdvancedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
