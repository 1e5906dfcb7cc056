//! # Geometry Types
//!
//! Points and vectors shared by both coordinate systems.
//!
//! A `Point` is a location and only makes sense inside the coordinate system it was
//! measured in. A `Vector` is a free displacement. Subtracting two points gives a vector;
//! points are never added together.

use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A location in either World Space (GCS) or Screen Space (PCS).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A free displacement in either coordinate system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// A 2D vector lifted into homogeneous coordinates.
///
/// Lifting a [`Vector`] always produces `x3 == 1`, which is what lets a 3x3 matrix carry a
/// translation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomogeneousVector {
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Treats this point as a vector from `(0, 0)`.
    pub fn as_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Moves the point by `offset` in its own coordinate system.
    pub fn translate(self, offset: Vector) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }

    /// Single precision copy for host renderers.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Formats as `(x, y)` with `precision` digits after the decimal point.
    pub fn format_with(&self, precision: usize) -> String {
        format!("({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The displacement from `start` to `end`.
    pub fn from_points(start: Point, end: Point) -> Self {
        Vector::new(end.x - start.x, end.y - start.y)
    }

    /// Treats this vector as a point relative to `(0, 0)`.
    pub fn as_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    pub fn format_with(&self, precision: usize) -> String {
        format!("({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}

impl HomogeneousVector {
    pub const fn new(x1: f64, x2: f64, x3: f64) -> Self {
        Self { x1, x2, x3 }
    }

    /// Drops the third component.
    ///
    /// # Panics
    /// If `x3` is not exactly `1`: the vector came out of a malformed matrix.
    pub fn to_vector(self) -> Vector {
        assert!(
            self.x3 == 1.0,
            "homogeneous component must be 1 after an affine transform, got {}",
            self.x3
        );
        Vector::new(self.x1, self.x2)
    }
}

impl From<Vector> for HomogeneousVector {
    fn from(v: Vector) -> Self {
        HomogeneousVector::new(v.x, v.y, 1.0)
    }
}

impl From<Point> for HomogeneousVector {
    fn from(p: Point) -> Self {
        HomogeneousVector::new(p.x, p.y, 1.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(f32, f32)> for Point {
    /// Host event positions arrive as single precision tuples.
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x as f64, y as f64)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Sub for Point {
    type Output = Vector;

    /// Subtracting two points gives the vector from `other` to `self`.
    fn sub(self, other: Point) -> Vector {
        Vector::from_points(other, self)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Vector) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, k: f64) -> Vector {
        Vector::new(self.x / k, self.y / k)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
