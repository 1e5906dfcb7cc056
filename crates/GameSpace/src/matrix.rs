//! # Transform Matrices
//!
//! All matrices are set up for **column vectors**: a vector is multiplied on the right.
//!
//! ```text
//! |a  c  Tx|   |x|   |a*x + c*y + Tx|
//! |b  d  Ty| * |y| = |b*x + d*y + Ty|
//! |0  0   1|   |1|   |      1       |
//! ```
//!
//! The columns of the linear part are the images of the basis vectors: `(a, b)` for x-hat
//! and `(c, d)` for y-hat. In field names that is `m11 = a`, `m21 = b`, `m12 = c`, `m22 = d`.

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use crate::error::TransformError;
use crate::geometry::{HomogeneousVector, Point, Vector};

/// A plain 2x2 matrix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2 {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
}

impl Matrix2 {
    pub const IDENTITY: Matrix2 = Matrix2::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(m11: f64, m12: f64, m21: f64, m22: f64) -> Self {
        Self { m11, m12, m21, m22 }
    }

    /// Signed area of the parallelogram spanned by the two column vectors: `a*d - b*c`.
    pub fn determinant(&self) -> f64 {
        self.m11 * self.m22 - self.m21 * self.m12
    }

    /// Transpose of the cofactor matrix.
    ///
    /// ```text
    /// |a  c|          | d  -c|
    /// |b  d|  ->  adj |-b   a|
    /// ```
    pub fn adjugate(&self) -> Matrix2 {
        Matrix2::new(self.m22, -self.m12, -self.m21, self.m11)
    }

    /// `adj(M) / det(M)`.
    pub fn try_inverse(&self) -> Result<Matrix2, TransformError> {
        let determinant = self.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(TransformError::Singular { determinant });
        }
        let s = 1.0 / determinant;
        let adj = self.adjugate();
        Ok(Matrix2::new(s * adj.m11, s * adj.m12, s * adj.m21, s * adj.m22))
    }

    pub fn mul_vec(&self, v: Vector) -> Vector {
        Vector::new(
            self.m11 * v.x + self.m12 * v.y,
            self.m21 * v.x + self.m22 * v.y,
        )
    }
}

/// A 2D affine transform: a 2x2 linear part augmented with a translation.
///
/// Logically the 3x3 `[[m11, m12, Tx], [m21, m22, Ty], [0, 0, 1]]`. The bottom row is not
/// stored, so it cannot drift away from `(0, 0, 1)`; general matrices enter through
/// [`TryFrom<Matrix3>`], which rejects anything else.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineMatrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub translation: Vector,
}

impl AffineMatrix {
    pub const fn new(m11: f64, m12: f64, m21: f64, m22: f64, translation: Vector) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            translation,
        }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, Vector::ZERO)
    }

    pub fn linear(&self) -> Matrix2 {
        Matrix2::new(self.m11, self.m12, self.m21, self.m22)
    }

    pub fn to_matrix3(&self) -> Matrix3 {
        Matrix3::new([
            [self.m11, self.m12, self.translation.x],
            [self.m21, self.m22, self.translation.y],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Transforms `v` into the target coordinate system.
    ///
    /// # Panics
    /// If `v` is not finite, or the product's homogeneous component is not `1`.
    pub fn apply_to(&self, v: Vector) -> Vector {
        // 0 * inf in the bottom row would otherwise surface as a bad homogeneous component.
        assert!(
            v.x.is_finite() && v.y.is_finite(),
            "cannot transform a non-finite vector ({}, {})",
            v.x,
            v.y
        );
        let h = self.to_matrix3().mul_vec(HomogeneousVector::from(v));
        h.to_vector()
    }

    /// Same as [`Self::apply_to`] for a location.
    pub fn apply_to_point(&self, p: Point) -> Point {
        self.apply_to(p.as_vector()).as_point()
    }

    /// Depends on the linear part only: translation does not scale area.
    pub fn determinant(&self) -> f64 {
        self.linear().determinant()
    }

    /// Adjugate of the augmented 3x3.
    ///
    /// ```text
    /// | d  -c  -d*Tx + c*Ty|
    /// |-b   a   b*Tx - a*Ty|
    /// | 0   0   a*d - b*c  |
    /// ```
    ///
    /// The bottom-right entry is the determinant, so the result is generally not affine.
    pub fn adjugate(&self) -> Matrix3 {
        let (a, b, c, d) = (self.m11, self.m21, self.m12, self.m22);
        let t = self.translation;
        Matrix3::new([
            [d, -c, -d * t.x + c * t.y],
            [-b, a, b * t.x - a * t.y],
            [0.0, 0.0, a * d - b * c],
        ])
    }

    /// Closed-form inverse, `adj(M) / det(M)` with the bottom row pinned to `(0, 0, 1)`.
    ///
    /// # Panics
    /// If the determinant is zero or not finite. Callers must never build a matrix with a
    /// zero linear scale; use [`Self::try_inverse`] for untrusted input.
    pub fn inverse(&self) -> AffineMatrix {
        match self.try_inverse() {
            Ok(inverse) => inverse,
            Err(err) => panic!("AffineMatrix::inverse precondition violated: {err}"),
        }
    }

    pub fn try_inverse(&self) -> Result<AffineMatrix, TransformError> {
        let (a, b, c, d) = (self.m11, self.m21, self.m12, self.m22);
        let determinant = a * d - b * c;
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(TransformError::Singular { determinant });
        }
        let s = 1.0 / determinant;
        let t = self.translation;
        // Scaling the adjugate's m33 by s would only reintroduce rounding error; it is 1.
        Ok(AffineMatrix::new(
            s * d,
            -s * c,
            -s * b,
            s * a,
            Vector::new(s * (-d * t.x + c * t.y), s * (b * t.x - a * t.y)),
        ))
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<Matrix3> for AffineMatrix {
    type Error = TransformError;

    fn try_from(m: Matrix3) -> Result<Self, Self::Error> {
        if !m.is_affine() {
            let [m31, m32, m33] = m.m[2];
            return Err(TransformError::NotAffine { m31, m32, m33 });
        }
        Ok(AffineMatrix::new(
            m.m[0][0],
            m.m[0][1],
            m.m[1][0],
            m.m[1][1],
            Vector::new(m.m[0][2], m.m[1][2]),
        ))
    }
}

impl From<AffineMatrix> for DMat3 {
    fn from(m: AffineMatrix) -> Self {
        DMat3::from_cols(
            DVec3::new(m.m11, m.m21, 0.0),
            DVec3::new(m.m12, m.m22, 0.0),
            DVec3::new(m.translation.x, m.translation.y, 1.0),
        )
    }
}

impl fmt::Display for AffineMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_matrix3(), f)
    }
}

/// A general row-major 3x3 matrix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3 {
    pub const IDENTITY: Matrix3 = Matrix3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// True if the bottom row is exactly `(0, 0, 1)`.
    pub fn is_affine(&self) -> bool {
        self.m[2] == [0.0, 0.0, 1.0]
    }

    pub fn transpose(&self) -> Matrix3 {
        let m = &self.m;
        Matrix3::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Matrix of signed minors.
    pub fn cofactor(&self) -> Matrix3 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;
        Matrix3::new([
            [e * i - f * h, -(d * i - f * g), d * h - e * g],
            [-(b * i - c * h), a * i - c * g, -(a * h - b * g)],
            [b * f - c * e, -(a * f - c * d), a * e - b * d],
        ])
    }

    pub fn adjugate(&self) -> Matrix3 {
        self.cofactor().transpose()
    }

    pub fn try_inverse(&self) -> Result<Matrix3, TransformError> {
        let determinant = self.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(TransformError::Singular { determinant });
        }
        let s = 1.0 / determinant;
        let mut out = self.adjugate();
        for row in &mut out.m {
            for value in row.iter_mut() {
                *value *= s;
            }
        }
        Ok(out)
    }

    pub fn mul_vec(&self, v: HomogeneousVector) -> HomogeneousVector {
        let row = |r: [f64; 3]| r[0] * v.x1 + r[1] * v.x2 + r[2] * v.x3;
        HomogeneousVector::new(row(self.m[0]), row(self.m[1]), row(self.m[2]))
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        let mut out = [[0.0; 3]; 3];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, value) in out_row.iter_mut().enumerate() {
                *value = (0..3).map(|k| self.m[r][k] * rhs.m[k][c]).sum();
            }
        }
        Matrix3::new(out)
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, [a, b, c]) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|{a:>10} {b:>10}  {c:>10}|")?;
        }
        Ok(())
    }
}
