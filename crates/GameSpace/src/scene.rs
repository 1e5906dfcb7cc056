//! # Scene
//!
//! World-space line art handed to the Painter every frame.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

use crate::geometry::{Point, Vector};

/// A line segment in World Space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line2D {
    pub start: Point,
    pub end: Point,
}

impl Line2D {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn vector(&self) -> Vector {
        self.end - self.start
    }

    pub fn is_finite(&self) -> bool {
        [self.start.x, self.start.y, self.end.x, self.end.y]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// A plus sign (or an X when `rotate45`) centered on `origin`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cross {
    pub origin: Point,
    /// Length of each arm, tip to tip.
    pub size: f64,
    pub rotate45: bool,
}

impl Cross {
    pub fn new(origin: Point, size: f64) -> Self {
        Self {
            origin,
            size,
            rotate45: false,
        }
    }

    pub fn rotated(mut self) -> Self {
        self.rotate45 = true;
        self
    }

    /// The two arms as line segments.
    pub fn lines(&self) -> [Line2D; 2] {
        let half = self.size / 2.0;
        let (u, v) = if self.rotate45 {
            let d = half * FRAC_1_SQRT_2;
            (Vector::new(d, d), Vector::new(d, -d))
        } else {
            (Vector::new(half, 0.0), Vector::new(0.0, half))
        };
        let o = self.origin;
        [
            Line2D::new(o.translate(-u), o.translate(u)),
            Line2D::new(o.translate(-v), o.translate(v)),
        ]
    }
}

/// Everything drawn in World Space for one frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
    pub art: Vec<Line2D>,
    /// Overlay drawn in the debug color when `show_debug_art` is set.
    pub debug_art: Vec<Line2D>,
    pub show_debug_art: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            art: Vec::new(),
            debug_art: Vec::new(),
            show_debug_art: true,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both layers. The debug toggle is kept.
    pub fn reset(&mut self) {
        self.art.clear();
        self.debug_art.clear();
    }

    pub fn add_cross(&mut self, cross: Cross) {
        self.art.extend(cross.lines());
    }

    pub fn add_debug_cross(&mut self, cross: Cross) {
        self.debug_art.extend(cross.lines());
    }
}
