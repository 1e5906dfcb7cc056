//! # Panning
//!
//! Click-drag tracking in Screen Space. The drag vector `end - begin` is added on top of the
//! committed origin until the drag stops, at which point [`crate::view::Viewport::stop_pan`]
//! folds it into the origin.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Vector};

/// State of an in-progress (or idle) drag. All positions are pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanState {
    begin: Point,
    end: Point,
    is_active: bool,
}

impl PanState {
    /// An idle tracker with a zero drag vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a drag at `cursor`. Starting again while active restarts from `cursor` and
    /// drops the uncommitted displacement.
    pub fn start(&mut self, cursor: Point) {
        self.is_active = true;
        self.begin = cursor;
        self.end = cursor;
    }

    /// Records the live cursor. Ignored while idle.
    pub fn update(&mut self, cursor: Point) {
        if self.is_active {
            self.end = cursor;
        }
    }

    /// Ends the drag and returns the displacement that must be committed to the origin.
    /// The drag vector is zero afterwards.
    pub(crate) fn finish(&mut self) -> Vector {
        let offset = self.vector();
        self.is_active = false;
        self.begin = self.end;
        offset
    }

    /// The uncommitted drag displacement, `end - begin`.
    pub fn vector(&self) -> Vector {
        Vector::from_points(self.begin, self.end)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn begin(&self) -> Point {
        self.begin
    }

    pub fn end(&self) -> Point {
        self.end
    }
}
