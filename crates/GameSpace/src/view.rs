//! # Viewport System
//!
//! Transforms between **World Space** (GCS, y points up) and **Screen Space** (PCS, pixels,
//! y points down), and the three operations that move one relative to the other: zooming
//! about a point, click-drag panning and window resizing.
//!
//! Nothing derived is cached. Scales and matrices are recomputed from the current state on
//! every call.

use serde::{Deserialize, Serialize};

use crate::config::ViewportConfig;
use crate::geometry::{Point, Vector};
use crate::matrix::AffineMatrix;
use crate::panning::PanState;

/// The viewport state: window size, zoom level and origin placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Window size in pixels.
    window_size: Vector,
    /// World units visible across the full window width. Always > 0.
    world_width: f64,
    /// Pixel location of world `(0, 0)`, excluding any uncommitted pan.
    pixel_origin: Point,
    /// The drag in progress, if any.
    panning: PanState,
}

impl Viewport {
    /// Creates a viewport with the world origin at the window center.
    ///
    /// # Panics
    /// If `world_width` is not finite and strictly positive.
    pub fn new(window_size: Vector, world_width: f64) -> Self {
        assert!(
            world_width.is_finite() && world_width > 0.0,
            "world_width must be finite and > 0, got {world_width}"
        );
        let mut viewport = Self {
            window_size,
            world_width,
            pixel_origin: Point::ORIGIN,
            panning: PanState::new(),
        };
        viewport.pixel_origin = viewport.window_center();
        viewport
    }

    pub fn from_config(config: &ViewportConfig) -> Self {
        Self::new(config.window_size.as_vector(), config.world_width)
    }

    /// Places world `(0, 0)` at `pixel_origin` instead of the window center.
    pub fn with_pixel_origin(mut self, pixel_origin: Point) -> Self {
        self.pixel_origin = pixel_origin;
        self
    }

    pub fn window_size(&self) -> Vector {
        self.window_size
    }

    pub fn world_width(&self) -> f64 {
        self.world_width
    }

    pub fn pixel_origin(&self) -> Point {
        self.pixel_origin
    }

    pub fn panning(&self) -> &PanState {
        &self.panning
    }

    /// Center of the window in pixels.
    pub fn window_center(&self) -> Point {
        Point::new(self.window_size.x / 2.0, self.window_size.y / 2.0)
    }

    /// Pixels per world unit at the current zoom level.
    pub fn world_to_pixel_scale(&self) -> f64 {
        self.window_size.x / self.world_width
    }

    /// World units per pixel.
    pub fn pixel_to_world_scale(&self) -> f64 {
        1.0 / self.world_to_pixel_scale()
    }

    /// Vector from the window's top-left corner to world `(0, 0)`, live pan included.
    pub fn translation(&self) -> Vector {
        self.pixel_origin.as_vector() + self.panning.vector()
    }

    /// World Space to Screen Space.
    ///
    /// ```text
    /// |k   0  Tx|
    /// |0  -k  Ty|     k = world_to_pixel_scale(), (Tx, Ty) = translation()
    /// |0   0   1|
    /// ```
    ///
    /// The `-k` flips y: world up is pixel up-the-screen.
    pub fn world_to_pixel_matrix(&self) -> AffineMatrix {
        let k = self.world_to_pixel_scale();
        AffineMatrix::new(k, 0.0, 0.0, -k, self.translation())
    }

    /// Screen Space to World Space.
    pub fn pixel_to_world_matrix(&self) -> AffineMatrix {
        self.world_to_pixel_matrix().inverse()
    }

    pub fn world_to_pixel(&self, world: Point) -> Point {
        self.world_to_pixel_matrix().apply_to_point(world)
    }

    pub fn pixel_to_world(&self, pixel: Point) -> Point {
        self.pixel_to_world_matrix().apply_to_point(pixel)
    }

    /// Zooms so that the world point under `cursor` stays under `cursor`.
    ///
    /// `scale_factor > 1` widens the visible world (zoom out), `< 1` narrows it (zoom in).
    ///
    /// # Panics
    /// If `scale_factor` is not finite and strictly positive.
    pub fn zoom_about_point(&mut self, cursor: Point, scale_factor: f64) {
        assert!(
            scale_factor.is_finite() && scale_factor > 0.0,
            "zoom scale_factor must be finite and > 0, got {scale_factor}"
        );
        let before = self.pixel_to_world(cursor);
        self.world_width *= scale_factor;
        let after = self.pixel_to_world(cursor);

        // World-space drift of the point under the cursor, in pixels at the new scale.
        // The y sign is opposite to x because the world-to-pixel matrix flips y.
        let offset = (before - after) * self.world_to_pixel_scale();
        self.pixel_origin.x -= offset.x;
        self.pixel_origin.y += offset.y;

        tracing::debug!(
            scale_factor,
            world_width = self.world_width,
            origin_x = self.pixel_origin.x,
            origin_y = self.pixel_origin.y,
            "Zoomed about cursor"
        );
    }

    /// Applies a new window size, keeping the world point at the window center at the center.
    ///
    /// The origin's offset from the center is rescaled with the world-to-pixel scale, so a
    /// width change keeps working after the origin has been panned away from the center. With
    /// the origin at the center this is a plain shift by `new_center - old_center`.
    pub fn on_resize(&mut self, new_window_size: Vector) {
        let old_center = self.window_center();
        let old_scale = self.world_to_pixel_scale();
        self.window_size = new_window_size;
        let new_center = self.window_center();
        let ratio = self.world_to_pixel_scale() / old_scale;

        // The live drag stays a fixed pixel offset, so rescale around the full translation.
        let pan = self.panning.vector();
        let offset = (self.translation() - old_center.as_vector()) * ratio;
        self.pixel_origin = new_center.translate(offset - pan);

        tracing::debug!(
            width = new_window_size.x,
            height = new_window_size.y,
            origin_x = self.pixel_origin.x,
            origin_y = self.pixel_origin.y,
            "Window resized"
        );
    }

    /// Begins (or restarts) a drag at `cursor`.
    pub fn start_pan(&mut self, cursor: Point) {
        self.panning.start(cursor);
        tracing::debug!(x = cursor.x, y = cursor.y, "Pan started");
    }

    /// Records the live cursor of an active drag.
    pub fn update_pan(&mut self, cursor: Point) {
        self.panning.update(cursor);
    }

    /// Commits the drag into the origin and returns the committed pixel offset.
    ///
    /// The world-to-pixel matrix is the same immediately before and after this call.
    pub fn stop_pan(&mut self) -> Vector {
        let offset = self.panning.finish();
        self.pixel_origin = self.pixel_origin.translate(offset);
        tracing::debug!(dx = offset.x, dy = offset.y, "Pan committed");
        offset
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&ViewportConfig::default())
    }
}
