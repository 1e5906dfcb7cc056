//! # Rendering System
//!
//! The Stage never draws. It outputs a display list of `DrawCommand`s and the host
//! application (macroquad, egui, wgpu...) turns them into pixels.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A single drawing primitive.
///
/// Coordinates are in **Screen Space** (Pixels).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole window.
    Clear {
        /// Background color (RGBA, 0.0 - 1.0).
        color: Vec4,
    },
    /// A straight line segment.
    Line {
        /// Start point in screen pixels.
        start: Vec2,
        /// End point in screen pixels.
        end: Vec2,
        /// Line color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
    /// Text to be rendered.
    Text {
        /// Top-left position in screen pixels.
        pos: Vec2,
        /// Font and layout are up to the host.
        text: String,
        /// Text color.
        color: Vec4,
        /// Font size in pixels (approximate).
        size: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
