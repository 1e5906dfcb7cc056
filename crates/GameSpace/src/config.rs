//! # Configuration
//!
//! This module defines the configuration struct for the Stage.
//! Presentation settings live in [`RenderStyle`] and only ever reach the Painter; the transform
//! core reads nothing but the viewport and zoom settings.

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::{PanButton, PanTrigger, WindowSize};

/// Configuration parameters for the Stage.
///
/// Every field has a default, so a JSON document only needs the fields it changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Initial window size in pixels. Default: 960x540.
    pub window_size: WindowSize,
    /// Initial visible world width. Default: 2.0 (world -1..1 fills the width).
    pub world_width: f64,
    /// World width multiplier for one wheel step up. Default: 0.9.
    pub zoom_in_factor: f64,
    /// World width multiplier for one wheel step down. Default: 1.1.
    pub zoom_out_factor: f64,
    /// Smallest visible world width zooming may reach.
    pub min_world_width: f64,
    /// Largest visible world width zooming may reach.
    pub max_world_width: f64,
    /// Bindings that drag the view; the first one held starts the drag.
    /// Default: middle button, or Ctrl + left button.
    pub pan_triggers: Vec<PanTrigger>,
    /// Visual styling handed to the Painter.
    pub style: RenderStyle,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            window_size: WindowSize::new(60 * 16, 60 * 9),
            world_width: 2.0,
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
            min_world_width: 1e-3,
            max_world_width: 1e6,
            pan_triggers: vec![
                PanTrigger::new(PanButton::Middle),
                PanTrigger::with_ctrl(PanButton::Left),
            ],
            style: RenderStyle::default(),
        }
    }
}

impl ViewportConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ViewportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every numeric constraint the viewport relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world_width.is_finite() && self.world_width > 0.0) {
            return Err(ConfigError::WorldWidth(self.world_width));
        }
        let (min, max) = (self.min_world_width, self.max_world_width);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::ZoomLimits { min, max });
        }
        if self.world_width < min || self.world_width > max {
            return Err(ConfigError::WorldWidthOutOfRange {
                world_width: self.world_width,
                min,
                max,
            });
        }
        if !(self.zoom_in_factor > 0.0 && self.zoom_in_factor < 1.0) {
            return Err(ConfigError::ZoomInFactor(self.zoom_in_factor));
        }
        if !(self.zoom_out_factor.is_finite() && self.zoom_out_factor > 1.0) {
            return Err(ConfigError::ZoomOutFactor(self.zoom_out_factor));
        }
        if self.window_size.is_empty() {
            return Err(ConfigError::WindowSize {
                width: self.window_size.width,
                height: self.window_size.height,
            });
        }
        Ok(())
    }
}

/// Colors and sizes used when painting a frame.
///
/// Colors are RGBA in `0.0..=1.0`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background: Vec4,
    /// Scene line art.
    pub line: Vec4,
    /// Debug line art overlay.
    pub line_debug: Vec4,
    /// HUD text.
    pub text: Vec4,
    /// Drag indicator drawn while panning.
    pub panning: Vec4,
    /// Line thickness in pixels.
    pub line_width: f32,
    /// HUD font size in pixels.
    pub hud_font_size: f32,
}

const fn rgb(r: u8, g: u8, b: u8) -> Vec4 {
    Vec4::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: rgb(30, 60, 90),
            line: rgb(120, 90, 30),
            line_debug: rgb(200, 50, 50),
            text: rgb(255, 255, 255),
            panning: rgb(255, 200, 200),
            line_width: 1.0,
            hud_font_size: 16.0,
        }
    }
}
