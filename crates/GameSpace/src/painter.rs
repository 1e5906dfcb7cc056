use glam::Vec2;

use crate::config::RenderStyle;
use crate::hud::DebugHud;
use crate::matrix::AffineMatrix;
use crate::render::{DrawCommand, RenderList};
use crate::scene::{Line2D, Scene};
use crate::view::Viewport;

/// Converts a World Space scene into a Screen Space display list.
///
/// Draw order (painter's algorithm):
/// - Background clear
/// - Scene art
/// - Debug art overlay (if enabled)
/// - Drag indicator (while panning)
/// - HUD text (if visible)
pub struct Painter;

impl Painter {
    /// Generates the draw commands for one frame.
    ///
    /// # Arguments
    /// * `viewport` - Read only. The world-to-pixel matrix is taken once, up front.
    /// * `style` - Colors and sizes.
    /// * `scene` - World Space line art.
    /// * `hud` - Debug text overlay.
    pub fn draw_frame(
        viewport: &Viewport,
        style: &RenderStyle,
        scene: &Scene,
        hud: &DebugHud,
    ) -> RenderList {
        let mut draw_list = vec![DrawCommand::Clear {
            color: style.background,
        }];

        let xfm = viewport.world_to_pixel_matrix();

        Self::draw_lines(&xfm, &scene.art, style, style.line, &mut draw_list);
        if scene.show_debug_art {
            Self::draw_lines(&xfm, &scene.debug_art, style, style.line_debug, &mut draw_list);
        }

        let panning = viewport.panning();
        if panning.is_active() {
            draw_list.push(DrawCommand::Line {
                start: panning.begin().to_vec2(),
                end: panning.end().to_vec2(),
                color: style.panning,
                width: style.line_width,
            });
        }

        if hud.is_visible {
            Self::draw_hud(hud, style, &mut draw_list);
        }

        draw_list
    }

    fn draw_lines(
        xfm: &AffineMatrix,
        lines: &[Line2D],
        style: &RenderStyle,
        color: glam::Vec4,
        draw_list: &mut RenderList,
    ) {
        for line in lines {
            if !line.is_finite() {
                tracing::warn!(?line, "Skipping line with a non-finite endpoint");
                continue;
            }
            draw_list.push(DrawCommand::Line {
                start: xfm.apply_to_point(line.start).to_vec2(),
                end: xfm.apply_to_point(line.end).to_vec2(),
                color,
                width: style.line_width,
            });
        }
    }

    fn draw_hud(hud: &DebugHud, style: &RenderStyle, draw_list: &mut RenderList) {
        // One line per font size; the host decides baseline placement.
        let line_height = style.hud_font_size;
        for (i, text) in hud.text().enumerate() {
            draw_list.push(DrawCommand::Text {
                pos: Vec2::new(0.0, line_height * i as f32),
                text: text.to_string(),
                color: style.text,
                size: style.hud_font_size,
            });
        }
    }
}
