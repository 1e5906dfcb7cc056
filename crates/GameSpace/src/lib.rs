//! # GameSpace
//!
//! `game_space` is a headless 2D viewport library. It keeps a World Space (GCS, the game's
//! coordinate system) independent of Screen Space (PCS, window pixels) and keeps the transforms
//! between them exact while the user zooms, pans and resizes the window.
//!
//! ## Core Architecture
//! - **Geometry (`src/geometry.rs`)**: Points, vectors and homogeneous vectors.
//! - **Matrix (`src/matrix.rs`)**: The augmented 2x2 affine matrix and its closed-form inverse.
//! - **View (`src/view.rs`)**: Viewport state and the zoom / pan / resize controllers.
//! - **Interaction (`src/interaction.rs`)**: Routes one frame of input to the controllers.
//! - **Render (`src/render.rs`)**: Outputs a list of `DrawCommand`s for the host to render.

pub mod config;
pub mod error;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod interaction;
pub mod matrix;
pub mod painter;
pub mod panning;
pub mod render;
pub mod scene;
pub mod view;

use hud::DebugHud;
use input::InputState;
use painter::Painter;
use render::RenderList;
use scene::Scene;

// Re-exports for convenience
pub use config::{RenderStyle, ViewportConfig};
pub use error::{ConfigError, TransformError};
pub use geometry::{HomogeneousVector, Point, Vector};
pub use interaction::{InteractionMode, ViewEvent};
pub use matrix::AffineMatrix;
pub use view::Viewport;

/// The main entry point for the library.
///
/// The `Stage` owns the viewport and the configuration. Create it once and call
/// [`Stage::update`] every frame.
pub struct Stage {
    /// Configuration settings.
    pub config: ViewportConfig,
    /// The viewport handling coordinate transforms.
    pub viewport: Viewport,
    /// Current drag state.
    pub interaction_mode: InteractionMode,
}

impl Stage {
    /// Validates `config` and places the world origin at the window center.
    pub fn new(config: ViewportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let viewport = Viewport::from_config(&config);
        tracing::info!(
            width = config.window_size.width,
            height = config.window_size.height,
            world_width = config.world_width,
            "Stage created"
        );
        Ok(Self {
            config,
            viewport,
            interaction_mode: InteractionMode::Idle,
        })
    }

    /// The core update loop.
    ///
    /// Applies this frame's input (resize, zoom, pan), then paints `scene` and `hud` through
    /// the resulting world-to-pixel matrix.
    pub fn update(
        &mut self,
        input: &InputState,
        scene: &Scene,
        hud: &DebugHud,
    ) -> (RenderList, Vec<ViewEvent>) {
        let mut events = Vec::new();

        interaction::handle_interactions(
            &mut self.viewport,
            &self.config,
            &mut self.interaction_mode,
            input,
            &mut events,
        );

        let draw_list = Painter::draw_frame(&self.viewport, &self.config.style, scene, hud);

        (draw_list, events)
    }

    /// Prints the viewport state into the HUD.
    pub fn describe(&self, hud: &mut DebugHud, cursor: Point) {
        let viewport = &self.viewport;
        let cursor_world = viewport.pixel_to_world(cursor);
        let corner_world = viewport.pixel_to_world(viewport.window_size().as_point());

        hud.print("+- OS window (PCS)");
        hud.print(format!(
            "|  +- window_size: {} PCS, bottom-right {} GCS",
            viewport.window_size().format_with(0),
            corner_world
        ));
        hud.print(format!(
            "|  +- window_center: {}",
            viewport.window_center().format_with(1)
        ));
        hud.print("+- coordinate system");
        hud.print(format!("|  +- world_width: {:.4}", viewport.world_width()));
        hud.print(format!(
            "|  +- scale: {:.3} px/unit, {:.5} unit/px",
            viewport.world_to_pixel_scale(),
            viewport.pixel_to_world_scale()
        ));
        hud.print(format!("|  +- pixel_origin: {}", viewport.pixel_origin()));
        hud.print(format!(
            "|  +- panning: {} {}",
            viewport.panning().vector(),
            if viewport.panning().is_active() {
                "(active)"
            } else {
                ""
            }
        ));
        hud.print(format!(
            "+- cursor: {} PCS, {} GCS",
            cursor.format_with(0),
            cursor_world.format_with(3)
        ));
    }
}
