use serde::{Deserialize, Serialize};

use crate::config::ViewportConfig;
use crate::geometry::{Point, Vector};
use crate::input::{InputState, PanTrigger, WheelDirection};
use crate::view::Viewport;

/// Events emitted by the Stage to the host application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// The window size was applied and the origin moved with the window center.
    Resized { window_size: Vector },
    /// The view zoomed about `cursor`.
    Zoomed { cursor: Point, world_width: f64 },
    /// A drag started at `cursor`.
    PanStarted { cursor: Point },
    /// A drag ended and `offset` pixels were folded into the origin.
    PanCommitted { offset: Vector },
    /// The view changed, so the host should repaint.
    /// Useful for power efficiency (e.g., only render when dirty).
    RepaintNeeded,
}

/// What the pointer is doing across frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Dragging the view; ends when `trigger` stops holding.
    Panning { trigger: PanTrigger },
}

/// Applies one frame of input to the viewport.
///
/// Order matters and is fixed: resize first, then zoom, then pan. Rendering reads the
/// viewport only after this returns.
///
/// # Arguments
/// * `viewport` - The viewport state, mutated by the three controllers.
/// * `config` - Zoom factors, zoom limits and the pan triggers.
/// * `mode` - The drag state carried between frames.
/// * `input` - The input state for the current frame.
/// * `events` - A buffer to push `ViewEvent`s into.
pub fn handle_interactions(
    viewport: &mut Viewport,
    config: &ViewportConfig,
    mode: &mut InteractionMode,
    input: &InputState,
    events: &mut Vec<ViewEvent>,
) {
    handle_resize(viewport, input, events);
    handle_zoom(viewport, config, input, events);
    handle_panning(viewport, config, mode, input, events);
}

fn handle_resize(viewport: &mut Viewport, input: &InputState, events: &mut Vec<ViewEvent>) {
    let Some(size) = input.resized else {
        return;
    };
    // A zero width would make the world-to-pixel scale zero and the matrix singular.
    if size.is_empty() {
        tracing::debug!(
            width = size.width,
            height = size.height,
            "Ignoring zero-area resize"
        );
        return;
    }
    let window_size = size.as_vector();
    if window_size == viewport.window_size() {
        return;
    }
    viewport.on_resize(window_size);
    events.push(ViewEvent::Resized { window_size });
    events.push(ViewEvent::RepaintNeeded);
}

fn handle_zoom(
    viewport: &mut Viewport,
    config: &ViewportConfig,
    input: &InputState,
    events: &mut Vec<ViewEvent>,
) {
    let Some(direction) = input.wheel else {
        return;
    };
    let factor = match direction {
        WheelDirection::Up => config.zoom_in_factor,
        WheelDirection::Down => config.zoom_out_factor,
    };

    let old_width = viewport.world_width();
    let new_width = (old_width * factor).clamp(config.min_world_width, config.max_world_width);
    if (new_width - old_width).abs() <= f64::EPSILON * old_width {
        tracing::trace!(?direction, world_width = old_width, "Zoom limit reached");
        return;
    }

    viewport.zoom_about_point(input.cursor, new_width / old_width);
    events.push(ViewEvent::Zoomed {
        cursor: input.cursor,
        world_width: viewport.world_width(),
    });
    events.push(ViewEvent::RepaintNeeded);
}

fn handle_panning(
    viewport: &mut Viewport,
    config: &ViewportConfig,
    mode: &mut InteractionMode,
    input: &InputState,
    events: &mut Vec<ViewEvent>,
) {
    match *mode {
        InteractionMode::Idle => {
            let Some(trigger) = config.pan_triggers.iter().find(|t| t.holds(input)) else {
                return;
            };
            viewport.start_pan(input.cursor);
            *mode = InteractionMode::Panning { trigger: *trigger };
            events.push(ViewEvent::PanStarted {
                cursor: input.cursor,
            });
        }
        InteractionMode::Panning { trigger } => {
            let previous_end = viewport.panning().end();
            viewport.update_pan(input.cursor);

            if !trigger.holds(input) {
                let offset = viewport.stop_pan();
                *mode = InteractionMode::Idle;
                events.push(ViewEvent::PanCommitted { offset });
                events.push(ViewEvent::RepaintNeeded);
            } else if previous_end != input.cursor {
                events.push(ViewEvent::RepaintNeeded);
            }
        }
    }
}
