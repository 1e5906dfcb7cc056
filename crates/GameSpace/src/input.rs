//! # Input Protocol
//!
//! This module defines the input state that the host application must pass to the Stage every frame.
//! It carries plain samples only: the cursor, held buttons and modifiers, at most one wheel step,
//! and at most one window resize.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Vector};

/// A window size sample in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero (e.g. a minimized window).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_vector(&self) -> Vector {
        Vector::new(self.width as f64, self.height as f64)
    }
}

/// One notch of the mouse wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    /// Away from the user (+1). Zooms in.
    Up,
    /// Toward the user (-1). Zooms out.
    Down,
}

impl WheelDirection {
    /// Maps a raw wheel delta to a direction. Zero (or NaN) is no step.
    pub fn from_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(WheelDirection::Up)
        } else if delta < 0.0 {
            Some(WheelDirection::Down)
        } else {
            None
        }
    }
}

/// State of keyboard modifiers (Shift, Ctrl, Alt, Meta).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ModifiersState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// State of mouse buttons.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

/// Mouse buttons that can drag the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanButton {
    Left,
    Middle,
    Right,
}

impl MouseButtons {
    pub fn is_down(&self, button: PanButton) -> bool {
        match button {
            PanButton::Left => self.left,
            PanButton::Middle => self.middle,
            PanButton::Right => self.right,
        }
    }
}

/// A mouse button plus the modifier that must be held with it to drag the view.
///
/// A drag lasts exactly as long as the trigger that started it holds: releasing either the
/// button or a required Ctrl ends it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanTrigger {
    pub button: PanButton,
    #[serde(default)]
    pub requires_ctrl: bool,
}

impl PanTrigger {
    pub const fn new(button: PanButton) -> Self {
        Self {
            button,
            requires_ctrl: false,
        }
    }

    pub const fn with_ctrl(button: PanButton) -> Self {
        Self {
            button,
            requires_ctrl: true,
        }
    }

    /// True while the button, and Ctrl if required, are held.
    pub fn holds(&self, input: &InputState) -> bool {
        input.mouse_buttons.is_down(self.button) && (!self.requires_ctrl || input.modifiers.ctrl)
    }
}

/// The input state for a single frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputState {
    /// Current position of the mouse cursor in Screen Space (pixels).
    pub cursor: Point,
    /// Held mouse buttons. Drag begin/end are the edges of a pan trigger across frames.
    pub mouse_buttons: MouseButtons,
    /// Held keyboard modifiers.
    pub modifiers: ModifiersState,
    /// Wheel step this frame, if any.
    pub wheel: Option<WheelDirection>,
    /// New window size if the window changed size this frame.
    pub resized: Option<WindowSize>,
}
