//! # Debug HUD
//!
//! Text shown in the top-left corner of the window. Lines are rebuilt every frame;
//! snapshots stick until cleared and are always listed after the lines.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DebugHud {
    lines: Vec<String>,
    snapshots: Vec<String>,
    pub is_visible: bool,
}

impl Default for DebugHud {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            snapshots: Vec::new(),
            is_visible: true,
        }
    }
}

impl DebugHud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line for this frame only.
    pub fn print(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends a line that survives [`Self::reset`].
    pub fn snapshot(&mut self, line: impl Into<String>) {
        self.snapshots.push(line.into());
    }

    /// Clears the per-frame lines.
    pub fn reset(&mut self) {
        self.lines.clear();
    }

    pub fn reset_snapshots(&mut self) {
        self.snapshots.clear();
    }

    pub fn toggle(&mut self) {
        self.is_visible = !self.is_visible;
    }

    /// Per-frame lines followed by snapshots.
    pub fn text(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .chain(self.snapshots.iter())
            .map(String::as_str)
    }
}
