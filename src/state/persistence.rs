use serde::{Deserialize, Serialize};

use crate::tools::{PALETTE, Tool};

pub const DEFAULT_BRUSH_SIZE: u32 = 4;
pub const DEFAULT_ERASER_SIZE: u32 = 20;
/// Widest brush or eraser the editor accepts.
pub const MAX_STROKE_WIDTH: u32 = 500;

/// Tool choices restored across restarts through eframe's app storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ToolPreferences {
    pub tool: Tool,
    /// Index into the palette; the current color is always a palette color.
    pub color_index: usize,
    pub brush_size: u32,
    pub eraser_size: u32,
}

impl Default for ToolPreferences {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color_index: 0,
            brush_size: DEFAULT_BRUSH_SIZE,
            eraser_size: DEFAULT_ERASER_SIZE,
        }
    }
}

impl ToolPreferences {
    /// Replaces out-of-range values from stale or hand-edited storage with
    /// defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            tool: self.tool,
            color_index: if self.color_index < PALETTE.len() {
                self.color_index
            } else {
                defaults.color_index
            },
            brush_size: if (1..=MAX_STROKE_WIDTH).contains(&self.brush_size) {
                self.brush_size
            } else {
                defaults.brush_size
            },
            eraser_size: if (1..=MAX_STROKE_WIDTH).contains(&self.eraser_size) {
                self.eraser_size
            } else {
                defaults.eraser_size
            },
        }
    }
}
