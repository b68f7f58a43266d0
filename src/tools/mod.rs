use serde::{Deserialize, Serialize};

use crate::draw::ShapeKind;

mod palette;

pub use palette::{NamedColor, PALETTE, color_name};

/// The drawing tools. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    Line,
    Rectangle,
    Circle,
    Fill,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Fill,
    ];

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Fill => "Fill",
        }
    }

    /// Brush and eraser paint on press and along every drag event.
    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }

    /// The outline a shape tool commits on release; `None` for the others.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Ellipse),
            Tool::Brush | Tool::Eraser | Tool::Fill => None,
        }
    }

    pub fn is_shape(&self) -> bool {
        self.shape_kind().is_some()
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
