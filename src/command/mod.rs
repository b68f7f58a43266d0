mod history;

use egui::Color32;
use image::RgbaImage;

use crate::canvas::Canvas;
use crate::draw::{self, Shape};
use crate::geometry::Point;

pub use history::{Snapshot, UndoHistory};

/// A mutation of the canvas.
///
/// Callers push a snapshot onto the [`UndoHistory`] before executing any
/// command that starts a new undoable operation. Stroke segments after the
/// first belong to the operation started on press and are executed without
/// another snapshot.
#[derive(Debug, Clone)]
pub enum Command {
    /// One piece of a freehand stroke.
    Segment {
        from: Point,
        to: Point,
        width: u32,
        color: Color32,
    },
    /// A shape outline committed on release.
    DrawShape(Shape),
    /// Flood fill from the seed point.
    Fill { seed: Point, color: Color32 },
    /// Reset every pixel to the background color.
    Clear,
    /// Composite a decoded image at the origin.
    DrawImage(RgbaImage),
}

impl Command {
    pub fn execute(&self, canvas: &mut Canvas) {
        match self {
            Command::Segment {
                from,
                to,
                width,
                color,
            } => draw::draw_line(canvas, *from, *to, *width, *color),
            Command::DrawShape(shape) => draw::draw_shape(canvas, shape),
            Command::Fill { seed, color } => {
                let filled = draw::flood_fill(canvas, *seed, *color);
                log::debug!("Flood fill at {:?} changed {} pixels", seed, filled);
            }
            Command::Clear => canvas.clear(),
            Command::DrawImage(image) => canvas.draw_image(image),
        }
    }

    /// Short label for logs and the status line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Segment { .. } => "Stroke",
            Command::DrawShape(_) => "Shape",
            Command::Fill { .. } => "Fill",
            Command::Clear => "Clear",
            Command::DrawImage(_) => "Open Image",
        }
    }
}
