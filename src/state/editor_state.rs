//! Gesture state of the editor.
//!
//! ```text
//!            press in canvas             release (anywhere)
//!   ┌──────┐ ─────────────────► ┌──────────┐ ───────────────► ┌──────┐
//!   │ Idle │                    │ Dragging │                  │ Idle │
//!   └──────┘ ◄───────────────── └──────────┘                  └──────┘
//!         press with Fill: fill, stay Idle
//! ```
//!
//! The start and last points only exist while a gesture is in progress, so a
//! release can never leave stale points behind.
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer held down after a press inside the canvas area
    Dragging {
        /// Where the press happened; shapes are drawn from here
        start: Point,
        /// Most recent pointer position; the next stroke segment starts here
        last: Point,
    },
}

impl EditorState {
    pub fn start_point(&self) -> Option<Point> {
        match self {
            Self::Dragging { start, .. } => Some(*start),
            Self::Idle => None,
        }
    }

    pub fn last_point(&self) -> Option<Point> {
        match self {
            Self::Dragging { last, .. } => Some(*last),
            Self::Idle => None,
        }
    }
}
