//! Raster drawing on a [`Canvas`](crate::canvas::Canvas): thick line segments,
//! shape outlines and flood fill.

mod flood_fill;
mod line;
mod shape;

pub use flood_fill::flood_fill;
pub use line::{draw_line, stamp_disc};
pub use shape::{Shape, ShapeKind, draw_shape};
