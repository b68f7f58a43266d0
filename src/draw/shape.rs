use egui::Color32;

use super::line::draw_line;
use crate::canvas::Canvas;
use crate::geometry::{PixelRect, Point};

/// Outline shapes drawn between a press point and a release point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    /// An axis-aligned ellipse inscribed in the bounding box of the two
    /// points; a circle when the box is square.
    Ellipse,
}

/// A fully specified shape, ready to be rasterized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub start: Point,
    pub end: Point,
    pub width: u32,
    pub color: Color32,
}

impl Shape {
    /// Bounding box normalized from the two corners, independent of drag
    /// direction.
    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_corners(self.start, self.end)
    }
}

/// Rasterizes the outline of `shape`. Interiors are never filled.
pub fn draw_shape(canvas: &mut Canvas, shape: &Shape) {
    let Shape { width, color, .. } = *shape;
    match shape.kind {
        ShapeKind::Line => draw_line(canvas, shape.start, shape.end, width, color),
        ShapeKind::Rectangle => {
            let r = shape.bounds();
            let corners = [
                Point::new(r.x, r.y),
                Point::new(r.right(), r.y),
                Point::new(r.right(), r.bottom()),
                Point::new(r.x, r.bottom()),
            ];
            for i in 0..corners.len() {
                let next = corners[(i + 1) % corners.len()];
                draw_line(canvas, corners[i], next, width, color);
            }
        }
        ShapeKind::Ellipse => {
            let outline = ellipse_outline(shape.bounds());
            for pair in outline.windows(2) {
                draw_line(canvas, pair[0], pair[1], width, color);
            }
        }
    }
}

/// Closed polyline approximating the ellipse inscribed in `bounds`. The first
/// point is repeated at the end.
fn ellipse_outline(bounds: PixelRect) -> Vec<Point> {
    let rx = bounds.width as f64 / 2.0;
    let ry = bounds.height as f64 / 2.0;
    let cx = bounds.x as f64 + rx;
    let cy = bounds.y as f64 + ry;

    // Enough vertices that consecutive points are at most a couple of pixels apart.
    let steps = ((std::f64::consts::TAU * rx.max(ry)).ceil() as usize).max(16);
    let mut points: Vec<Point> = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = std::f64::consts::TAU * i as f64 / steps as f64;
        let p = Point::new(
            (cx + rx * t.cos()).round() as i32,
            (cy + ry * t.sin()).round() as i32,
        );
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    if points.len() == 1 {
        // Degenerate box: keep a segment so the single point still gets drawn.
        points.push(points[0]);
    }
    points
}
