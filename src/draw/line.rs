use egui::Color32;

use crate::canvas::Canvas;
use crate::geometry::Point;

/// Paints a filled disc of diameter `width` centered on `center`.
///
/// A pixel offset `(dx, dy)` is covered when `4 * (dx² + dy²) <= width²`, so
/// width 1 is a single pixel and width 4 reaches two pixels out along the
/// axes.
pub fn stamp_disc(canvas: &mut Canvas, center: Point, width: u32, color: Color32) {
    let width = i64::from(width.max(1));
    let reach = width / 2;
    let limit = i128::from(width) * i128::from(width);

    // Only the part of the disc's bounding square that lies on the canvas.
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let x_range = (cx - reach).max(0)..=(cx + reach).min(canvas.width() as i64 - 1);
    let y_range = (cy - reach).max(0)..=(cy + reach).min(canvas.height() as i64 - 1);

    for y in y_range {
        let dy = i128::from(y - cy);
        for x in x_range.clone() {
            let dx = i128::from(x - cx);
            if 4 * (dx * dx + dy * dy) <= limit {
                canvas.set_pixel(x as i32, y as i32, color);
            }
        }
    }
}

/// Draws a segment from `from` to `to` (both ends inclusive) with the given
/// stroke width. Pixels outside the canvas are clipped.
pub fn draw_line(canvas: &mut Canvas, from: Point, to: Point, width: u32, color: Color32) {
    let (mut x, mut y) = (from.x, from.y);
    let dx = (to.x - from.x).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let dy = -(to.y - from.y).abs();
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if width <= 1 {
            canvas.set_pixel(x, y, color);
        } else {
            stamp_disc(canvas, Point::new(x, y), width, color);
        }
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
