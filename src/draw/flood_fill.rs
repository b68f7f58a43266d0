use egui::Color32;

use crate::canvas::Canvas;
use crate::geometry::Point;

/// Replaces the 4-connected region of same-colored pixels around `seed` with
/// `replacement` and returns how many pixels changed.
///
/// The target color is the seed pixel's color at call time. Filling onto the
/// same color, or from a seed outside the canvas, changes nothing. Pending
/// pixels are kept on an explicit stack; a pixel is only pushed after it has
/// been recolored, so the recolor doubles as the visited mark.
pub fn flood_fill(canvas: &mut Canvas, seed: Point, replacement: Color32) -> usize {
    let Some(target) = canvas.get_pixel(seed.x, seed.y) else {
        return 0;
    };
    if target == replacement {
        return 0;
    }

    let mut filled = 0;
    let mut stack = Vec::with_capacity(1024);
    canvas.set_pixel(seed.x, seed.y, replacement);
    filled += 1;
    stack.push(seed);

    while let Some(p) = stack.pop() {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let (x, y) = (p.x + dx, p.y + dy);
            if canvas.get_pixel(x, y) == Some(target) {
                canvas.set_pixel(x, y, replacement);
                filled += 1;
                stack.push(Point::new(x, y));
            }
        }
    }

    filled
}
