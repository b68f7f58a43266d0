/// A position on the canvas in whole pixels.
///
/// Coordinates are signed so that gestures released outside the canvas
/// (left of or above the origin) can still be represented and clipped later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a canvas-local egui position to a pixel position.
    pub fn from_pos2(pos: egui::Pos2) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.floor() as i32,
        }
    }
}

/// An axis-aligned rectangle in pixel space, `x..=x + width`, `y..=y + height`.
///
/// Matches the inclusive convention of outline drawing: a rectangle of width
/// 15 spans 16 pixel columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds the bounding box of two corners regardless of drag direction.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// The same rectangle as an egui rect offset by `origin`, for painting.
    pub fn to_egui(&self, origin: egui::Pos2) -> egui::Rect {
        egui::Rect::from_min_size(
            origin + egui::vec2(self.x as f32, self.y as f32),
            egui::vec2(self.width as f32, self.height as f32),
        )
    }
}
