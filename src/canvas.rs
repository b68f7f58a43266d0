use egui::{Color32, ColorImage};
use image::RgbaImage;

/// Color of untouched canvas area: new canvases, cleared canvases, the area
/// gained by growing a canvas, and whatever the eraser paints.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// The raster image being painted.
///
/// Pixels are stored row-major, `width * height` entries. Every drawing
/// operation in the crate works directly on this buffer; there is no separate
/// graphics context to keep in sync with it.
#[derive(Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Canvas {
    /// Creates a canvas filled with the background color.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, BACKGROUND)
    }

    pub fn filled(width: usize, height: usize, color: Color32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Wraps an existing buffer. Returns `None` if the buffer length does not
    /// match the dimensions.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color32>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color32] {
        &mut self.pixels
    }

    /// Row-major index of `(x, y)`, or `None` outside the canvas.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Reads a pixel. Out-of-bounds reads are rejected with `None`.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes a pixel. Out-of-bounds writes are clipped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(BACKGROUND);
    }

    /// Resizes the canvas, keeping existing content anchored at the origin.
    ///
    /// The new buffer is fully built (background first, then the overlapping
    /// `min(w, new_w) x min(h, new_h)` block copied over) before it replaces
    /// the old one.
    pub fn resize_preserving(&mut self, new_width: usize, new_height: usize) {
        if new_width == self.width && new_height == self.height {
            return;
        }

        let mut pixels = vec![BACKGROUND; new_width * new_height];
        let copy_w = self.width.min(new_width);
        let copy_h = self.height.min(new_height);
        for y in 0..copy_h {
            let src = &self.pixels[y * self.width..y * self.width + copy_w];
            pixels[y * new_width..y * new_width + copy_w].copy_from_slice(src);
        }

        log::debug!(
            "Resized canvas {}x{} -> {}x{}",
            self.width,
            self.height,
            new_width,
            new_height
        );
        *self = Self {
            width: new_width,
            height: new_height,
            pixels,
        };
    }

    /// Composites `image` at the origin using source-over blending, clipped to
    /// the canvas. The canvas keeps its size.
    pub fn draw_image(&mut self, image: &RgbaImage) {
        let w = (image.width() as usize).min(self.width);
        let h = (image.height() as usize).min(self.height);
        for y in 0..h {
            for x in 0..w {
                let [r, g, b, a] = image.get_pixel(x as u32, y as u32).0;
                let dst = &mut self.pixels[y * self.width + x];
                *dst = blend_over(Color32::from_rgba_unmultiplied(r, g, b, a), *dst);
            }
        }
    }

    /// Copies the canvas into an RGBA8 image for encoding.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut raw = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            raw.extend_from_slice(&pixel.to_srgba_unmultiplied());
        }
        // Length always matches width * height * 4.
        RgbaImage::from_raw(self.width as u32, self.height as u32, raw)
            .unwrap_or_else(|| RgbaImage::new(self.width as u32, self.height as u32))
    }

    /// Copies the canvas into an egui image for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        let mut image = ColorImage::new([self.width, self.height], BACKGROUND);
        image.pixels.copy_from_slice(&self.pixels);
        image
    }
}

/// Source-over blend of `src` onto `dst`.
fn blend_over(src: Color32, dst: Color32) -> Color32 {
    match src.a() {
        255 => src,
        0 => dst,
        _ => {
            let [sr, sg, sb, sa] = src.to_srgba_unmultiplied();
            let [dr, dg, db, da] = dst.to_srgba_unmultiplied();
            let sa = sa as f32 / 255.0;
            let da = da as f32 / 255.0;
            let out_a = sa + da * (1.0 - sa);
            let channel = |s: u8, d: u8| {
                let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
                v.round().clamp(0.0, 255.0) as u8
            };
            Color32::from_rgba_unmultiplied(
                channel(sr, dr),
                channel(sg, dg),
                channel(sb, db),
                (out_a * 255.0).round() as u8,
            )
        }
    }
}
