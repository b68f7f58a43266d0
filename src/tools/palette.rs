use egui::Color32;

/// A palette entry with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color32,
}

const fn named(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        color: Color32::from_rgb(r, g, b),
    }
}

/// The fixed set of drawing colors, in toolbar order.
pub const PALETTE: [NamedColor; 10] = [
    named("Black", 0, 0, 0),
    named("Red", 255, 0, 0),
    named("Green", 0, 255, 0),
    named("Blue", 0, 0, 255),
    named("Orange", 255, 200, 0),
    named("Magenta", 255, 0, 255),
    named("Cyan", 0, 255, 255),
    named("Gray", 128, 128, 128),
    named("Pink", 255, 175, 175),
    named("Yellow", 255, 255, 0),
];

/// Display name of `color`, or "Custom" if it is not a palette color.
pub fn color_name(color: Color32) -> &'static str {
    PALETTE
        .iter()
        .find(|entry| entry.color == color)
        .map_or("Custom", |entry| entry.name)
}
