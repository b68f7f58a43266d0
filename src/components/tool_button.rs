use eframe::egui;

use crate::toolbar::ToolbarButton;

const BUTTON_FILL: egui::Color32 = egui::Color32::LIGHT_GRAY;
const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(100, 181, 246); // Light blue when selected
const OUTLINE: egui::Color32 = egui::Color32::BLACK;

/// A toolbar button as painted over the canvas.
pub struct ToolButton<'a> {
    pub button: &'a ToolbarButton,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(button: &'a ToolbarButton, selected: bool) -> Self {
        Self { button, selected }
    }

    /// Paints the button with its top-left corner offset by `origin`.
    pub fn paint(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let rect = self.button.rect.to_egui(origin);
        let fill = if self.selected {
            SELECTED_FILL
        } else {
            BUTTON_FILL
        };

        painter.rect_filled(rect, 0.0, fill);
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, OUTLINE));
        painter.text(
            rect.left_center() + egui::vec2(10.0, 0.0),
            egui::Align2::LEFT_CENTER,
            self.button.label,
            egui::FontId::proportional(12.0),
            OUTLINE,
        );
    }
}

/// Paints a palette swatch. The current color gets a thicker outline.
pub fn paint_swatch(
    painter: &egui::Painter,
    rect: egui::Rect,
    color: egui::Color32,
    selected: bool,
) {
    painter.rect_filled(rect, 0.0, color);
    let width = if selected { 3.0 } else { 1.0 };
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(width, OUTLINE));
}
