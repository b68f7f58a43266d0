use eframe::egui::{self, Color32, TextureHandle, TextureOptions};

use crate::components::{ToolButton, paint_swatch};
use crate::state::EditorContext;
use crate::toolbar::ToolbarItem;
use crate::tools::PALETTE;

/// Keeps the canvas texture in sync with the editor and paints the canvas
/// with the toolbar on top.
#[derive(Default)]
pub struct Renderer {
    canvas_texture: Option<TextureHandle>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.canvas_texture.is_some())
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-uploads the canvas if it changed since the last frame.
    pub fn sync(&mut self, ctx: &egui::Context, editor: &mut EditorContext) {
        let dirty = editor.take_canvas_dirty();
        let image = match (&self.canvas_texture, dirty) {
            (Some(_), false) => return,
            _ => editor.canvas().to_color_image(),
        };

        match &mut self.canvas_texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.canvas_texture =
                    Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
    }

    /// Renders the current frame into `rect`, whose top-left corner is the
    /// canvas origin.
    pub fn render(&self, painter: &egui::Painter, rect: egui::Rect, editor: &EditorContext) {
        painter.rect_filled(rect, 0.0, crate::canvas::BACKGROUND);

        if let Some(texture) = &self.canvas_texture {
            let [w, h] = editor.canvas().size();
            let canvas_rect = egui::Rect::from_min_size(rect.min, egui::vec2(w as f32, h as f32));
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), canvas_rect, uv, Color32::WHITE);
        }

        self.render_toolbar(painter, rect, editor);
    }

    fn render_toolbar(&self, painter: &egui::Painter, rect: egui::Rect, editor: &EditorContext) {
        let toolbar = editor.toolbar();
        for (index, swatch) in toolbar.swatches().iter().enumerate() {
            paint_swatch(
                painter,
                swatch.to_egui(rect.min),
                PALETTE[index].color,
                index == editor.color_index(),
            );
        }

        for button in toolbar.buttons() {
            let selected = button.item == ToolbarItem::Tool(editor.tool());
            ToolButton::new(button, selected).paint(painter, rect.min);
        }

        painter.text(
            rect.left_bottom() + egui::vec2(10.0, -20.0),
            egui::Align2::LEFT_BOTTOM,
            editor.status_text(),
            egui::FontId::proportional(12.0),
            Color32::BLACK,
        );
    }
}
