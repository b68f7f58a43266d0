use eframe::egui;

use crate::PaintApp;

/// The drawing surface: fills the window, feeds pointer input to the editor
/// and paints the canvas with the toolbar overlay.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context, accept_input: bool) {
    let mut requests = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());

            // The canvas always tracks the viewport size.
            let width = canvas_rect.width().floor().max(0.0) as usize;
            let height = canvas_rect.height().floor().max(0.0) as usize;
            if width > 0 && height > 0 {
                app.editor.resize_canvas(width, height);
            }

            if accept_input {
                for event in app.input.process_input(ctx, canvas_rect) {
                    if let Some(request) = app.editor.handle_event(&event) {
                        requests.push(request);
                    }
                }
            }

            app.renderer.sync(ctx, &mut app.editor);
            app.renderer.render(ui.painter(), canvas_rect, &app.editor);
        });

    for request in requests {
        app.handle_request(request);
    }
}
