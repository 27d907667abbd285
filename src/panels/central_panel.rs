use crate::SketchApp;
use crate::input::PointerSnapshot;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let [width, height] = app.config().canvas_size;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, height), egui::Sense::drag());
        let canvas_rect = response.rect;
        painter.rect_filled(canvas_rect, 0.0, app.config().background_color());

        // Handle input
        app.input_mut().set_canvas_rect(canvas_rect);
        let events = app.input_mut().process(PointerSnapshot::capture(ctx));
        for event in events {
            app.dispatch(event);
        }

        // Render the canvas
        app.sketchpad().surface().paint(&painter, canvas_rect.min);
    });
}
