use crate::SketchApp;
use crate::input::InputEvent;
use crate::tools::ToolConfig;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Markers");

            // Collect the palette first to avoid borrowing issues
            let markers = app.palette().markers().to_vec();
            let stickers = app.palette().stickers().to_vec();
            let current = app.sketchpad().tool().clone();

            for preset in &markers {
                let selected = current == preset.tool();
                if ui.selectable_label(selected, &preset.label).clicked() {
                    app.dispatch(InputEvent::SelectMarker {
                        thickness: preset.thickness,
                    });
                }
            }
            ui.separator();

            ui.heading("Stickers");
            ui.horizontal_wrapped(|ui| {
                for glyph in &stickers {
                    let selected = matches!(&current, ToolConfig::Sticker { glyph: g } if g == glyph);
                    if ui.selectable_label(selected, glyph).clicked() {
                        app.dispatch(InputEvent::SelectSticker {
                            glyph: glyph.clone(),
                        });
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(app.custom_sticker_mut())
                        .hint_text("Custom")
                        .desired_width(80.0),
                );
                if ui.button("Add").clicked() {
                    app.add_custom_sticker();
                }
            });
            if let Some(error) = app.last_error() {
                ui.colored_label(egui::Color32::RED, error);
            }
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let history = app.sketchpad().history();
                let can_undo = history.can_undo();
                let can_redo = history.can_redo();
                let can_clear = can_undo || can_redo;

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.dispatch(InputEvent::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.dispatch(InputEvent::Redo);
                }
                if ui.add_enabled(can_clear, egui::Button::new("Clear")).clicked() {
                    app.dispatch(InputEvent::ClearAll);
                }
            });

            let history = app.sketchpad().history();
            ui.label(format!("Drawn: {}", history.active().len()));
            ui.label(format!("Undone: {}", history.redo_stack().len()));
            ui.label(format!("Tool: {}", app.sketchpad().tool()));
        });
}
