use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};
use log::trace;

use crate::command::Command;
use crate::config::SketchConfig;
use crate::preview::Preview;
use crate::surface::Surface;

/// Redraws the whole picture from the model.
#[derive(Debug, Default)]
pub struct RenderPipeline {
    redraws: u64,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the surface, paint the commands in order, then the preview on top.
    /// Repeating the call without touching the model repeats the same draw calls.
    pub fn redraw(
        &mut self,
        surface: &mut dyn Surface,
        commands: &[Command],
        preview: Option<&Preview>,
    ) {
        surface.clear();
        for command in commands {
            command.render(surface);
        }
        if let Some(preview) = preview {
            preview.render(surface);
        }
        self.redraws += 1;
        trace!(
            "Redraw #{}: {} commands, preview: {}",
            self.redraws,
            commands.len(),
            preview.is_some()
        );
    }

    /// Number of redraws performed so far
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }
}

/// egui surface that keeps the drawn picture as a list of shapes in canvas
/// coordinates. The app repaints that list every frame.
pub struct ShapeSurface {
    ctx: egui::Context,
    shapes: Vec<Shape>,
    ink: Color32,
    outline: Stroke,
    glyph_font: FontId,
}

impl std::fmt::Debug for ShapeSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeSurface")
            .field("shapes", &self.shapes.len())
            .field("ink", &self.ink)
            .field("glyph_font", &self.glyph_font)
            .finish()
    }
}

impl ShapeSurface {
    pub fn new(ctx: egui::Context, config: &SketchConfig) -> Self {
        Self {
            ctx,
            shapes: Vec::new(),
            ink: config.ink_color(),
            outline: Stroke::new(config.outline_width, config.outline_color()),
            glyph_font: FontId::proportional(config.glyph_size),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Paint the retained shapes with the canvas' top-left corner at `origin`
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        painter.extend(self.shapes.iter().cloned().map(|mut shape| {
            shape.translate(offset);
            shape
        }));
    }
}

impl Surface for ShapeSurface {
    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn draw_polyline(&mut self, points: &[Pos2], thickness: f32) {
        match points {
            [] => {}
            [first, rest @ ..] if rest.iter().all(|p| p == first) => {
                // egui draws nothing for a zero-length line.
                self.shapes
                    .push(Shape::circle_filled(*first, thickness / 2.0, self.ink));
            }
            _ => self
                .shapes
                .push(Shape::line(points.to_vec(), Stroke::new(thickness, self.ink))),
        }
    }

    fn draw_glyph(&mut self, glyph: &str, position: Pos2, opacity: f32) {
        let color = self.ink.gamma_multiply(opacity);
        let shape = self.ctx.fonts(|fonts| {
            Shape::text(
                fonts,
                position,
                Align2::CENTER_CENTER,
                glyph,
                self.glyph_font.clone(),
                color,
            )
        });
        self.shapes.push(shape);
    }

    fn draw_outline(&mut self, center: Pos2, radius: f32) {
        self.shapes
            .push(Shape::circle_stroke(center, radius, self.outline));
    }
}
