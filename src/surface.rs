use egui::Pos2;

/// The drawing primitives the sketchpad issues.
///
/// A surface owns whatever pixels or shapes it produces; commands and previews
/// only ever talk to it through these calls.
pub trait Surface {
    /// Wipe everything painted so far.
    fn clear(&mut self);

    /// Stroke a connected line through `points`. A single repeated point is a dot.
    fn draw_polyline(&mut self, points: &[Pos2], thickness: f32);

    /// Paint a glyph centered on `position`.
    fn draw_glyph(&mut self, glyph: &str, position: Pos2, opacity: f32);

    /// Stroke a circle outline centered on `center`.
    fn draw_outline(&mut self, center: Pos2, radius: f32);
}

/// One recorded primitive invocation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Polyline { points: Vec<Pos2>, thickness: f32 },
    Glyph { glyph: String, position: Pos2, opacity: f32 },
    Outline { center: Pos2, radius: f32 },
}

/// Surface that records every call instead of painting.
///
/// Each `clear` starts a new frame, so the frame list mirrors the redraws the
/// sketchpad performed.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frames: Vec<Vec<DrawCall>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames recorded so far, oldest first
    pub fn frames(&self) -> &[Vec<DrawCall>] {
        &self.frames
    }

    /// The calls of the most recent frame, or an empty slice before the first clear
    pub fn last_frame(&self) -> &[DrawCall] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn push(&mut self, call: DrawCall) {
        // Draws before the first clear still belong somewhere.
        if self.frames.is_empty() {
            self.frames.push(Vec::new());
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.push(call);
        }
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.frames.push(Vec::new());
    }

    fn draw_polyline(&mut self, points: &[Pos2], thickness: f32) {
        self.push(DrawCall::Polyline {
            points: points.to_vec(),
            thickness,
        });
    }

    fn draw_glyph(&mut self, glyph: &str, position: Pos2, opacity: f32) {
        self.push(DrawCall::Glyph {
            glyph: glyph.to_owned(),
            position,
            opacity,
        });
    }

    fn draw_outline(&mut self, center: Pos2, radius: f32) {
        self.push(DrawCall::Outline { center, radius });
    }
}
