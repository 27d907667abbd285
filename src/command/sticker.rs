use egui::Pos2;

use super::CommandId;
use crate::surface::Surface;

/// Opacity of a placed sticker
pub const STICKER_OPACITY: f32 = 1.0;

/// A placed glyph. Dragging moves it; earlier positions are not kept.
#[derive(Debug)]
pub struct Sticker {
    id: CommandId,
    glyph: String,
    position: Pos2,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, position: Pos2) -> Self {
        Self {
            id: CommandId::new(),
            glyph: glyph.into(),
            position,
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn extend(&mut self, point: Pos2) {
        self.position = point;
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_glyph(&self.glyph, self.position, STICKER_OPACITY);
    }
}
