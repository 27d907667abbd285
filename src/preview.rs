use egui::Pos2;

use crate::surface::Surface;
use crate::tools::ToolConfig;

/// Opacity of the ghost sticker shown under the hovering pointer
pub const GHOST_OPACITY: f32 = 0.5;

/// Uncommitted hint of what pressing at the pointer would create.
/// Always drawn last, on top of the committed drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    MarkerOutline { center: Pos2, thickness: f32 },
    GhostSticker { glyph: String, position: Pos2 },
}

impl Preview {
    pub fn from_tool(tool: &ToolConfig, at: Pos2) -> Self {
        match tool {
            ToolConfig::Marker { thickness } => Preview::MarkerOutline {
                center: at,
                thickness: *thickness,
            },
            ToolConfig::Sticker { glyph } => Preview::GhostSticker {
                glyph: glyph.clone(),
                position: at,
            },
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Preview::MarkerOutline { center, thickness } => {
                surface.draw_outline(*center, thickness / 2.0);
            }
            Preview::GhostSticker { glyph, position } => {
                surface.draw_glyph(glyph, *position, GHOST_OPACITY);
            }
        }
    }
}
