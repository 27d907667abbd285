use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};

mod palette;
mod selector;

pub use palette::{MarkerPreset, ToolPalette};
pub use selector::ToolSelector;

/// Default marker thickness used before any tool is chosen
pub const DEFAULT_MARKER_THICKNESS: f32 = 2.0;

/// The drawing tool and its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolConfig {
    Marker { thickness: f32 },
    Sticker { glyph: String },
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig::Marker {
            thickness: DEFAULT_MARKER_THICKNESS,
        }
    }
}

impl ToolConfig {
    pub fn name(&self) -> &'static str {
        match self {
            ToolConfig::Marker { .. } => "Marker",
            ToolConfig::Sticker { .. } => "Sticker",
        }
    }

    /// Markers need a positive finite thickness, stickers a visible glyph
    pub fn validate(&self) -> SketchResult<()> {
        match self {
            ToolConfig::Marker { thickness } if !thickness.is_finite() || *thickness <= 0.0 => {
                Err(SketchError::InvalidThickness(*thickness))
            }
            ToolConfig::Sticker { glyph } if glyph.trim().is_empty() => {
                Err(SketchError::EmptyGlyph)
            }
            _ => Ok(()),
        }
    }

    /// This tool if it is usable, otherwise the default marker
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                warn!("Ignoring unusable tool {}: {}", self, err);
                Self::default()
            }
        }
    }
}

impl std::fmt::Display for ToolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolConfig::Marker { thickness } => write!(f, "Marker ({thickness}px)"),
            ToolConfig::Sticker { glyph } => write!(f, "Sticker {glyph}"),
        }
    }
}
