use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::ToolConfig;
use crate::error::{SketchError, SketchResult};

/// A named marker thickness offered in the tools panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPreset {
    pub label: String,
    pub thickness: f32,
}

impl MarkerPreset {
    pub fn new(label: impl Into<String>, thickness: f32) -> Self {
        Self {
            label: label.into(),
            thickness,
        }
    }

    pub fn tool(&self) -> ToolConfig {
        ToolConfig::Marker {
            thickness: self.thickness,
        }
    }
}

/// The tools the user can pick from: marker presets and sticker glyphs,
/// including stickers the user typed in.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPalette {
    markers: Vec<MarkerPreset>,
    stickers: Vec<String>,
}

impl ToolPalette {
    pub fn new(markers: Vec<MarkerPreset>, stickers: Vec<String>) -> Self {
        Self { markers, stickers }
    }

    pub fn markers(&self) -> &[MarkerPreset] {
        &self.markers
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    /// Add a custom sticker and return the stored glyph.
    ///
    /// Surrounding whitespace is dropped. Adding a glyph that is already
    /// present returns it without duplicating the entry.
    pub fn add_sticker(&mut self, text: &str) -> SketchResult<String> {
        let glyph = text.trim();
        if glyph.is_empty() {
            return Err(SketchError::EmptyGlyph);
        }
        if self.stickers.iter().any(|existing| existing == glyph) {
            debug!("Sticker {} already in palette", glyph);
        } else {
            info!("➕ Custom sticker added: {}", glyph);
            self.stickers.push(glyph.to_owned());
        }
        Ok(glyph.to_owned())
    }
}
