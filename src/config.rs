use std::path::Path;

use egui::Color32;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};
use crate::tools::{MarkerPreset, ToolPalette};

/// Environment variable naming a JSON config file that overrides saved settings
pub const CONFIG_ENV_VAR: &str = "STICKER_SKETCHPAD_CONFIG";

/// Look and palette settings of the sketchpad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to defaults so older files keep loading
pub struct SketchConfig {
    pub canvas_size: [f32; 2],
    pub background: [u8; 4],
    pub ink: [u8; 4],
    pub outline: [u8; 4],
    pub outline_width: f32,
    pub glyph_size: f32,
    pub markers: Vec<MarkerPreset>,
    pub stickers: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256.0, 256.0],
            background: [255, 255, 255, 255],
            ink: [0, 0, 0, 255],
            outline: [128, 128, 128, 255],
            outline_width: 1.0,
            glyph_size: 32.0,
            markers: vec![MarkerPreset::new("Thin", 2.0), MarkerPreset::new("Thick", 6.0)],
            stickers: vec!["🐸".to_owned(), "⭐".to_owned(), "🌮".to_owned()],
        }
    }
}

impl SketchConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(text: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("📄 Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pick the config the app starts with: the file named by
    /// `STICKER_SKETCHPAD_CONFIG`, then the saved settings, then defaults.
    pub fn resolve(saved: Option<Self>) -> Self {
        Self::resolve_from(std::env::var(CONFIG_ENV_VAR).ok(), saved)
    }

    fn resolve_from(file: Option<String>, saved: Option<Self>) -> Self {
        if let Some(path) = file {
            match Self::load(&path) {
                Ok(config) => return config,
                Err(err) => warn!("Ignoring config file {}: {}", path, err),
            }
        }
        match saved {
            Some(config) => match config.validate() {
                Ok(()) => config,
                Err(err) => {
                    warn!("Ignoring saved config: {}", err);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Reject sizes and marker thicknesses that are not positive finite
    /// numbers, and blank sticker glyphs
    pub fn validate(&self) -> SketchResult<()> {
        let dimensions = [
            ("canvas_size[0]", self.canvas_size[0]),
            ("canvas_size[1]", self.canvas_size[1]),
            ("glyph_size", self.glyph_size),
            ("outline_width", self.outline_width),
        ];
        if let Some((field, value)) = dimensions
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            return Err(SketchError::InvalidDimension { field, value });
        }
        for preset in &self.markers {
            preset.tool().validate()?;
        }
        if self.stickers.iter().any(|glyph| glyph.trim().is_empty()) {
            return Err(SketchError::EmptyGlyph);
        }
        Ok(())
    }

    pub fn palette(&self) -> ToolPalette {
        ToolPalette::new(self.markers.clone(), self.stickers.clone())
    }

    pub fn background_color(&self) -> Color32 {
        rgba(self.background)
    }

    pub fn ink_color(&self) -> Color32 {
        rgba(self.ink)
    }

    pub fn outline_color(&self) -> Color32 {
        rgba(self.outline)
    }
}

fn rgba([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
