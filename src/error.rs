use thiserror::Error;

/// Errors raised while setting up a sketchpad or editing its configuration.
///
/// Drawing operations themselves never fail; these only come from setup,
/// configuration loading and palette editing.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("No rendering surface was attached before the sketchpad was built")]
    SurfaceUnavailable,

    #[error("Sticker glyph must contain at least one visible character")]
    EmptyGlyph,

    #[error("Marker thickness must be a positive finite number, got {0}")]
    InvalidThickness(f32),

    #[error("Config value `{field}` must be a positive finite number, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for sketchpad setup operations
pub type SketchResult<T> = Result<T, SketchError>;
