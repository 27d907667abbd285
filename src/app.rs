use log::info;
use serde::{Deserialize, Serialize};

use crate::config::SketchConfig;
use crate::error::SketchResult;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::ShapeSurface;
use crate::sketchpad::Sketchpad;
use crate::tools::{ToolConfig, ToolPalette};

/// What survives a restart: settings and the selected tool, never the drawing.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
struct SavedState {
    config: SketchConfig,
    tool: ToolConfig,
}

pub struct SketchApp {
    config: SketchConfig,
    palette: ToolPalette,
    sketchpad: Sketchpad<ShapeSurface>,
    input: InputHandler,
    custom_sticker: String,
    last_error: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> SketchResult<Self> {
        let saved: Option<SavedState> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
        let (saved_config, tool) = match saved {
            Some(saved) => (Some(saved.config), saved.tool.validated_or_default()),
            None => (None, ToolConfig::default()),
        };
        let config = SketchConfig::resolve(saved_config);

        let sketchpad = Sketchpad::builder()
            .surface(ShapeSurface::new(cc.egui_ctx.clone(), &config))
            .tool(tool)
            .build()?;
        info!("🎨 Sketchpad ready with {}", sketchpad.tool());

        Ok(Self {
            palette: config.palette(),
            config,
            sketchpad,
            input: InputHandler::new(egui::Rect::NOTHING),
            custom_sticker: String::new(),
            last_error: None,
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn palette(&self) -> &ToolPalette {
        &self.palette
    }

    pub fn sketchpad(&self) -> &Sketchpad<ShapeSurface> {
        &self.sketchpad
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn custom_sticker_mut(&mut self) -> &mut String {
        &mut self.custom_sticker
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dispatch(&mut self, event: InputEvent) {
        self.sketchpad.handle_event(event);
    }

    /// Add the typed glyph to the palette and switch to it
    pub fn add_custom_sticker(&mut self) {
        match self.palette.add_sticker(&self.custom_sticker) {
            Ok(glyph) => {
                self.config.stickers = self.palette.stickers().to_vec();
                self.custom_sticker.clear();
                self.last_error = None;
                self.dispatch(InputEvent::SelectSticker { glyph });
            }
            Err(err) => self.last_error = Some(err.to_string()),
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let saved = SavedState {
            config: self.config.clone(),
            tool: self.sketchpad.tool().clone(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &saved);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
